//! Nine-box talent grid classification pipeline.
//!
//! A raw [`EmployeeRecord`] flows through feature extraction (including the
//! civil-service grade parser), a scaled nearest-reference model calibrated
//! on nine fixed points, and a catalog of grid-cell metadata, ending in a
//! [`TalentAssessment`] annotated with justification text. The
//! [`ClassificationService`] facade owns the fallback policy: callers always
//! get a structurally complete assessment, never an error.

pub mod domain;
mod features;
mod grade;
mod justification;
mod model;
mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ClassificationSource, DimensionAssessment, EmployeeRecord, RatingLevel, TalentAssessment,
    TalentBox,
};
pub use features::{extract_features, FeatureVector, DEFAULT_EDUCATION, DEFAULT_GRADE};
pub use grade::parse_grade;
pub use justification::{performance_justification, potential_justification};
pub use model::{ModelError, ReferenceModel, ScalingTransform};
pub use service::ClassificationService;
