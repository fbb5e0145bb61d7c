use super::domain::{ClassificationSource, EmployeeRecord, TalentAssessment, TalentBox};
use super::features::{extract_features, FeatureVector};
use super::justification::{performance_justification, potential_justification};
use super::model::ReferenceModel;
use tracing::warn;

/// Grid cell substituted whenever the model cannot answer.
const FALLBACK_BOX: TalentBox = TalentBox::CorePlayer;

/// Facade composing extraction, the reference model, the cell catalog, and
/// rationale generation.
///
/// `new` performs the one-time model fit; afterwards the service is
/// read-only and safe to share across threads. `classify` never fails:
/// any internal error is reported and converted into the default
/// mid-grid placement, tagged [`ClassificationSource::Fallback`].
pub struct ClassificationService {
    model: ReferenceModel,
}

impl ClassificationService {
    pub fn new() -> Self {
        Self {
            model: ReferenceModel::fit(),
        }
    }

    pub fn classify(&self, record: &EmployeeRecord) -> TalentAssessment {
        self.classify_features(record, extract_features(record))
    }

    pub(crate) fn classify_features(
        &self,
        record: &EmployeeRecord,
        features: FeatureVector,
    ) -> TalentAssessment {
        match self.model.predict(&features) {
            Ok(talent_box) => {
                let mut assessment =
                    TalentAssessment::describe(talent_box, ClassificationSource::Model);
                assessment.performance.justification =
                    Some(performance_justification(record, talent_box.performance()));
                assessment.potential.justification =
                    Some(potential_justification(record, talent_box.potential()));
                assessment
            }
            Err(error) => {
                warn!(%error, "classification failed, returning default placement");
                TalentAssessment::describe(FALLBACK_BOX, ClassificationSource::Fallback)
            }
        }
    }
}

impl Default for ClassificationService {
    fn default() -> Self {
        Self::new()
    }
}
