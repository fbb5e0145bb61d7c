//! Nine-box talent grid classification for Indonesian civil-service
//! personnel records.
//!
//! The [`talent`] module carries the whole pipeline: a grade parser, a
//! feature extractor, a scaled nearest-reference model, and a
//! classification service that always answers with a fully shaped
//! assessment. The remaining modules host configuration, telemetry, and
//! error plumbing shared with the HTTP service that wraps this crate.

pub mod config;
pub mod error;
pub mod talent;
pub mod telemetry;
