//! Indonesian rationale templates for the two grid axes. Wording is a
//! presentation detail; defaults mirror the feature extractor so the text
//! describes the same record the model saw.

use super::domain::{EmployeeRecord, RatingLevel};
use super::features::{DEFAULT_EDUCATION, DEFAULT_GRADE};

pub fn performance_justification(record: &EmployeeRecord, level: RatingLevel) -> String {
    let grade = record.grade.as_deref().unwrap_or(DEFAULT_GRADE);
    let experience = record.work_experience.unwrap_or(0);

    match level {
        RatingLevel::High => format!(
            "Menunjukkan kinerja tinggi dengan grade {grade} dan pengalaman {experience} tahun."
        ),
        RatingLevel::Medium => format!(
            "Kinerja konsisten dengan grade {grade} dan pengalaman {experience} tahun."
        ),
        RatingLevel::Low => format!(
            "Perlu peningkatan kinerja, grade {grade} dengan pengalaman {experience} tahun."
        ),
    }
}

pub fn potential_justification(record: &EmployeeRecord, level: RatingLevel) -> String {
    let education = record.education.as_deref().unwrap_or(DEFAULT_EDUCATION);
    // Raw list length here, unlike the extractor: an absent list reads as
    // zero competencies in the narrative.
    let skills = record.skills.as_deref().map_or(0, <[String]>::len);

    match level {
        RatingLevel::High => format!(
            "Potensi tinggi dengan pendidikan {education} dan {skills} kompetensi."
        ),
        RatingLevel::Medium => format!(
            "Potensi berkembang dengan pendidikan {education} dan {skills} kompetensi."
        ),
        RatingLevel::Low => format!(
            "Memerlukan pengembangan lebih lanjut, pendidikan {education}."
        ),
    }
}
