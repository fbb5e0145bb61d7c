use crate::talent::domain::EmployeeRecord;
use crate::talent::service::ClassificationService;

pub(super) fn service() -> ClassificationService {
    ClassificationService::new()
}

pub(super) fn record(
    education: &str,
    work_experience: i64,
    grade: &str,
    skills: &[&str],
) -> EmployeeRecord {
    EmployeeRecord {
        education: Some(education.to_string()),
        work_experience: Some(work_experience),
        grade: Some(grade.to_string()),
        skills: Some(skills.iter().map(|skill| skill.to_string()).collect()),
    }
}

/// The illustrative analyst record used across the end-to-end scenarios.
pub(super) fn analyst_record() -> EmployeeRecord {
    record(
        "S1",
        5,
        "III/c",
        &["Python", "Data Analysis", "SQL", "Machine Learning"],
    )
}
