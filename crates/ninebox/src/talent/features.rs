use super::domain::EmployeeRecord;
use super::grade::parse_grade;

/// Education code assumed when a record carries none.
pub const DEFAULT_EDUCATION: &str = "S1";
/// Grade assumed when a record carries none.
pub const DEFAULT_GRADE: &str = "III/c";

/// Skill count substituted for an absent or empty skills list.
const DEFAULT_SKILLS_COUNT: f64 = 3.0;

/// Numeric view of a record, in the fixed order the reference model was
/// calibrated with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub education_level: f64,
    pub experience_years: f64,
    pub grade_score: f64,
    pub skills_count: f64,
}

impl FeatureVector {
    pub const fn as_array(&self) -> [f64; 4] {
        [
            self.education_level,
            self.experience_years,
            self.grade_score,
            self.skills_count,
        ]
    }
}

fn education_level(code: &str) -> f64 {
    match code {
        "S3" => 4.0,
        "S2" => 3.0,
        "S1" | "D4" => 2.0,
        "D3" | "SMA" => 1.0,
        _ => 2.0,
    }
}

/// Maps a record to its feature vector. Total: every field falls back to
/// a fixed default, so extraction never fails.
pub fn extract_features(record: &EmployeeRecord) -> FeatureVector {
    let education = record.education.as_deref().unwrap_or(DEFAULT_EDUCATION);
    let grade = record.grade.as_deref().unwrap_or(DEFAULT_GRADE);

    // An explicitly empty skills list counts the same as an absent one.
    // Inherited behavior; flagged in the tests until product says otherwise.
    let skills_count = match record.skills.as_deref() {
        Some(skills) if !skills.is_empty() => skills.len() as f64,
        _ => DEFAULT_SKILLS_COUNT,
    };

    FeatureVector {
        education_level: education_level(education),
        experience_years: record.work_experience.unwrap_or(0) as f64,
        grade_score: parse_grade(grade),
        skills_count,
    }
}
