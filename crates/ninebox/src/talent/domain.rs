use serde::{Deserialize, Serialize};

/// Raw personnel snapshot submitted for grid placement.
///
/// Every field is optional; downstream extraction substitutes a fixed
/// default for anything missing, so an empty record still classifies.
/// `work_experience` is taken as-is, negative values included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    /// Indonesian education code (`S3`, `S2`, `S1`, `D4`, `D3`, `SMA`).
    pub education: Option<String>,
    /// Tenure in whole years.
    pub work_experience: Option<i64>,
    /// Civil-service grade, e.g. `III/c`.
    pub grade: Option<String>,
    /// Declared competencies.
    pub skills: Option<Vec<String>>,
}

/// Low/Medium/High rating shared by the performance and potential axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingLevel {
    Low,
    Medium,
    High,
}

impl RatingLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub const fn score(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// One cell of the performance/potential grid, in index order 0..=8.
///
/// The variant itself carries all cell metadata, so a lookup can never
/// miss: an out-of-range cell is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentBox {
    Underperformer,
    Risk,
    Enigma,
    Inconsistent,
    CorePlayer,
    HighPotential,
    SolidProfessional,
    HighPerformer,
    StarTopTalent,
}

impl TalentBox {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Underperformer,
            Self::Risk,
            Self::Enigma,
            Self::Inconsistent,
            Self::CorePlayer,
            Self::HighPotential,
            Self::SolidProfessional,
            Self::HighPerformer,
            Self::StarTopTalent,
        ]
    }

    /// Zero-based grid index, the classifier's label space.
    pub const fn index(self) -> usize {
        match self {
            Self::Underperformer => 0,
            Self::Risk => 1,
            Self::Enigma => 2,
            Self::Inconsistent => 3,
            Self::CorePlayer => 4,
            Self::HighPotential => 5,
            Self::SolidProfessional => 6,
            Self::HighPerformer => 7,
            Self::StarTopTalent => 8,
        }
    }

    /// One-based cell number shown to users.
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Underperformer => "Underperformer",
            Self::Risk => "Risk",
            Self::Enigma => "Enigma",
            Self::Inconsistent => "Inconsistent",
            Self::CorePlayer => "Core Player",
            Self::HighPotential => "High Potential",
            Self::SolidProfessional => "Solid Professional",
            Self::HighPerformer => "High Performer",
            Self::StarTopTalent => "Star/Top Talent",
        }
    }

    pub const fn performance(self) -> RatingLevel {
        match self {
            Self::Underperformer | Self::Risk | Self::Enigma => RatingLevel::Low,
            Self::Inconsistent | Self::CorePlayer | Self::HighPotential => RatingLevel::Medium,
            Self::SolidProfessional | Self::HighPerformer | Self::StarTopTalent => {
                RatingLevel::High
            }
        }
    }

    pub const fn potential(self) -> RatingLevel {
        match self {
            Self::Underperformer | Self::Inconsistent | Self::SolidProfessional => {
                RatingLevel::Low
            }
            Self::Risk | Self::CorePlayer | Self::HighPerformer => RatingLevel::Medium,
            Self::Enigma | Self::HighPotential | Self::StarTopTalent => RatingLevel::High,
        }
    }

    pub const fn priority(self) -> &'static str {
        match self {
            Self::Underperformer | Self::Risk => "Low Priority",
            Self::Enigma => "Watch",
            Self::Inconsistent => "Moderate",
            Self::CorePlayer => "Core",
            Self::HighPotential | Self::HighPerformer => "High Priority",
            Self::SolidProfessional => "Retain",
            Self::StarTopTalent => "Critical Talent",
        }
    }
}

/// Rating on one grid axis, optionally annotated with rationale text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionAssessment {
    pub level: RatingLevel,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl DimensionAssessment {
    fn bare(level: RatingLevel) -> Self {
        Self {
            level,
            score: level.score(),
            justification: None,
        }
    }
}

/// Whether an assessment came out of the model or the failure fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    Model,
    Fallback,
}

/// Fully shaped grid placement returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentAssessment {
    pub talent_box: String,
    pub box_number: u8,
    pub performance: DimensionAssessment,
    pub potential: DimensionAssessment,
    pub priority: String,
    pub source: ClassificationSource,
}

impl TalentAssessment {
    /// Expands a grid cell into its catalog metadata, without rationale
    /// text. Justifications are attached by the classification service.
    pub fn describe(talent_box: TalentBox, source: ClassificationSource) -> Self {
        Self {
            talent_box: talent_box.label().to_string(),
            box_number: talent_box.number(),
            performance: DimensionAssessment::bare(talent_box.performance()),
            potential: DimensionAssessment::bare(talent_box.potential()),
            priority: talent_box.priority().to_string(),
            source,
        }
    }
}
