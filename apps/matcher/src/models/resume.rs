use serde::{Deserialize, Serialize};

/// Coarse skill level inferred from the words around a skill mention.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Proficiency {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

/// A named skill attributed to a candidate, usually mined from a résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Lowercased skill name.
    pub name: String,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub proficiency: Proficiency,
}

impl SkillRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            years_experience: None,
            proficiency: Proficiency::default(),
        }
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.years_experience = Some(years);
        self
    }

    pub fn with_proficiency(mut self, proficiency: Proficiency) -> Self {
        self.proficiency = proficiency;
        self
    }
}

/// Highest degree class recognised in résumé text or job requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    Associate,
    Bachelors,
    Masters,
    #[serde(rename = "PhD")]
    Phd,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Phd => "PhD",
            EducationLevel::Masters => "Masters",
            EducationLevel::Bachelors => "Bachelors",
            EducationLevel::Associate => "Associate",
        }
    }

    /// Ordinal used when comparing a candidate against a requirement.
    pub fn rank(&self) -> u8 {
        match self {
            EducationLevel::Phd => 4,
            EducationLevel::Masters => 3,
            EducationLevel::Bachelors => 2,
            EducationLevel::Associate => 1,
        }
    }
}

/// Scalar facts mined from a résumé. Fields that were not found stay `None`
/// and are left out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedResumeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_experience_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
}

impl ExtractedResumeData {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.total_experience_years.is_none()
            && self.education_level.is_none()
    }
}

/// Everything mined from one résumé body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub data: ExtractedResumeData,
    pub skills: Vec<SkillRecord>,
}
