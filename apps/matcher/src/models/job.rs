use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weight applied to a job skill that does not declare one.
pub const DEFAULT_SKILL_WEIGHT: f64 = 1.0;

/// A skill a job posting asks for. Weights are independent per skill and
/// need not sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSkillRequirement {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_years: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl JobSkillRequirement {
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            min_years: None,
            weight: None,
        }
    }

    pub fn optional(name: &str) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    pub fn with_min_years(mut self, years: u32) -> Self {
        self.min_years = Some(years);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_SKILL_WEIGHT)
    }
}

/// The parts of a job posting the scorer reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSnapshot {
    #[serde(default)]
    pub job_id: Uuid,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub skills: Vec<JobSkillRequirement>,
}

impl JobSnapshot {
    pub fn new(job_id: Uuid) -> Self {
        Self {
            job_id,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_requirements(mut self, requirements: &str) -> Self {
        self.requirements = Some(requirements.to_string());
        self
    }

    pub fn with_skill(mut self, skill: JobSkillRequirement) -> Self {
        self.skills.push(skill);
        self
    }

    /// Description and requirements joined and lowercased, for keyword probes.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {}",
            self.description.as_deref().unwrap_or_default(),
            self.requirements.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}
