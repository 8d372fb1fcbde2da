use serde::{Deserialize, Serialize};

pub const SKILL_WEIGHT: f64 = 0.5;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;
pub const EDUCATION_WEIGHT: f64 = 0.2;

/// Weights blending the three sub-scores into the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl ScoringWeights {
    pub const FIXED: ScoringWeights = ScoringWeights {
        skills: SKILL_WEIGHT,
        experience: EXPERIENCE_WEIGHT,
        education: EDUCATION_WEIGHT,
    };

    /// skills*skill + experience*exp + education*edu, unclamped.
    pub fn combine(&self, skill: f64, experience: f64, education: f64) -> f64 {
        skill * self.skills + experience * self.experience + education * self.education
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::FIXED
    }
}
