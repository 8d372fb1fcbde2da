use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::weights::ScoringWeights;
use crate::models::resume::EducationLevel;

/// Fractional digits kept on every stored score.
pub const SCORE_SCALE: usize = 2;

/// Outcome of scoring one candidate against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScoreResult {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    /// 0 to 100
    pub total_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub details: ScoreDetails,
    pub calculated_at: DateTime<Utc>,
}

impl MatchScoreResult {
    /// Explanation payload in the shape the persistence layer stores.
    pub fn details_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.details)
    }
}

/// Audit trail of how a score was derived. Display only; nothing recomputes
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub skill_breakdown: SkillBreakdown,
    pub experience_years: u32,
    pub required_experience_years: u32,
    /// Highest degree string held by the candidate, lowercased.
    pub education_level: Option<String>,
    pub required_education_level: Option<EducationLevel>,
    pub scoring_weights: ScoringWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBreakdown {
    pub skill_matches: Vec<SkillMatch>,
    /// Number of skill entries the job declares.
    pub total_required_skills: usize,
    pub matched_skills: usize,
}

/// Per job-skill line of the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub skill: String,
    pub required: bool,
    pub min_years: Option<u32>,
    pub weight: Option<f64>,
    pub matched: bool,
    pub candidate_years: Option<u32>,
}

/// Rounds to [`SCORE_SCALE`] digits, halves away from zero, working on the
/// shortest decimal representation of `value` so that `1.005` becomes `1.01`.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let repr = value.abs().to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if fraction.len() <= SCORE_SCALE {
        return value;
    }

    let digits = format!("{whole}{}", &fraction[..SCORE_SCALE]);
    let Ok(mut scaled) = digits.parse::<u64>() else {
        return (value * 100.0).round() / 100.0;
    };
    if fraction.as_bytes()[SCORE_SCALE] >= b'5' {
        scaled += 1;
    }
    (scaled as f64 / 100.0).copysign(value)
}
