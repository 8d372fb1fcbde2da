//! Match scoring: blends skill, experience and education sub-scores into a
//! 0-100 ranking number for a (candidate, job) pair.
//!
//! `MatchScorer` is the seam callers hold; `WeightedMatchScorer` is the only
//! backend and uses the fixed weights in [`weights`].

pub mod education;
pub mod experience;
pub mod ranking;
pub mod skills;
pub mod weights;

pub use ranking::{rank_candidates, recommend_jobs, RankedCandidate};
pub use weights::{ScoringWeights, EDUCATION_WEIGHT, EXPERIENCE_WEIGHT, SKILL_WEIGHT};

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::models::{
    round_half_up, CandidateSnapshot, JobSnapshot, MatchScoreResult, ScoreDetails,
};

/// Scores a candidate snapshot against a job snapshot.
///
/// Implementations must be pure: safe to call concurrently for independent
/// pairs without synchronisation.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &CandidateSnapshot, job: &JobSnapshot) -> MatchScoreResult;
}

/// Fixed-weight scorer. Experience periods without an end date run until
/// the reference date, or until today (UTC) when none is pinned.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMatchScorer {
    reference_date: Option<NaiveDate>,
}

impl WeightedMatchScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins "today" so repeated runs give identical results.
    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self {
            reference_date: Some(reference_date),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().naive_utc().date())
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, candidate: &CandidateSnapshot, job: &JobSnapshot) -> MatchScoreResult {
        let weights = ScoringWeights::FIXED;
        let inventory = candidate.skill_inventory();

        let skill_score = skills::skill_score(&inventory, job);

        let experience_years = experience::total_experience_years(&candidate.experiences, self.today());
        let required_experience_years = experience::required_experience_years(job);
        let experience_score =
            experience::experience_score(experience_years, required_experience_years);

        let education_level = education::highest_education(&candidate.educations);
        let required_education_level = education::required_education(job);
        let education_score =
            education::education_score(education_level.as_deref(), required_education_level);

        let total_score = weights.combine(skill_score, experience_score, education_score);

        debug!(
            "Scored candidate {} for job {}: total {total_score:.2} (skills {skill_score:.2}, experience {experience_score:.2}, education {education_score:.2})",
            candidate.candidate_id, job.job_id
        );

        MatchScoreResult {
            candidate_id: candidate.candidate_id,
            job_id: job.job_id,
            total_score: round_half_up(total_score),
            skill_score: round_half_up(skill_score),
            experience_score: round_half_up(experience_score),
            education_score: round_half_up(education_score),
            details: ScoreDetails {
                skill_breakdown: skills::skill_breakdown(&inventory, job),
                experience_years,
                required_experience_years,
                education_level,
                required_education_level,
                scoring_weights: weights,
            },
            calculated_at: Utc::now(),
        }
    }
}

/// Scores with a [`WeightedMatchScorer`] anchored on the current date.
pub fn calculate_match_score(candidate: &CandidateSnapshot, job: &JobSnapshot) -> MatchScoreResult {
    WeightedMatchScorer::new().score(candidate, job)
}
