use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::MatchScorer;
use crate::models::{CandidateSnapshot, JobSnapshot, MatchScoreResult};

/// One row of a recruiter's ranked candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// 1-based position in the list.
    pub rank: usize,
    pub candidate_id: Uuid,
    pub score: MatchScoreResult,
}

/// Scores every candidate against `job`, best first.
///
/// Ties on total score fall back to skill score, then candidate id, so the
/// order is stable across runs.
pub fn rank_candidates(
    scorer: &dyn MatchScorer,
    job: &JobSnapshot,
    candidates: &[CandidateSnapshot],
) -> Vec<RankedCandidate> {
    let mut scores: Vec<MatchScoreResult> = candidates
        .iter()
        .map(|candidate| scorer.score(candidate, job))
        .collect();

    scores.sort_by(compare_scores);

    scores
        .into_iter()
        .enumerate()
        .map(|(idx, score)| RankedCandidate {
            rank: idx + 1,
            candidate_id: score.candidate_id,
            score,
        })
        .collect()
}

fn compare_scores(a: &MatchScoreResult, b: &MatchScoreResult) -> Ordering {
    b.total_score
        .total_cmp(&a.total_score)
        .then_with(|| b.skill_score.total_cmp(&a.skill_score))
        .then_with(|| a.candidate_id.cmp(&b.candidate_id))
}

/// Jobs declaring at least one skill the candidate holds, in input order.
pub fn recommend_jobs<'a>(
    candidate: &CandidateSnapshot,
    jobs: &'a [JobSnapshot],
) -> Vec<&'a JobSnapshot> {
    let inventory = candidate.skill_inventory();
    if inventory.is_empty() {
        return vec![];
    }

    jobs.iter()
        .filter(|job| job.skills.iter().any(|skill| inventory.contains(&skill.name)))
        .collect()
}
