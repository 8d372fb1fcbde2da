//! Candidate/job matching core for the job board.
//!
//! Two pieces live here:
//! - [`extraction`] mines free-form résumé text for skills, years of
//!   experience, contact details and the highest education level.
//! - [`matching`] scores a candidate snapshot against a job snapshot and
//!   ranks candidates for a job.
//!
//! Everything in this crate is a pure function of its inputs. Persistence,
//! HTTP and document-to-text conversion belong to the callers.

pub mod extraction;
pub mod matching;
pub mod models;
pub mod text;

pub use extraction::{extract_resume_data, extract_skills, parse_resume, SKILL_VOCABULARY};
pub use matching::{
    calculate_match_score, rank_candidates, recommend_jobs, MatchScorer, RankedCandidate,
    ScoringWeights, WeightedMatchScorer, EDUCATION_WEIGHT, EXPERIENCE_WEIGHT, SKILL_WEIGHT,
};
pub use models::{
    CandidateSnapshot, EducationLevel, EducationRecord, ExperiencePeriod, ExtractedResumeData,
    JobSkillRequirement, JobSnapshot, MatchScoreResult, ParsedResume, Proficiency, ScoreDetails,
    SkillBreakdown, SkillInventory, SkillMatch, SkillRecord,
};
