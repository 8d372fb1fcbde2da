pub mod candidate;
pub mod job;
pub mod resume;
pub mod score;

pub use candidate::{CandidateSnapshot, EducationRecord, ExperiencePeriod, SkillInventory};
pub use job::JobSkillRequirement;
pub use job::JobSnapshot;
pub use resume::{EducationLevel, ExtractedResumeData, ParsedResume, Proficiency, SkillRecord};
pub use score::{round_half_up, MatchScoreResult, ScoreDetails, SkillBreakdown, SkillMatch};
