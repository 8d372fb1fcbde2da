use crate::models::{EducationLevel, EducationRecord, JobSnapshot};

/// Degree classes by substring, highest first.
const DEGREE_KEYWORDS: &[(EducationLevel, &[&str])] = &[
    (EducationLevel::Phd, &["phd", "doctorate"]),
    (EducationLevel::Masters, &["master", "mba"]),
    (EducationLevel::Bachelors, &["bachelor"]),
    (EducationLevel::Associate, &["associate", "diploma"]),
];

/// Requirement probes on the job text. "degree" alone means a bachelor's.
const REQUIREMENT_KEYWORDS: &[(EducationLevel, &[&str])] = &[
    (EducationLevel::Phd, &["phd", "doctorate"]),
    (EducationLevel::Masters, &["master", "mba"]),
    (EducationLevel::Bachelors, &["bachelor", "degree"]),
];

const NO_REQUIREMENT_SCORE: f64 = 100.0;
/// Education is required but the candidate listed none.
const UNKNOWN_EDUCATION_SCORE: f64 = 50.0;
const BELOW_REQUIREMENT_FLOOR: f64 = 30.0;

fn classify(text: &str, table: &[(EducationLevel, &[&str])]) -> Option<EducationLevel> {
    let text = text.to_lowercase();
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(level, _)| *level)
}

/// Rank of a free-text degree: 4 doctorate .. 1 associate, 0 unrecognised.
pub fn degree_rank(degree: &str) -> u8 {
    classify(degree, DEGREE_KEYWORDS).map_or(0, |level| level.rank())
}

/// Highest-ranked degree string, lowercased. The first of equally ranked
/// degrees wins.
pub fn highest_education(records: &[EducationRecord]) -> Option<String> {
    records
        .iter()
        .map(|record| record.degree.to_lowercase())
        .fold(None, |best: Option<(u8, String)>, degree| {
            let rank = degree_rank(&degree);
            match best {
                Some((best_rank, _)) if best_rank >= rank => best,
                _ => Some((rank, degree)),
            }
        })
        .map(|(_, degree)| degree)
}

/// Level the job's requirements text asks for, if any.
pub fn required_education(job: &JobSnapshot) -> Option<EducationLevel> {
    classify(job.requirements.as_deref().unwrap_or_default(), REQUIREMENT_KEYWORDS)
}

pub fn education_score(candidate_degree: Option<&str>, required: Option<EducationLevel>) -> f64 {
    let Some(required) = required else {
        return NO_REQUIREMENT_SCORE;
    };
    let Some(candidate_degree) = candidate_degree else {
        return UNKNOWN_EDUCATION_SCORE;
    };

    let candidate_rank = degree_rank(candidate_degree);
    let required_rank = required.rank();
    if candidate_rank >= required_rank {
        100.0
    } else {
        (f64::from(candidate_rank) / f64::from(required_rank) * 100.0).max(BELOW_REQUIREMENT_FLOOR)
    }
}
