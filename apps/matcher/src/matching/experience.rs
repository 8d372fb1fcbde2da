use chrono::NaiveDate;

use crate::models::{ExperiencePeriod, JobSnapshot};

/// Required years inferred from seniority words in the job text, first hit wins.
const SENIORITY_KEYWORDS: &[(&[&str], u32)] = &[
    (&["senior", "lead"], 5),
    (&["mid-level", "intermediate"], 3),
    (&["junior", "entry"], 1),
];
const DEFAULT_REQUIRED_YEARS: u32 = 2;
/// Floor for candidates below the requirement, including those with none.
const ENTRY_LEVEL_SCORE: f64 = 20.0;

/// Sum of whole years per period.
///
/// Overlapping periods are summed as they are; two concurrent jobs count twice.
pub fn total_experience_years(periods: &[ExperiencePeriod], today: NaiveDate) -> u32 {
    periods.iter().map(|period| period.whole_years(today)).sum()
}

/// Years of experience the job appears to ask for.
pub fn required_experience_years(job: &JobSnapshot) -> u32 {
    let text = job.combined_text();
    SENIORITY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map_or(DEFAULT_REQUIRED_YEARS, |(_, years)| *years)
}

pub fn experience_score(total_years: u32, required_years: u32) -> f64 {
    if total_years >= required_years {
        100.0
    } else if total_years == 0 {
        ENTRY_LEVEL_SCORE
    } else {
        (f64::from(total_years) / f64::from(required_years) * 100.0).max(ENTRY_LEVEL_SCORE)
    }
}
