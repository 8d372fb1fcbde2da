use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{EducationLevel, ExtractedResumeData};
use crate::text::KeywordMatcher;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid regex")
});

/// North-American number: optional `+1`/`1`, optional parens round the area
/// code, `-`, `.` or space separators, 3-3-4 digits. Group 1 is the number.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:^|[^\w+(])((?:\+?1[-. ]?)?(?:\([0-9]{3}\)|[0-9]{3})[-. ]?[0-9]{3}[-. ]?[0-9]{4})\b",
    )
    .expect("phone pattern is valid regex")
});

/// Total-experience phrases, tried in order. Group 1 is the year count.
static TOTAL_EXPERIENCE_RES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        r"(?i)(\d+)\s+years?\s+(?:of\s+)?(?:total\s+)?experience",
        r"(?i)(\d+)\+\s+years?\s+experience",
        r"(?i)over\s+(\d+)\s+years?\s+experience",
    ]
    .map(|pattern| Regex::new(pattern).expect("experience pattern is valid regex"))
});

/// How an education keyword has to sit in the text.
#[derive(Clone, Copy)]
enum Anchor {
    /// Abbreviations such as `ms` or `ba` must stand alone.
    WholeWord,
    /// Full words may carry a suffix: `master` matches `masters`.
    WordPrefix,
}

const EDUCATION_KEYWORDS: &[(EducationLevel, &[(&str, Anchor)])] = &[
    (
        EducationLevel::Phd,
        &[
            ("phd", Anchor::WholeWord),
            ("ph.d", Anchor::WholeWord),
            ("doctorate", Anchor::WordPrefix),
        ],
    ),
    (
        EducationLevel::Masters,
        &[
            ("master", Anchor::WordPrefix),
            ("mba", Anchor::WholeWord),
            ("ms", Anchor::WholeWord),
            ("ma", Anchor::WholeWord),
        ],
    ),
    (
        EducationLevel::Bachelors,
        &[
            ("bachelor", Anchor::WordPrefix),
            ("bs", Anchor::WholeWord),
            ("ba", Anchor::WholeWord),
            ("bsc", Anchor::WholeWord),
        ],
    ),
    (
        EducationLevel::Associate,
        &[
            ("associate", Anchor::WordPrefix),
            ("diploma", Anchor::WordPrefix),
        ],
    ),
];

static EDUCATION_MATCHERS: Lazy<Vec<(EducationLevel, Vec<KeywordMatcher>)>> = Lazy::new(|| {
    EDUCATION_KEYWORDS
        .iter()
        .map(|(level, keywords)| {
            let matchers = keywords
                .iter()
                .map(|(keyword, anchor)| {
                    match anchor {
                        Anchor::WholeWord => KeywordMatcher::whole_word(keyword),
                        Anchor::WordPrefix => KeywordMatcher::word_prefix(keyword),
                    }
                    .expect("education keywords are valid regex")
                })
                .collect();
            (*level, matchers)
        })
        .collect()
});

/// Contact details, total experience and education level found in the text.
/// Anything not found is left out.
pub fn extract_resume_data(text: &str) -> ExtractedResumeData {
    let data = ExtractedResumeData {
        email: extract_email(text),
        phone: extract_phone(text),
        total_experience_years: extract_total_experience(text),
        education_level: extract_education_level(text),
    };
    debug!(
        "Extracted résumé data: email={}, phone={}, experience={:?}, education={:?}",
        data.email.is_some(),
        data.phone.is_some(),
        data.total_experience_years,
        data.education_level
    );
    data
}

fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_total_experience(text: &str) -> Option<u32> {
    TOTAL_EXPERIENCE_RES.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|years| years.as_str().parse::<u32>().ok())
    })
}

fn extract_education_level(text: &str) -> Option<EducationLevel> {
    EDUCATION_MATCHERS
        .iter()
        .find(|(_, matchers)| matchers.iter().any(|matcher| matcher.is_match(text)))
        .map(|(level, _)| *level)
}
