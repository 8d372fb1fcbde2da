use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::SkillRecord;

/// One employment period. A missing start contributes nothing; a missing
/// end means the position is current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperiencePeriod {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl ExperiencePeriod {
    pub fn new(start_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date: Some(start_date),
            end_date,
        }
    }

    /// Whole years between start and end (or `today` for a current position).
    pub fn whole_years(&self, today: NaiveDate) -> u32 {
        match self.start_date {
            Some(start) => whole_years_between(start, self.end_date.unwrap_or(today)),
            None => 0,
        }
    }
}

/// Calendar-aware year difference, truncated. An inverted range yields 0, not
/// a negative count subtracted from the candidate's other periods.
fn whole_years_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
}

impl EducationRecord {
    pub fn new(degree: &str) -> Self {
        Self {
            degree: degree.to_string(),
        }
    }
}

/// Everything the scorer needs to know about a candidate, assembled by the
/// service layer from stored résumés, experience and education rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    #[serde(default)]
    pub candidate_id: Uuid,
    /// Skill records from every résumé the candidate uploaded.
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub experiences: Vec<ExperiencePeriod>,
    #[serde(default)]
    pub educations: Vec<EducationRecord>,
}

impl CandidateSnapshot {
    pub fn new(candidate_id: Uuid) -> Self {
        Self {
            candidate_id,
            ..Self::default()
        }
    }

    /// Appends the skill records extracted from one résumé.
    pub fn add_resume(&mut self, skills: impl IntoIterator<Item = SkillRecord>) {
        self.skills.extend(skills);
    }

    pub fn skill_inventory(&self) -> SkillInventory {
        SkillInventory::from_records(&self.skills)
    }
}

/// Case-insensitive view over a candidate's skill records, keeping the
/// largest years-of-experience figure seen per skill name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillInventory {
    skills: BTreeMap<String, Option<u32>>,
}

impl SkillInventory {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SkillRecord>) -> Self {
        let mut skills: BTreeMap<String, Option<u32>> = BTreeMap::new();
        for record in records {
            let years = skills.entry(record.name.to_lowercase()).or_default();
            // None orders below Some, so max keeps any recorded figure.
            *years = (*years).max(record.years_experience);
        }
        Self { skills }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(&name.to_lowercase())
    }

    /// Largest recorded years for the skill, `None` when the skill is absent
    /// or no record carried a figure.
    pub fn years(&self, name: &str) -> Option<u32> {
        self.skills.get(&name.to_lowercase()).copied().flatten()
    }
}
