use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::info;

use matcher::{
    parse_resume, rank_candidates, CandidateSnapshot, JobSnapshot, MatchScorer,
    WeightedMatchScorer,
};

use crate::config::Config;
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "matcher",
    about = "Extract résumé data and score candidates against job postings",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Default)]
pub struct GlobalOptions {
    /// Date used as "today" for ongoing experience periods (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub reference_date: Option<NaiveDate>,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract skills, contact details, experience and education from a plain-text résumé
    Extract {
        /// Path to the résumé text
        path: PathBuf,
    },
    /// Score one candidate against one job: {"candidate": ..., "job": ...}
    Score {
        /// Path to the JSON request
        path: PathBuf,
    },
    /// Rank candidates for one job: {"job": ..., "candidates": [...]}
    Rank {
        /// Path to the JSON request
        path: PathBuf,
    },
}

/// Effective settings after CLI flags override the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    pub reference_date: Option<NaiveDate>,
    pub pretty: bool,
}

impl Settings {
    pub fn resolve(config: &Config, options: &GlobalOptions) -> Self {
        Self {
            reference_date: options.reference_date.or(config.reference_date),
            pretty: options.pretty || config.pretty,
        }
    }

    fn scorer(&self) -> WeightedMatchScorer {
        match self.reference_date {
            Some(date) => WeightedMatchScorer::with_reference_date(date),
            None => WeightedMatchScorer::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateSnapshot,
    pub job: JobSnapshot,
}

impl ScoreRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_candidate(&self.candidate)?;
        validate_job(&self.job)
    }
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub job: JobSnapshot,
    #[serde(default)]
    pub candidates: Vec<CandidateSnapshot>,
}

impl RankRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_job(&self.job)?;
        self.candidates.iter().try_for_each(validate_candidate)
    }
}

fn validate_job(job: &JobSnapshot) -> Result<(), AppError> {
    for skill in &job.skills {
        if skill.name.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "job {} declares a skill with an empty name",
                job.job_id
            )));
        }
        if let Some(weight) = skill.weight {
            if !(0.0..=1.0).contains(&weight) {
                return Err(AppError::Validation(format!(
                    "job {} skill '{}' has weight {weight}, expected a value in [0, 1]",
                    job.job_id, skill.name
                )));
            }
        }
    }
    Ok(())
}

fn validate_candidate(candidate: &CandidateSnapshot) -> Result<(), AppError> {
    match candidate.skills.iter().find(|skill| skill.name.trim().is_empty()) {
        Some(_) => Err(AppError::Validation(format!(
            "candidate {} has a skill with an empty name",
            candidate.candidate_id
        ))),
        None => Ok(()),
    }
}

/// Runs one command and returns the JSON to print.
pub fn execute(command: &Command, settings: Settings) -> Result<String, AppError> {
    match command {
        Command::Extract { path } => {
            let text = read_text(path)?;
            let parsed = parse_resume(&text);
            info!(
                "Extracted {} skills from {}",
                parsed.skills.len(),
                path.display()
            );
            to_json(&parsed, settings.pretty)
        }
        Command::Score { path } => {
            let request: ScoreRequest = read_json(path)?;
            request.validate()?;
            let result = settings.scorer().score(&request.candidate, &request.job);
            info!(
                "Candidate {} scored {:.2} for job {}",
                result.candidate_id, result.total_score, result.job_id
            );
            to_json(&result, settings.pretty)
        }
        Command::Rank { path } => {
            let request: RankRequest = read_json(path)?;
            request.validate()?;
            let ranked = rank_candidates(&settings.scorer(), &request.job, &request.candidates);
            info!(
                "Ranked {} candidates for job {}",
                ranked.len(),
                request.job.job_id
            );
            to_json(&ranked, settings.pretty)
        }
    }
}

pub fn run(config: &Config) -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::resolve(config, &cli.options);

    let output = execute(&cli.command, settings)?;
    println!("{output}");
    Ok(())
}

fn read_text(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| AppError::Internal(e.into()))
}
