use crate::infra::{parse_date, print_json, read_json, screening_config};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use entry_board::config::AppConfig;
use entry_board::error::AppError;
use entry_board::jobs::PostingId;
use entry_board::screening::{PostingDraft, PostingGuard, TermMatch, TermScreener};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// JSON screening policy (`banned_terms`, `max_distance`) overriding the environment
    #[arg(long, global = true)]
    pub(crate) policy: Option<PathBuf>,
    /// Emit JSON instead of a readable summary
    #[arg(long, global = true)]
    pub(crate) json: bool,
    #[command(subcommand)]
    pub(crate) target: ScreenTarget,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ScreenTarget {
    /// Screen a single term
    Term {
        term: String,
    },
    /// Screen free text, given inline or read from a file
    Passage {
        #[arg(required_unless_present = "file")]
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Review a posting draft (JSON) as the posting form would
    Posting {
        #[arg(long)]
        draft: PathBuf,
        /// Identifier assigned to the accepted posting
        #[arg(long, default_value = "draft")]
        id: String,
        /// Review date for deadline checks (defaults to today)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

#[derive(Debug, Serialize)]
struct ScreenReport<'a> {
    input: &'a str,
    allowed: bool,
    matches: Vec<TermMatch>,
}

pub(crate) fn run_screen(args: ScreenArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScreenArgs {
        policy,
        json,
        target,
    } = args;

    let screening = screening_config(policy.as_deref(), &config.screening)?;
    let screener = TermScreener::from_config(&screening);

    match target {
        ScreenTarget::Term { term } => {
            let matches = screener.term_matches(&term);
            render_report(&term, matches, json)
        }
        ScreenTarget::Passage { text, file } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => fs::read_to_string(path)?,
                (None, None) => {
                    return Err(AppError::Usage(
                        "provide passage text or --file".to_string(),
                    ))
                }
            };
            let matches = screener.passage_matches(&text);
            render_report(&text, matches, json)
        }
        ScreenTarget::Posting { draft, id, today } => {
            let draft: PostingDraft = read_json(&draft)?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let guard = PostingGuard::new(screener);
            let posting = guard.review(PostingId::from(id), draft, today)?;
            if json {
                print_json(&posting)
            } else {
                println!("Posting '{}' accepted", posting.title);
                println!("- {} | {} | {}", posting.company, posting.location, posting.salary);
                println!("- Apply by {}", posting.deadline);
                Ok(())
            }
        }
    }
}

fn render_report(input: &str, matches: Vec<TermMatch>, json: bool) -> Result<(), AppError> {
    let report = ScreenReport {
        input,
        allowed: matches.is_empty(),
        matches,
    };

    if json {
        return print_json(&report);
    }

    if report.allowed {
        println!("allowed");
        return Ok(());
    }

    println!("blocked");
    for matched in &report.matches {
        println!(
            "- '{}' is {} edit(s) from banned term '{}'",
            matched.token, matched.distance, matched.banned_term
        );
    }
    Ok(())
}
