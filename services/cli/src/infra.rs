use chrono::NaiveDate;
use entry_board::config::ScreeningConfig;
use entry_board::error::AppError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Screening policy from `--policy` when given, otherwise from the environment.
pub(crate) fn screening_config(
    policy: Option<&Path>,
    fallback: &ScreeningConfig,
) -> Result<ScreeningConfig, AppError> {
    match policy {
        Some(path) => read_json(path),
        None => Ok(fallback.clone()),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
