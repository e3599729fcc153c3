//! Lot frequency analysis over dated draw records.
//!
//! A pure, synchronous pipeline: parse the raw table, keep only rows dated
//! strictly before the cutoff, normalize every remaining cell into a
//! two-digit token, count, and rank. Only a missing date column aborts the
//! analysis; malformed rows and cells are dropped silently, so imperfect
//! real-world sheets still produce a (possibly empty) result.

use crate::domain::model::{AnalysisResult, DrawRecord, RankedEntry, RawTable, Token};
use crate::utils::error::{ReportError, Result};
use chrono::NaiveDate;
use std::collections::HashMap;

// Formats seen in real draw sheets; tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Checks the table shape and parses each row into a [`DrawRecord`].
///
/// Fails only when `date_column` is absent from the header row. Rows whose
/// date cell is missing or unparseable are dropped; the surviving records
/// keep their remaining cells in original column order.
pub fn validate_and_parse(table: &RawTable, date_column: &str) -> Result<Vec<DrawRecord>> {
    let date_idx = table
        .headers
        .iter()
        .position(|header| header == date_column)
        .ok_or_else(|| {
            ReportError::schema(format!(
                "input must contain a date column named '{}'",
                date_column
            ))
        })?;

    let mut records = Vec::new();
    for row in &table.rows {
        let Some(raw_date) = row.get(date_idx) else {
            continue;
        };
        let Some(date) = parse_date(raw_date) else {
            continue;
        };
        let values = row
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != date_idx)
            .map(|(_, value)| value.clone())
            .collect();
        records.push(DrawRecord { date, values });
    }

    Ok(records)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Keeps only records dated strictly before `cutoff`. Draws on the cutoff
/// date itself are excluded.
pub fn filter_before(records: Vec<DrawRecord>, cutoff: NaiveDate) -> Vec<DrawRecord> {
    records
        .into_iter()
        .filter(|record| record.date < cutoff)
        .collect()
}

/// Normalizes one raw cell value into a two-digit token.
///
/// The value must reduce to an integer in 0..=99: plain integers and
/// integer-valued floats ("7", "07", "7.0") qualify, everything else
/// (empty, non-numeric, negative, fractional, three or more significant
/// digits) is dropped by returning `None`.
pub fn tokenize(raw: &str) -> Option<Token> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    let number = value.parse::<i64>().ok().or_else(|| {
        let float = value.parse::<f64>().ok()?;
        (float.is_finite() && float.fract() == 0.0).then_some(float as i64)
    })?;

    u8::try_from(number).ok().and_then(Token::new)
}

/// Counts every token across the given records and ranks them.
///
/// Ranking is descending by count; among equal counts the token that was
/// seen first in the scan comes first, so the output is deterministic for a
/// given input. Zero valid tokens yields an empty result, not an error.
pub fn compute(records: &[DrawRecord]) -> AnalysisResult {
    let mut counts: HashMap<Token, usize> = HashMap::new();
    let mut first_seen: Vec<Token> = Vec::new();

    for record in records {
        for raw in &record.values {
            if let Some(token) = tokenize(raw) {
                let slot = counts.entry(token).or_insert(0);
                if *slot == 0 {
                    first_seen.push(token);
                }
                *slot += 1;
            }
        }
    }

    let total_tokens: usize = counts.values().sum();
    if total_tokens == 0 {
        return AnalysisResult::default();
    }

    // first_seen carries first-occurrence order; a stable sort by count
    // keeps that order among ties.
    let mut ranked: Vec<RankedEntry> = first_seen
        .into_iter()
        .map(|token| {
            let count = counts[&token];
            RankedEntry {
                token,
                count,
                probability_percent: round_percent(count, total_tokens),
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let top3 = ranked.iter().take(3).map(|entry| entry.token).collect();

    AnalysisResult {
        ranked,
        top3,
        total_tokens,
    }
}

// count / total as a percentage, rounded to two decimal places.
fn round_percent(count: usize, total: usize) -> f64 {
    let percent = count as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

/// The composed parse → filter → count entry point.
pub fn analyze(table: &RawTable, date_column: &str, cutoff: NaiveDate) -> Result<AnalysisResult> {
    let records = validate_and_parse(table, date_column)?;
    let filtered = filter_before(records, cutoff);
    Ok(compute(&filtered))
}
