use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How many ranked entries the report table shows.
pub const DISPLAY_LIMIT: usize = 20;

/// An uploaded draw sheet after CSV decoding, before any validation.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One dated row of historical results. `values` keeps the original column
/// order with the date cell removed.
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub date: NaiveDate,
    pub values: Vec<String>,
}

/// A two-digit lot in 00..=99. Displays and serializes zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(u8);

impl Token {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 99).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the ranked output.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub token: Token,
    pub count: usize,
    pub probability_percent: f64,
}

/// Result of one frequency analysis. Built fresh per (table, cutoff) query.
///
/// `ranked` is the full list, descending by count; ties keep the order in
/// which the token first appeared during the counting scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisResult {
    pub ranked: Vec<RankedEntry>,
    pub top3: Vec<Token>,
    pub total_tokens: usize,
}

impl AnalysisResult {
    /// The first `DISPLAY_LIMIT` entries, for the report table.
    pub fn display_ranking(&self) -> &[RankedEntry] {
        &self.ranked[..self.ranked.len().min(DISPLAY_LIMIT)]
    }

    pub fn is_empty(&self) -> bool {
        self.total_tokens == 0
    }
}

/// Rendered report artifacts handed from transform to load.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub analysis: AnalysisResult,
    pub records_analyzed: usize,
    pub csv_output: String,
    pub summary_json: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactGroup {
    Telegram,
    Zalo,
    Facebook,
    None,
}

impl FromStr for ContactGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "telegram" => Ok(Self::Telegram),
            "zalo" => Ok(Self::Zalo),
            "facebook" => Ok(Self::Facebook),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown group '{}', expected telegram, zalo, facebook or none",
                other
            )),
        }
    }
}

impl fmt::Display for ContactGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Telegram => "telegram",
            Self::Zalo => "zalo",
            Self::Facebook => "facebook",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// One registration row of the append-only contact log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub group: ContactGroup,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(
        name: String,
        phone: Option<String>,
        email: Option<String>,
        group: ContactGroup,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            group,
            submitted_at: Utc::now(),
        }
    }
}

/// One row of the append-only chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: String,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(author: String, message: String) -> Self {
        Self {
            author,
            message,
            posted_at: Utc::now(),
        }
    }
}
