//! Draft board columns and CSV row decoding
//!
//! Source files come from different exports, so headers are matched
//! loosely and every recognized header is renamed onto one canonical
//! [`Column`] before rows are deserialized.

use csv::StringRecord;
use log::debug;
use serde::{Deserialize, Deserializer};

/// A recognized draft board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FullName,
    Position,
    Team,
    AdjustedPoints,
    ProjectedPoints,
    Adp,
    PositionalRank,
    AuctionValue,
    OverallRank,
    AdpTrend,
}

impl Column {
    /// Every column, in board order.
    pub const ALL: [Column; 10] = [
        Column::FullName,
        Column::Position,
        Column::Team,
        Column::AdjustedPoints,
        Column::ProjectedPoints,
        Column::Adp,
        Column::PositionalRank,
        Column::AuctionValue,
        Column::OverallRank,
        Column::AdpTrend,
    ];

    /// Header used for display and when saving the board.
    pub fn header(&self) -> &'static str {
        match self {
            Column::FullName => "Full Name",
            Column::Position => "Position",
            Column::Team => "Team",
            Column::AdjustedPoints => "AdjPts",
            Column::ProjectedPoints => "ProjPts",
            Column::Adp => "ADP",
            Column::PositionalRank => "PosRank",
            Column::AuctionValue => "Auc$",
            Column::OverallRank => "Rank",
            Column::AdpTrend => "ADP Trend",
        }
    }

    /// Source headers accepted for this column, besides [`Column::header`].
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::FullName => &["Name", "Player"],
            Column::Position => &["Pos"],
            Column::Team => &["Team Abbrev"],
            Column::AdjustedPoints => &["Adjusted Projected Points"],
            Column::ProjectedPoints => &["Projected Fantasy Points", "Projected Points"],
            Column::Adp => &[],
            Column::PositionalRank => &["Positional Rank"],
            Column::AuctionValue => &["Auction Value"],
            Column::OverallRank => &["Overall Rank"],
            Column::AdpTrend => &[],
        }
    }

    /// Recognize a source header (trimmed, case-insensitive).
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Column::ALL.into_iter().find(|column| {
            column.header().eq_ignore_ascii_case(header)
                || column
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(header))
        })
    }
}

/// Columns found in a source header row, plus that row rewritten so every
/// recognized header carries its canonical name.
///
/// Only the first header mapping to a column is kept; later duplicates and
/// unrecognized headers are renamed to placeholders and ignored.
pub fn canonicalize_headers(headers: &StringRecord) -> (Vec<Column>, StringRecord) {
    let mut found = Vec::new();
    let mut renamed = StringRecord::new();

    for (index, header) in headers.iter().enumerate() {
        match Column::from_header(header) {
            Some(column) if !found.contains(&column) => {
                debug!("Column {:?} mapped to {}", header, column.header());
                found.push(column);
                renamed.push_field(column.header());
            }
            _ => {
                debug!("Ignoring column {:?}", header);
                renamed.push_field(&format!("__ignored_{}", index));
            }
        }
    }

    // Keep a stable board order regardless of source order
    let columns = Column::ALL
        .into_iter()
        .filter(|column| found.contains(column))
        .collect();

    (columns, renamed)
}

/// Parse a numeric cell leniently: `$`, thousands separators and padding
/// are tolerated, anything else is a missing value.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            if !cleaned.is_empty() {
                debug!("Treating non-numeric value {:?} as missing", raw);
            }
            None
        }
    }
}

fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_numeric))
}

/// One CSV row after header canonicalization.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPlayerRow {
    #[serde(rename = "Full Name", default)]
    pub full_name: String,
    #[serde(rename = "Position", default)]
    pub position: String,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "AdjPts", default, deserialize_with = "de_lenient_f64")]
    pub adjusted_points: Option<f64>,
    #[serde(rename = "ProjPts", default, deserialize_with = "de_lenient_f64")]
    pub projected_points: Option<f64>,
    #[serde(rename = "ADP", default, deserialize_with = "de_lenient_f64")]
    pub adp: Option<f64>,
    #[serde(rename = "PosRank", default, deserialize_with = "de_lenient_f64")]
    pub positional_rank: Option<f64>,
    #[serde(rename = "Auc$", default, deserialize_with = "de_lenient_f64")]
    pub auction_value: Option<f64>,
    #[serde(rename = "Rank", default, deserialize_with = "de_lenient_f64")]
    pub overall_rank: Option<f64>,
    #[serde(rename = "ADP Trend", default)]
    pub adp_trend: Option<String>,
}

/// Format a number the way it appears on the board: no trailing `.0`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_accepts_source_and_saved_names() {
        assert_eq!(Column::from_header("Full Name"), Some(Column::FullName));
        assert_eq!(Column::from_header(" team abbrev "), Some(Column::Team));
        assert_eq!(
            Column::from_header("Adjusted Projected Points"),
            Some(Column::AdjustedPoints)
        );
        assert_eq!(Column::from_header("AdjPts"), Some(Column::AdjustedPoints));
        assert_eq!(
            Column::from_header("Projected Fantasy Points"),
            Some(Column::ProjectedPoints)
        );
        assert_eq!(Column::from_header("auc$"), Some(Column::AuctionValue));
        assert_eq!(Column::from_header("Rank"), Some(Column::OverallRank));
        assert_eq!(Column::from_header("Bye Week"), None);
    }

    #[test]
    fn test_canonicalize_headers_keeps_first_duplicate() {
        let headers = StringRecord::from(vec!["Rank", "Name", "Bye", "Full Name", "Position"]);
        let (columns, renamed) = canonicalize_headers(&headers);

        assert_eq!(
            columns,
            vec![Column::FullName, Column::Position, Column::OverallRank]
        );
        assert_eq!(&renamed[0], "Rank");
        assert_eq!(&renamed[1], "Full Name");
        assert!(renamed[2].starts_with("__ignored_"));
        assert!(renamed[3].starts_with("__ignored_"));
        assert_eq!(&renamed[4], "Position");
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("312.4"), Some(312.4));
        assert_eq!(parse_numeric(" 12 "), Some(12.0));
        assert_eq!(parse_numeric("$45"), Some(45.0));
        assert_eq!(parse_numeric("1,204.5"), Some(1204.5));
        assert_eq!(parse_numeric("-3"), Some(-3.0));
        assert_eq!(parse_numeric("N/A"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("NaN"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(312.45), "312.45");
    }
}
