pub mod config;
pub mod drill;
pub mod drills;
pub mod goals;
pub mod log;
pub mod putting;
pub mod round;
pub mod stats;

use chrono::NaiveDate;

/// Parse an optional `--date` argument, defaulting to today.
pub fn parse_date(date: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{raw}' (expected YYYY-MM-DD): {e}").into()),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a comma-separated list of numbers ("40,52.5,61").
pub fn parse_number_list(raw: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|e| format!("invalid number '{s}': {e}").into())
        })
        .collect()
}
