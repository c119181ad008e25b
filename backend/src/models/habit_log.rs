use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLog {
    pub habit_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHabitLog {
    pub habit_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub completed: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LogHabitRequest {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
    pub notes: Option<String>,
}

/// Accept only the zero-padded `YYYY-MM-DD` form; `2025-1-15` and
/// `+2025-01-15` are rejected.
fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`, expected YYYY-MM-DD")))
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date_accepts_padded_iso() {
        assert_eq!(
            parse_calendar_date("2025-01-15"),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
    }

    #[test]
    fn test_parse_calendar_date_rejects_loose_forms() {
        for raw in ["2025-1-15", "+2025-01-15", "2025-01-5", "2025/01/15", "2025-02-30", ""] {
            assert!(parse_calendar_date(raw).is_none(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_log_request_rejects_unpadded_date() {
        let parsed: Result<LogHabitRequest, _> =
            serde_json::from_str(r#"{"date":"2025-1-15","completed":true}"#);
        assert!(parsed.is_err());

        let parsed: LogHabitRequest =
            serde_json::from_str(r#"{"date":"2025-01-15"}"#).unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert!(!parsed.completed);
    }
}
