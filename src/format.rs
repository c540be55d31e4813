//! Human-readable rendering of candidate fields, shared by the TUI and CLI.

use chrono::{DateTime, NaiveDate};

use crate::model::User;

const DISPLAY_DATE: &str = "%d/%m/%Y";

/// Format an ISO date (`YYYY-MM-DD` or RFC 3339) as `DD/MM/YYYY`.
/// Values that don't parse are returned unchanged.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format(DISPLAY_DATE).to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return ts.date_naive().format(DISPLAY_DATE).to_string();
    }
    raw.to_string()
}

pub fn skills_label(skills: &[String]) -> String {
    skills.join(", ")
}

/// Labelled fields of a user record, in display order.
pub fn record_fields(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Full Name", user.full_name.clone()),
        ("Date of Birth", format_date(&user.date_of_birth)),
        ("Location", user.preferred_location.clone()),
        ("Programming Skills", skills_label(&user.programming_skills)),
        ("Resume Summary", user.resume_summary.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_iso_dates() {
        assert_eq!(format_date("1990-01-01"), "01/01/1990");
        assert_eq!(format_date("1995-05-25"), "25/05/1995");
    }

    #[test]
    fn formats_timestamps_by_their_date() {
        assert_eq!(format_date("1995-05-05T00:00:00.000Z"), "05/05/1995");
    }

    #[test]
    fn unparseable_dates_are_shown_raw() {
        assert_eq!(format_date("sometime in May"), "sometime in May");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn record_fields_use_formatted_date_and_joined_skills() {
        let user = User {
            id: 7,
            full_name: "Jane Smith".into(),
            date_of_birth: "1995-05-05".into(),
            preferred_location: "Melbourne".into(),
            programming_skills: vec!["Angular".into(), "Java".into()],
            resume_summary: "Senior engineer".into(),
        };
        let fields = record_fields(&user);
        assert_eq!(fields[1], ("Date of Birth", "05/05/1995".to_string()));
        assert_eq!(fields[3], ("Programming Skills", "Angular, Java".to_string()));
    }
}
