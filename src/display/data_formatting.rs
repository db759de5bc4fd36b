use jiff::Timestamp;

use crate::types::PaginationState;

/// Format a date string for display
///
/// Extracts just the date part (YYYY-MM-DD) from an RFC 3339 datetime
/// string. If the string is too short, returns it unchanged.
///
/// # Examples
///
/// ```
/// use groupdeck::display::format_date_for_display;
///
/// assert_eq!(format_date_for_display("2024-01-15T10:30:00Z"), "2024-01-15");
/// assert_eq!(format_date_for_display("2024-01-15"), "2024-01-15");
/// assert_eq!(format_date_for_display("short"), "short");
/// ```
pub fn format_date_for_display(date_str: &str) -> String {
    if date_str.len() >= 10 {
        date_str[..10].to_string()
    } else {
        date_str.to_string()
    }
}

/// Format a timestamp relative to `now`, bucketed the way the dashboard
/// shows last activity. Falls back to the plain date for timestamps older
/// than a week, and to the raw string when parsing fails.
pub fn format_relative_time(date_str: &str, now: Timestamp) -> String {
    let Ok(timestamp) = date_str.parse::<Timestamp>() else {
        return format_date_for_display(date_str);
    };

    let hours = (now.as_second() - timestamp.as_second()) / 3600;

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if hours < 48 {
        "Yesterday".to_string()
    } else if hours < 168 {
        format!("{}d ago", hours / 24)
    } else {
        format_date_for_display(date_str)
    }
}

/// The "Showing X to Y of Z groups" line under the table.
pub fn format_showing_range(pagination: &PaginationState) -> String {
    let (start, end) = pagination.visible_range();
    format!("Showing {} to {} of {} groups", start, end, pagination.total)
}

/// First two labels (each truncated) plus an overflow count.
pub fn format_labels_summary(labels: &[String]) -> String {
    if labels.is_empty() {
        return "No labels".to_string();
    }

    let mut summary = labels
        .iter()
        .take(2)
        .map(|label| truncate_text(label, 11))
        .collect::<Vec<_>>()
        .join(", ");

    if labels.len() > 2 {
        summary.push_str(&format!(" +{}", labels.len() - 2));
    }

    summary
}

/// Truncate a string to a maximum length, handling multi-byte characters
/// properly. Appends "..." if truncated.
pub fn truncate_text(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> Timestamp {
        "2024-02-16T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(
            format_date_for_display("2024-01-15T10:30:00Z"),
            "2024-01-15"
        );
        assert_eq!(format_date_for_display("2024-01-15"), "2024-01-15");
        assert_eq!(format_date_for_display("short"), "short");
        assert_eq!(format_date_for_display(""), "");
    }

    #[test]
    fn test_relative_time_just_now() {
        assert_eq!(
            format_relative_time("2024-02-16T11:30:00Z", fixed_now()),
            "Just now"
        );
    }

    #[test]
    fn test_relative_time_hours_ago() {
        assert_eq!(
            format_relative_time("2024-02-16T07:00:00Z", fixed_now()),
            "5h ago"
        );
    }

    #[test]
    fn test_relative_time_yesterday() {
        assert_eq!(
            format_relative_time("2024-02-15T10:00:00Z", fixed_now()),
            "Yesterday"
        );
    }

    #[test]
    fn test_relative_time_days_ago() {
        assert_eq!(
            format_relative_time("2024-02-13T12:00:00Z", fixed_now()),
            "3d ago"
        );
    }

    #[test]
    fn test_relative_time_old_falls_back_to_date() {
        assert_eq!(
            format_relative_time("2024-01-15T10:30:00Z", fixed_now()),
            "2024-01-15"
        );
    }

    #[test]
    fn test_relative_time_future_timestamp_is_just_now() {
        assert_eq!(
            format_relative_time("2024-02-17T12:00:00Z", fixed_now()),
            "Just now"
        );
    }

    #[test]
    fn test_relative_time_unparseable_passes_through() {
        assert_eq!(format_relative_time("not a date", fixed_now()), "not a date");
    }

    #[test]
    fn test_showing_range_line() {
        let pagination = PaginationState {
            page: 3,
            page_size: 10,
            total: 47,
        };
        assert_eq!(
            format_showing_range(&pagination),
            "Showing 21 to 30 of 47 groups"
        );
    }

    #[test]
    fn test_labels_summary_empty() {
        assert_eq!(format_labels_summary(&[]), "No labels");
    }

    #[test]
    fn test_labels_summary_two_or_fewer() {
        let labels = vec!["Work".to_string(), "Urgent".to_string()];
        assert_eq!(format_labels_summary(&labels), "Work, Urgent");
    }

    #[test]
    fn test_labels_summary_overflow_count() {
        let labels = vec![
            "Work".to_string(),
            "Urgent".to_string(),
            "Family".to_string(),
            "Review".to_string(),
        ];
        assert_eq!(format_labels_summary(&labels), "Work, Urgent +2");
    }

    #[test]
    fn test_labels_summary_truncates_long_labels() {
        let labels = vec!["High Priority Item".to_string()];
        assert_eq!(format_labels_summary(&labels), "High Pri...");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        assert_eq!(truncate_text("héllo wörld", 8), "héllo...");
        assert_eq!(truncate_text("short", 8), "short");
    }
}
