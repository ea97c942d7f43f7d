use chrono::{DateTime, NaiveDate, Utc};

/// `2024-03-05T10:00:00Z` (or a bare date) → `05/03/2024`.
///
/// Unparseable input comes back unchanged.
pub fn convert_iso_date_to_pt_br(iso: &str) -> String {
    let trimmed = iso.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.format("%d/%m/%Y").to_string();
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

pub fn format_relative_time(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        let now = Utc::now();
        let duration = now.signed_duration_since(parsed);

        if duration.num_days() > 365 {
            format!("{}a atrás", duration.num_days() / 365)
        } else if duration.num_days() > 30 {
            format!("{}m atrás", duration.num_days() / 30)
        } else if duration.num_days() > 0 {
            format!("{}d atrás", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{}h atrás", duration.num_hours())
        } else {
            "agora".to_string()
        }
    } else {
        "-".to_string()
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}
