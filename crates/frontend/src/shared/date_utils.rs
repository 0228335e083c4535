//! Date, time and money formatting in Vietnamese conventions.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// `15/03/2024 14:02`, in the browser's local time
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

/// `15/03/2024`
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%d/%m/%Y").to_string()
}

/// Optional timestamp, "—" when absent
pub fn format_opt_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Event time span; a same-day span shows the date once
pub fn format_span(start: Option<&DateTime<Utc>>, end: Option<&DateTime<Utc>>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => {
            let (ls, le) = (s.with_timezone(&Local), e.with_timezone(&Local));
            if ls.date_naive() == le.date_naive() {
                format!("{} {} – {}", ls.format("%d/%m/%Y"), ls.format("%H:%M"), le.format("%H:%M"))
            } else {
                format!("{} – {}", format_datetime(s), format_datetime(e))
            }
        }
        (Some(s), None) => format_datetime(s),
        (None, Some(e)) => format!("đến {}", format_datetime(e)),
        (None, None) => "—".to_string(),
    }
}

/// Value for `<input type="datetime-local">`
pub fn to_input_value(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|v| v.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Parse a `datetime-local` input value; blank or malformed means unset
pub fn from_input_value(raw: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M").ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// `1.500.000 ₫`
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{} ₫", grouped)
}

/// `200.000 ₫ – 500.000 ₫`, a single price when both bounds match
pub fn format_price_band(min: f64, max: f64) -> String {
    if (max - min).abs() < f64::EPSILON {
        format_vnd(min)
    } else {
        format!("{} – {}", format_vnd(min), format_vnd(max))
    }
}

/// Star rating as "★★★", a dash when unrated
pub fn format_stars(rating: Option<u8>) -> String {
    match rating {
        Some(n) if n > 0 => "★".repeat(n as usize),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(950.0), "950 ₫");
        assert_eq!(format_vnd(1_500_000.0), "1.500.000 ₫");
        assert_eq!(format_vnd(12_345.6), "12.346 ₫");
    }

    #[test]
    fn test_format_price_band() {
        assert_eq!(format_price_band(200_000.0, 200_000.0), "200.000 ₫");
        assert_eq!(format_price_band(200_000.0, 500_000.0), "200.000 ₫ – 500.000 ₫");
    }

    #[test]
    fn test_input_value_round_trip_keeps_minutes() {
        let parsed = from_input_value("2025-02-01T08:30").unwrap();
        assert_eq!(to_input_value(Some(&parsed)), "2025-02-01T08:30");
    }

    #[test]
    fn test_bad_input_is_unset() {
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("01/02/2025"), None);
        assert_eq!(to_input_value(None), "");
    }

    #[test]
    fn test_missing_span() {
        assert_eq!(format_span(None, None), "—");
        assert_eq!(format_opt_datetime(None), "—");
    }

    #[test]
    fn test_format_stars() {
        assert_eq!(format_stars(Some(3)), "★★★");
        assert_eq!(format_stars(None), "—");
        assert_eq!(format_stars(Some(0)), "—");
    }
}
