//! Russian-locale display formatting for raw backend values.
//!
//! # Design
//! - Treat unparsable input as "unknown", never as a panic.
//! - Unit suffixes are part of the display contract and stay literal.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Placeholder shown when a value is absent.
pub const EM_DASH: &str = "—";

/// Price in whole rubles with non-breaking thousands separators, e.g. "12 500 ₽".
#[must_use]
pub fn format_price(price: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = price.round().max(0.0) as u64;
    format!("{}\u{a0}₽", group_thousands(whole))
}

/// Date as "DD.MM.YYYY", or "Неизвестно" for unparsable input.
#[must_use]
pub fn format_date(iso: &str) -> String {
    parse_timestamp(iso).map_or_else(
        || "Неизвестно".to_string(),
        |dt| dt.format("%d.%m.%Y").to_string(),
    )
}

/// Date and time as "DD.MM.YYYY, HH:MM", or "Неизвестно" for unparsable input.
#[must_use]
pub fn format_date_time(iso: &str) -> String {
    parse_timestamp(iso).map_or_else(
        || "Неизвестно".to_string(),
        |dt| dt.format("%d.%m.%Y, %H:%M").to_string(),
    )
}

/// Short date as "DD.MM", or an empty string for unparsable input.
#[must_use]
pub fn format_short_date(iso: &str) -> String {
    parse_timestamp(iso).map_or_else(String::new, |dt| dt.format("%d.%m").to_string())
}

/// Already-scaled percentage as "50.0%", or an em dash when absent.
///
/// Callers pass 0–100 values straight from the stats endpoints; this is a
/// display helper, not a ratio conversion.
#[must_use]
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:.1}%"),
        _ => EM_DASH.to_string(),
    }
}

/// Seconds as "45 сек." below a minute, "2 мин." otherwise; "-" when absent.
#[must_use]
pub fn format_seconds_to_time(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds else {
        return "-".to_string();
    };
    if seconds.is_nan() || seconds < 0.0 {
        return "-".to_string();
    }
    if seconds < 60.0 {
        format!("{:.0} сек.", seconds.round())
    } else {
        format!("{:.0} мин.", (seconds / 60.0).round())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(digit);
    }
    out
}

fn parse_timestamp(iso: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(iso) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .map(|date| NaiveDateTime::new(date, NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_groups_thousands_with_nbsp() {
        assert_eq!(format_price(0.0), "0\u{a0}₽");
        assert_eq!(format_price(999.0), "999\u{a0}₽");
        assert_eq!(format_price(12_500.0), "12\u{a0}500\u{a0}₽");
        assert_eq!(format_price(1_234_567.4), "1\u{a0}234\u{a0}567\u{a0}₽");
    }

    #[test]
    fn dates_render_in_ru_order() {
        assert_eq!(format_date("2024-05-02T10:30:00Z"), "02.05.2024");
        assert_eq!(format_date_time("2024-05-02T10:30:00+03:00"), "02.05.2024, 10:30");
        assert_eq!(format_short_date("2024-05-02"), "02.05");
    }

    #[test]
    fn invalid_dates_degrade_gracefully() {
        assert_eq!(format_date("not-a-date"), "Неизвестно");
        assert_eq!(format_date_time(""), "Неизвестно");
        assert_eq!(format_short_date("nope"), "");
    }

    #[test]
    fn percent_is_display_only() {
        assert_eq!(format_percent(Some(50.0)), "50.0%");
        assert_eq!(format_percent(Some(33.333)), "33.3%");
        assert_eq!(format_percent(Some(0.0)), "0.0%");
        assert_eq!(format_percent(None), "—");
        assert_eq!(format_percent(Some(f64::NAN)), "—");
    }

    #[test]
    fn seconds_switch_to_minutes_at_sixty() {
        assert_eq!(format_seconds_to_time(Some(45.0)), "45 сек.");
        assert_eq!(format_seconds_to_time(Some(59.4)), "59 сек.");
        assert_eq!(format_seconds_to_time(Some(125.0)), "2 мин.");
        assert_eq!(format_seconds_to_time(Some(60.0)), "1 мин.");
        assert_eq!(format_seconds_to_time(None), "-");
        assert_eq!(format_seconds_to_time(Some(-1.0)), "-");
    }
}
