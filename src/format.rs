//! Display formatting for raw TMDB values. Everything here is fixed to the
//! en / en-US locale.

use chrono::{DateTime, NaiveDate};
use pulldown_cmark::{html, Options, Parser};

const COMPACT_TIERS: [(f64, &str); 5] = [
    (1.0, ""),
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Compact notation: `1234567 -> "1.2M"`, `12345 -> "12K"`, `999 -> "999"`.
pub fn compact_number(value: u64) -> String {
    let value = value as f64;
    let mut tier = COMPACT_TIERS
        .iter()
        .rposition(|(divisor, _)| value >= *divisor)
        .unwrap_or(0);
    loop {
        let (divisor, suffix) = COMPACT_TIERS[tier];
        let scaled = round_compact(value / divisor);
        // 999_999 rounds to 1000K, which reads as 1M.
        if scaled >= 1000.0 && tier + 1 < COMPACT_TIERS.len() {
            tier += 1;
            continue;
        }
        return if scaled.fract() == 0.0 {
            format!("{scaled:.0}{suffix}")
        } else {
            format!("{scaled:.1}{suffix}")
        };
    }
}

// One decimal below 10, whole numbers from 10 up.
fn round_compact(scaled: f64) -> f64 {
    if scaled < 10.0 {
        (scaled * 10.0).round() / 10.0
    } else {
        scaled.round()
    }
}

/// US dollars with cents: `5000000 -> "$5,000,000.00"`.
pub fn currency_usd(value: u64) -> String {
    format!("${}.00", group_thousands(value))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// English display name for an ISO 639-1 code; unknown codes are echoed back.
pub fn language_name(code: &str) -> String {
    let name = match code {
        "en" => "English",
        "fr" => "French",
        "es" => "Spanish",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese",
        "cn" => "Cantonese",
        "ar" => "Arabic",
        "hi" => "Hindi",
        "bn" => "Bangla",
        "ta" => "Tamil",
        "te" => "Telugu",
        "ml" => "Malayalam",
        "sv" => "Swedish",
        "da" => "Danish",
        "no" => "Norwegian",
        "nb" => "Norwegian Bokmål",
        "fi" => "Finnish",
        "is" => "Icelandic",
        "nl" => "Dutch",
        "pl" => "Polish",
        "tr" => "Turkish",
        "cs" => "Czech",
        "sk" => "Slovak",
        "el" => "Greek",
        "he" => "Hebrew",
        "id" => "Indonesian",
        "ms" => "Malay",
        "tl" => "Tagalog",
        "th" => "Thai",
        "vi" => "Vietnamese",
        "ro" => "Romanian",
        "hu" => "Hungarian",
        "uk" => "Ukrainian",
        "fa" => "Persian",
        "sr" => "Serbian",
        "hr" => "Croatian",
        "bg" => "Bulgarian",
        "ca" => "Catalan",
        "eu" => "Basque",
        "gl" => "Galician",
        "ga" => "Irish",
        "la" => "Latin",
        "xx" => "No Language",
        _ => return code.to_string(),
    };
    name.to_string()
}

/// Renders review markdown as HTML. The output is not sanitized.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// `139 -> "2h 19m"`.
pub fn runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Vote average with two significant digits, as shown next to the star icon.
///
/// Rounds the exact decimal value of the float half away from zero, so
/// `7.25 -> "7.3"` while `9.95` (stored as 9.9499...) stays `"9.9"`.
pub fn vote_average(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Wide enough that the digits below the cut cannot carry into it.
    let scientific = format!("{:.40e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value:.1}");
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return format!("{value:.1}");
    };
    let digits: Vec<u32> = mantissa.chars().filter_map(|c| c.to_digit(10)).collect();
    let mut significant = digits[0] * 10 + digits[1];
    if digits[2] >= 5 {
        significant += 1;
    }
    if significant == 100 {
        significant = 10;
        exponent += 1;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let rendered = match exponent {
        e if e >= 1 => (u64::from(significant) * 10u64.pow((e - 1) as u32)).to_string(),
        0 => format!("{}.{}", significant / 10, significant % 10),
        e => format!("0.{}{significant}", "0".repeat((-e - 1) as usize)),
    };
    format!("{sign}{rendered}")
}

/// Medium US date (`"Jan 5, 2024"`) from a `YYYY-MM-DD` date or an RFC 3339
/// timestamp.
pub fn medium_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))?;
    Some(date.format("%b %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_numbers() {
        assert_eq!(compact_number(0), "0");
        assert_eq!(compact_number(999), "999");
        assert_eq!(compact_number(1000), "1K");
        assert_eq!(compact_number(1500), "1.5K");
        assert_eq!(compact_number(12_345), "12K");
        assert_eq!(compact_number(123_456), "123K");
        assert_eq!(compact_number(999_999), "1M");
        assert_eq!(compact_number(1_234_567), "1.2M");
        assert_eq!(compact_number(2_500_000_000), "2.5B");
    }

    #[test]
    fn currency() {
        assert_eq!(currency_usd(5_000_000), "$5,000,000.00");
        assert_eq!(currency_usd(999), "$999.00");
        assert_eq!(currency_usd(63_000_000), "$63,000,000.00");
        assert_eq!(currency_usd(1_000), "$1,000.00");
    }

    #[test]
    fn formatters_are_deterministic() {
        assert_eq!(compact_number(1_234_567), compact_number(1_234_567));
        assert_eq!(currency_usd(5_000_000), currency_usd(5_000_000));
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("en"), language_name("en"));
    }

    #[test]
    fn unknown_language_code_is_echoed() {
        assert_eq!(language_name("qq"), "qq");
    }

    #[test]
    fn runtime_and_votes() {
        assert_eq!(runtime(139), "2h 19m");
        assert_eq!(runtime(45), "0h 45m");
        assert_eq!(vote_average(7.345), "7.3");
        assert_eq!(vote_average(8.0), "8.0");
        assert_eq!(vote_average(10.0), "10");
        assert_eq!(vote_average(0.0), "0.0");
    }

    #[test]
    fn vote_average_rounds_ties_up() {
        assert_eq!(vote_average(7.25), "7.3");
        assert_eq!(vote_average(8.25), "8.3");
        assert_eq!(vote_average(9.95), "9.9");
        assert_eq!(vote_average(9.96), "10");
        assert_eq!(vote_average(0.5), "0.50");
        assert_eq!(vote_average(0.125), "0.13");
    }

    #[test]
    fn markdown_renders_html() {
        let html = markdown_to_html("**Great** film.\n\n_Loved it_");
        assert_eq!(
            html,
            "<p><strong>Great</strong> film.</p>\n<p><em>Loved it</em></p>\n"
        );
    }

    #[test]
    fn medium_dates() {
        assert_eq!(medium_date("2024-01-05").as_deref(), Some("Jan 5, 2024"));
        assert_eq!(
            medium_date("2017-02-13T23:16:19.538Z").as_deref(),
            Some("Feb 13, 2017")
        );
        assert_eq!(medium_date(""), None);
        assert_eq!(medium_date("soon"), None);
    }
}
