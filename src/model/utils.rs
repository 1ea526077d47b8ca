use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+))\s*[A-Za-z.]*\s*$").expect("static regex")
});

/// Parses a distance cell. Accepts plain numbers and a trailing unit such as
/// `"15 ft"` or `"120y"`.
#[must_use]
pub fn parse_distance(raw: &str) -> Option<f64> {
    let caps = LEADING_NUMBER.captures(raw)?;
    caps.get(1)?.as_str().parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Parses an integral cell, truncating any fractional part (`"5.0"` is 5).
#[must_use]
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
}

#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "1.0" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "0.0" => Some(false),
        _ => None,
    }
}

/// Writes whole distances without a trailing `.0`.
#[must_use]
pub fn format_distance(distance: Option<f64>) -> String {
    match distance {
        None => String::new(),
        Some(d) if d.fract() == 0.0 => format!("{}", d as i64),
        Some(d) => d.to_string(),
    }
}

/// Makes a value safe to embed in a file name.
#[must_use]
pub fn file_name_part(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect()
}
