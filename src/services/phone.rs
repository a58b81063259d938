use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

const MAX_DIGITS: usize = 11;

static STRICT_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+7 \([0-9]{3}\) [0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("valid regex")
});

static LOOSE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+7[\s(]*[0-9]{3}[\s)]*[0-9]{3}[\s-]*[0-9]{2}[\s-]*[0-9]{2}$")
        .expect("valid regex")
});

/// Which phone shapes the validator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneFormat {
    /// Only `+7 (XXX) XXX-XX-XX`.
    #[default]
    Strict,
    /// `+7` and ten digits, grouped with optional spaces, parentheses or dashes.
    Loose,
}

impl PhoneFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneFormat::Strict => "strict",
            PhoneFormat::Loose => "loose",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "loose" => PhoneFormat::Loose,
            _ => PhoneFormat::Strict,
        }
    }

    pub fn matches(&self, phone: &str) -> bool {
        match self {
            PhoneFormat::Strict => STRICT_PHONE.is_match(phone),
            PhoneFormat::Loose => LOOSE_PHONE.is_match(phone),
        }
    }
}

/// Keystroke filter: keep only the digits, no formatting yet.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Focus-loss formatter producing `+7 (XXX) XXX-XX-XX`, or a prefix of it
/// when fewer than 11 digits are present.
///
/// A leading `8` becomes `7`, and any other leading digit gets a `7` put in
/// front of it. Input without digits yields an empty string.
pub fn normalize(raw: &str) -> String {
    let mut digits = strip_non_digits(raw);
    if digits.is_empty() {
        return String::new();
    }

    if digits.starts_with('8') {
        digits.replace_range(..1, "7");
    }
    if !digits.starts_with('7') {
        digits.insert(0, '7');
    }
    digits.truncate(MAX_DIGITS);

    // ASCII digits only, so byte slicing is safe.
    let d = digits.as_str();
    let len = d.len();
    let mut out = format!("+{}", &d[..1]);
    // Writing into a String cannot fail.
    if len >= 2 {
        let _ = write!(out, " ({}", &d[1..len.min(4)]);
    }
    if len >= 4 {
        let _ = write!(out, ") {}", &d[4..len.min(7)]);
    }
    if len >= 7 {
        let _ = write!(out, "-{}", &d[7..len.min(9)]);
    }
    if len >= 9 {
        let _ = write!(out, "-{}", &d[9..len]);
    }
    out
}
