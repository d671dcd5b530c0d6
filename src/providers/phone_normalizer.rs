//! Canonical form of a phone number for equality checks.
//!
//! Rule applied, in order:
//! 1. drop whitespace, hyphens and parentheses;
//! 2. drop a leading `+91`, or a bare leading `91` when exactly ten
//!    characters follow it;
//! 3. drop one leading `0`.
//!
//! Steps 2 and 3 repeat until nothing changes, so normalizing twice is the
//! same as normalizing once. A ten-digit number that happens to begin with
//! `91` is left alone.

const COUNTRY_CODE: &str = "91";
const NATIONAL_NUMBER_LEN: usize = 10;

/// Normalize a phone string. `None` and empty input yield an empty string.
pub fn normalize_phone<'a>(phone: impl Into<Option<&'a str>>) -> String {
    let raw: Option<&str> = phone.into();
    let Some(raw) = raw else {
        return String::new();
    };

    let mut value: String = raw
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();

    loop {
        let next = strip_prefixes(&value);
        if next.len() == value.len() {
            return value;
        }
        value = next.to_string();
    }
}

fn strip_prefixes(value: &str) -> &str {
    let national = if let Some(rest) = value.strip_prefix("+91") {
        rest
    } else if value.starts_with(COUNTRY_CODE)
        && value.chars().count() == COUNTRY_CODE.len() + NATIONAL_NUMBER_LEN
    {
        &value[COUNTRY_CODE.len()..]
    } else {
        value
    };

    national.strip_prefix('0').unwrap_or(national)
}
