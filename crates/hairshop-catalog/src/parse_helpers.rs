//! Cell-level coercion used by [`crate::parse`].
//!
//! Nothing here fails: malformed cells degrade to `0.0` or an empty string so
//! one bad row never blocks the rest of the catalog.

/// Returns the raw cell at `column`, or `""` when the column is unknown or
/// the row is too short.
pub(crate) fn cell(fields: &[String], column: Option<usize>) -> &str {
    column
        .and_then(|idx| fields.get(idx))
        .map_or("", String::as_str)
}

/// Trims a text cell and strips one pair of surrounding quotes.
pub(crate) fn clean_text(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Leniently parses a numeric cell.
///
/// Reads the longest leading number, so `"20 см"` is `20.0` and `"1e3"` is
/// `1000.0`. Whitespace inside the cell is ignored (spreadsheets group
/// thousands as `"1 500"`).
///
/// Separators follow the Russian sheet convention: without a dot, the first
/// comma is the decimal separator (`"1,500"` is `1.5`); with a dot present,
/// commas are thousands grouping and are dropped (`"1,500.00"` is `1500.0`).
///
/// Blank, unparseable, negative or non-finite input yields `0.0`.
pub(crate) fn parse_number(raw: &str) -> f64 {
    let compact: String = clean_text(raw)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let normalized = if compact.contains('.') {
        compact.replace(',', "")
    } else {
        compact.replacen(',', ".", 1)
    };

    let value = numeric_prefix(&normalized)
        .parse::<f64>()
        .unwrap_or(0.0);

    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses an identifier cell. Only positive whole numbers qualify.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub(crate) fn parse_id(raw: &str) -> Option<u64> {
    let value = parse_number(raw);
    if value >= 1.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}
