//! Quote-aware splitting of a single CSV line.

/// Splits one CSV line into its fields.
///
/// A comma delimits fields unless it appears inside a double-quoted span.
/// Inside a quoted span, `""` yields one literal quote. Quote characters that
/// open or close a span are not part of the field value.
///
/// The final field is always emitted, even when empty, so a line of `n`
/// commas yields `n + 1` empty fields. An unterminated quote simply runs to
/// the end of the line.
#[must_use]
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_commas_inside_quotes() {
        assert_eq!(split_csv_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn unescapes_doubled_quotes_inside_quoted_field() {
        assert_eq!(split_csv_line(r#""a""b",c"#), vec!["a\"b", "c"]);
    }

    #[test]
    fn empty_quoted_field_is_empty_string() {
        assert_eq!(split_csv_line(r#"x,"",y"#), vec!["x", "", "y"]);
    }

    #[test]
    fn only_commas_yield_one_more_empty_field() {
        assert_eq!(split_csv_line(",,,"), vec!["", "", "", ""]);
    }

    #[test]
    fn empty_line_yields_single_empty_field() {
        assert_eq!(split_csv_line(""), vec![""]);
    }

    #[test]
    fn unterminated_quote_flushes_remainder() {
        assert_eq!(split_csv_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn preserves_surrounding_whitespace() {
        assert_eq!(split_csv_line(" a , b "), vec![" a ", " b "]);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(
            split_csv_line(r#"1,"Парик, длинный",Блонд"#),
            vec!["1", "Парик, длинный", "Блонд"]
        );
    }
}
