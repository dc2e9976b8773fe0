//! Field splitting for command lines.

/// Split `line` into fields on `separator`.
///
/// Runs of separators count as one, so no empty field is produced between
/// them, and a trailing separator does not produce a trailing empty field.
/// An empty line (or one made only of separators) yields a single empty
/// field, so callers can always read the first element.
#[must_use]
pub fn split(line: &str, separator: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(separator).filter(|f| !f.is_empty()).collect();
    if fields.is_empty() {
        fields.push("");
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_single_field_when_no_separator() {
        assert_eq!(split("INFO", ' '), vec!["INFO"]);
    }

    #[test]
    fn should_collapse_consecutive_separators() {
        assert_eq!(
            split("THERM   read  day monday", ' '),
            vec!["THERM", "read", "day", "monday"]
        );
    }

    #[test]
    fn should_skip_leading_and_trailing_separators() {
        assert_eq!(split("  SPEAKER play  ", ' '), vec!["SPEAKER", "play"]);
    }

    #[test]
    fn should_yield_single_empty_field_when_line_is_empty() {
        assert_eq!(split("", ' '), vec![""]);
    }

    #[test]
    fn should_yield_single_empty_field_when_line_is_only_separators() {
        assert_eq!(split("    ", ' '), vec![""]);
    }

    #[test]
    fn should_invert_a_single_separator_join() {
        let fields = ["ALARM", "disarm", "1", "3", "3", "7"];
        let line = fields.join(" ");
        assert_eq!(split(&line, ' '), fields);
    }

    #[test]
    fn should_honour_non_space_separator() {
        assert_eq!(split("a,,b,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn should_keep_other_whitespace_inside_fields() {
        assert_eq!(split("a\tb c", ' '), vec!["a\tb", "c"]);
    }
}
