/// Replace every line feed with the two-character sequence `\n`.
///
/// Carriage returns are left as-is, so CRLF input keeps a stray `\r`
/// in front of each escape.
pub fn escape_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + count_newlines(text));
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

pub fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

pub(crate) fn count_carriage_returns(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\r').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: &str = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n\
                         -----BEGIN CERTIFICATE-----\nMIIC\n-----END CERTIFICATE-----\n";

    #[test]
    fn escapes_each_newline() {
        assert_eq!(escape_newlines("A\nB\nC"), r"A\nB\nC");
    }

    #[test]
    fn leaves_text_without_newlines_unchanged() {
        assert_eq!(escape_newlines("ABC"), "ABC");
        assert_eq!(escape_newlines(""), "");
    }

    #[test]
    fn output_has_no_line_feeds_and_grows_by_newline_count() {
        let k = count_newlines(CHAIN);
        let out = escape_newlines(CHAIN);

        assert_eq!(k, 6);
        assert!(!out.contains('\n'));
        assert_eq!(out.matches(r"\n").count(), k);
        assert_eq!(out.len(), CHAIN.len() + k);
    }

    #[test]
    fn escaping_already_escaped_text_is_a_no_op() {
        let once = escape_newlines(CHAIN);
        assert_eq!(escape_newlines(&once), once);
    }

    #[test]
    fn preserves_carriage_returns() {
        assert_eq!(escape_newlines("A\r\nB"), "A\r\\nB");
        assert_eq!(count_carriage_returns("A\r\nB\r\n"), 2);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(escape_newlines("é\nü"), "é\\nü");
        assert_eq!(escape_newlines("é\nü").len(), "é\nü".len() + 1);
    }
}
