//! Text utilities for the domain layer.

/// Look-alike punctuation folded to ASCII before pattern matching.
const PUNCTUATION_FOLDS: &[(char, &str)] = &[
    ('\u{2014}', "-"),
    ('\u{2013}', "-"),
    ('\u{2192}', "->"),
];

/// Normalize an instruction document for matching.
///
/// Line endings become `\n` (both `\r\n` and lone `\r`), em/en dashes become
/// `-` and the arrow glyph becomes `->`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
            continue;
        }
        match PUNCTUATION_FOLDS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }

    out
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_normalize_punctuation() {
        assert_eq!(normalize("Analyze JD \u{2014} extract"), "Analyze JD - extract");
        assert_eq!(normalize("1\u{2013}2"), "1-2");
        assert_eq!(normalize("plan \u{2192} execute"), "plan -> execute");
    }

    #[test]
    fn test_normalize_keeps_other_unicode() {
        assert_eq!(normalize("caf\u{e9} \u{2022} item"), "caf\u{e9} \u{2022} item");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte_boundary() {
        // "é" is two bytes; cutting inside it must back off to a boundary
        assert_eq!(truncate("ééééé", 6), "é...");
    }
}
