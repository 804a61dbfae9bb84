// ABOUTME: Width-bounded string shortening for table cells.
// ABOUTME: Counts characters, not bytes, and flattens embedded newlines.

/// Visible stand-in for an embedded newline.
pub const NEWLINE_GLYPH: &str = "\u{2424}";

const ELLIPSIS: char = '\u{2026}';

/// Keep the first `max - 1` characters and append an ellipsis when `s` is
/// longer than `max` characters.
pub fn shorten(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        return flatten(s);
    }
    let Some(keep) = max.checked_sub(1) else {
        return String::new();
    };
    let mut out: String = s.chars().take(keep).collect();
    out.push(ELLIPSIS);
    flatten(&out)
}

/// Keep both ends of `s` and put an ellipsis in the middle when it is longer
/// than `max` characters. The head gets the extra character on odd splits.
pub fn shorten_middle(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        return flatten(s);
    }
    let Some(keep) = max.checked_sub(1) else {
        return String::new();
    };
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;
    let mut out: String = s.chars().take(head).collect();
    out.push(ELLIPSIS);
    out.extend(s.chars().skip(count - tail));
    flatten(&out)
}

fn flatten(s: &str) -> String {
    s.replace('\n', NEWLINE_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_are_untouched() {
        assert_eq!(shorten("nginx", 10), "nginx");
        assert_eq!(shorten("nginx", 5), "nginx");
        assert_eq!(shorten_middle("nginx", 5), "nginx");
    }

    #[test]
    fn end_ellipsis_keeps_prefix() {
        assert_eq!(shorten("quay.io/minio/minio", 8), "quay.io\u{2026}");
    }

    #[test]
    fn middle_ellipsis_keeps_both_ends() {
        // keep 6: 3 from the start, 3 from the end
        assert_eq!(shorten_middle("abcdefghij", 7), "abc\u{2026}hij");
        // keep 5: 3 from the start, 2 from the end
        assert_eq!(shorten_middle("abcdefghij", 6), "abc\u{2026}ij");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(shorten("h\u{e9}h\u{e9}", 4), "h\u{e9}h\u{e9}");
        assert_eq!(shorten("\u{65e5}\u{672c}\u{8a9e}\u{6587}", 3), "\u{65e5}\u{672c}\u{2026}");
        assert_eq!(
            shorten_middle("\u{65e5}\u{672c}\u{8a9e}\u{6587}", 3),
            "\u{65e5}\u{2026}\u{6587}"
        );
    }

    #[test]
    fn newlines_are_flattened_without_truncation() {
        assert_eq!(shorten("a\nb", 10), "a\u{2424}b");
        assert_eq!(shorten_middle("a\nb", 10), "a\u{2424}b");
    }

    #[test]
    fn newlines_are_flattened_after_truncation() {
        assert_eq!(shorten("a\nbcdef", 4), "a\u{2424}b\u{2026}");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(shorten("abc", 0), "");
        assert_eq!(shorten_middle("abc", 0), "");
    }

    #[test]
    fn width_one_is_just_the_ellipsis() {
        assert_eq!(shorten("abc", 1), "\u{2026}");
        assert_eq!(shorten_middle("abc", 1), "\u{2026}");
    }
}
