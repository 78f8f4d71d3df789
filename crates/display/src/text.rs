//! Plain-text transformations shared by the field and summary formatters.
//!
//! All functions here are total: malformed markup, stray carriage returns,
//! and arbitrary whitespace degrade gracefully instead of erroring.

/// Wrap each blank-line-delimited run of text in a paragraph tag.
///
/// `\r\n` is normalized to `\n` first; a blank line is one or more empty
/// lines between runs. Every non-empty run gets its own `<p>..</p>`,
/// including the final one, so a field with no blank lines comes back as a
/// single wrapped paragraph.
pub fn wrap_paragraphs(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let mut out = String::with_capacity(normalized.len() + 16);
    for run in normalized.split("\n\n") {
        let run = run.trim_matches('\n');
        if run.is_empty() {
            continue;
        }
        out.push_str("<p>");
        out.push_str(run);
        out.push_str("</p>");
    }
    out
}

/// Remove markup tags with a single forward scan.
///
/// Text from `<` up to the next `>` is dropped; an unterminated tag drops
/// the remainder of the input. The result is always bounded by the input
/// length, whatever shape the markup is in.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Trim and collapse every whitespace run to a single space.
pub fn squish(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max_chars` characters, ellipsis included.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-char.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let head: String = text.chars().take(max_chars - 3).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_each_blank_line_delimited_run() {
        assert_eq!(
            wrap_paragraphs("Para one.\n\nPara two."),
            "<p>Para one.</p><p>Para two.</p>"
        );
    }

    #[test]
    fn tolerates_carriage_returns_in_paragraph_breaks() {
        assert_eq!(
            wrap_paragraphs("Para one.\r\n\r\nPara two."),
            "<p>Para one.</p><p>Para two.</p>"
        );
    }

    #[test]
    fn runs_of_blank_lines_are_a_single_break() {
        assert_eq!(wrap_paragraphs("a\n\n\n\nb"), "<p>a</p><p>b</p>");
        assert_eq!(wrap_paragraphs("a\n\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn single_run_gets_exactly_one_wrap() {
        assert_eq!(wrap_paragraphs("just one paragraph"), "<p>just one paragraph</p>");
    }

    #[test]
    fn interior_single_newlines_are_preserved() {
        assert_eq!(wrap_paragraphs("line one\nline two"), "<p>line one\nline two</p>");
    }

    #[test]
    fn wrapping_an_already_wrapped_run_only_adds_the_outer_wrap() {
        assert_eq!(wrap_paragraphs("<p>inner</p>"), "<p><p>inner</p></p>");
    }

    #[test]
    fn empty_and_blank_line_only_input_wraps_to_nothing() {
        assert_eq!(wrap_paragraphs(""), "");
        assert_eq!(wrap_paragraphs("\n\n\n\n"), "");
    }

    #[test]
    fn strip_tags_removes_balanced_markup() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn strip_tags_drops_the_tail_of_an_unterminated_tag() {
        assert_eq!(strip_tags("before <broken"), "before ");
    }

    #[test]
    fn strip_tags_keeps_stray_closing_angles() {
        assert_eq!(strip_tags("a > b"), "a > b");
    }

    #[test]
    fn squish_collapses_internal_whitespace_and_trims() {
        assert_eq!(squish("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn truncate_respects_the_limit_including_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 3), "...");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "ä".repeat(20);
        let result = truncate(&text, 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: tag stripping is total and never grows the text.
            #[test]
            fn strip_tags_is_bounded(input in ".*") {
                let stripped = strip_tags(&input);
                prop_assert!(stripped.chars().count() <= input.chars().count());
                prop_assert!(!stripped.contains('<'));
            }

            /// Property: truncation never exceeds the limit, suffix included.
            #[test]
            fn truncate_never_exceeds_limit(input in ".*", max in 0usize..300) {
                prop_assert!(truncate(&input, max).chars().count() <= max);
            }

            /// Property: paragraph wrapping of text without blank lines is a
            /// single outer wrap.
            #[test]
            fn single_run_wrap_is_one_outer_wrap(input in "[^\r\n]+") {
                prop_assert_eq!(wrap_paragraphs(&input), format!("<p>{input}</p>"));
            }
        }
    }
}
