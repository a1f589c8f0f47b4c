//! Pure text layout helpers: wrapping, alignment and width budgeting.
//!
//! Nothing in this module writes to the terminal. Every function returns the
//! formatted text and the console decides when it is printed.

use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Prefix written before every prompt and echoed answer.
pub const INPUT_MARKER: &str = " >> ";

/// Left padding used for option lists such as `[1] Display Seat Layout`.
pub const OPTIONS_PADDING: usize = 8;

/// Horizontal placement of a line inside its width budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Width budget and fill settings for [`align`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutParams {
    /// Total width of every produced line, padding included.
    pub width: usize,
    /// Fill units emitted on both sides before alignment fill.
    pub padding: usize,
    /// Display width to assume instead of measuring the text. Text laid out
    /// with an explicit length is never wrapped.
    pub explicit_length: Option<usize>,
    /// String repeated for every fill unit, usually a single space.
    pub fill: String,
}

impl LayoutParams {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            padding: 0,
            explicit_length: None,
            fill: " ".to_string(),
        }
    }

    /// Layout used for menu option lists.
    #[must_use]
    pub fn options(width: usize) -> Self {
        Self::new(width).with_padding(OPTIONS_PADDING)
    }

    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_explicit_length(mut self, length: usize) -> Self {
        self.explicit_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Width left for text once padding is taken from both sides.
    #[must_use]
    pub fn inner_width(&self) -> usize {
        self.width
            .saturating_sub(self.padding.saturating_mul(2))
    }
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Repeats `fill` `count` times.
#[must_use]
pub fn repeat_fill(count: usize, fill: &str) -> String {
    fill.repeat(count)
}

/// A full-width line of `ch` followed by a newline.
#[must_use]
pub fn divider(ch: char, width: usize) -> String {
    let mut line: String = std::iter::repeat_n(ch, width).collect();
    line.push('\n');
    line
}

/// Splits `total` into two lengths proportional to `ratio_a : ratio_b`.
///
/// The first length is rounded down and the second takes the remainder, so
/// the two always add up to `total`. A zero ratio sum gives everything to the
/// second part.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn split_ratio(total: usize, ratio_a: usize, ratio_b: usize) -> (usize, usize) {
    let sum = ratio_a as u128 + ratio_b as u128;
    if sum == 0 {
        return (0, total);
    }

    // ratio_a <= sum, so the first part never exceeds total
    let first = (total as u128 * ratio_a as u128 / sum) as usize;
    (first, total - first)
}

/// Splits `extra` fill units into the left and right side for `alignment`.
/// Centering puts the odd unit on the right.
#[must_use]
pub fn fill_units(extra: usize, alignment: Alignment) -> (usize, usize) {
    match alignment {
        Alignment::Left => (0, extra),
        Alignment::Right => (extra, 0),
        Alignment::Center => {
            let left = extra / 2;
            (left, extra.saturating_sub(left))
        }
    }
}

/// Word-wraps `text` so no line is wider than `limit` columns.
///
/// Every input line is wrapped on its own and keeps its leading indentation.
/// Lines only break at spaces. A word wider than `limit` is never cut; it is
/// placed alone on its own line instead.
#[must_use]
pub fn wrap(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| wrap_line(line, limit))
        .collect()
}

fn wrap_line(raw: &str, limit: usize) -> Vec<String> {
    let body = raw.trim_start_matches(' ');
    let (indent, _) = raw.split_at(raw.len().saturating_sub(body.len()));

    let mut lines = Vec::new();
    let mut line = indent.to_string();
    let mut width = indent.len();
    let mut has_word = false;

    for (gap, word) in segments(body) {
        if word.is_empty() {
            continue;
        }
        let word_width = display_width(word);

        if word_width > limit {
            if has_word {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.to_string());
            line.clear();
            width = 0;
            has_word = false;
            continue;
        }

        if has_word {
            let joined = width.saturating_add(gap.len()).saturating_add(word_width);
            if joined > limit {
                lines.push(std::mem::take(&mut line));
                width = 0;
                has_word = false;
            } else {
                line.push_str(gap);
                width = width.saturating_add(gap.len());
            }
        } else if width.saturating_add(word_width) > limit {
            // the indentation alone would push the word past the limit
            line.clear();
            width = 0;
        }

        line.push_str(word);
        width = width.saturating_add(word_width);
        has_word = true;
    }

    if has_word {
        lines.push(line);
    } else if lines.is_empty() {
        // blank line: keep its spaces only while they fit
        lines.push(if width > limit { String::new() } else { line });
    }

    lines
}

/// Yields `(spaces, word)` pairs; a trailing run of spaces comes with an
/// empty word.
fn segments(text: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let gap_len = rest.len().saturating_sub(rest.trim_start_matches(' ').len());
        let (gap, tail) = rest.split_at(gap_len);
        let word_len = tail.find(' ').unwrap_or(tail.len());
        let (word, remaining) = tail.split_at(word_len);
        rest = remaining;
        Some((gap, word))
    })
}

/// Wraps and pads `text` into lines exactly `params.width` columns wide.
///
/// Lines are joined with `\n` and the result has no trailing newline. A line
/// holding an unbreakable word wider than the budget is emitted without
/// alignment fill and overflows.
#[must_use]
pub fn align(text: &str, params: &LayoutParams, alignment: Alignment) -> String {
    let inner = params.inner_width();
    let lines = match params.explicit_length {
        Some(_) => vec![text.to_string()],
        None => wrap(text, inner),
    };

    let padding = repeat_fill(params.padding, &params.fill);

    lines
        .iter()
        .map(|line| {
            let length = params
                .explicit_length
                .unwrap_or_else(|| display_width(line));
            let (left, right) = fill_units(inner.saturating_sub(length), alignment);
            format!(
                "{padding}{}{line}{}{padding}",
                repeat_fill(left, &params.fill),
                repeat_fill(right, &params.fill),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Aligns every entry of `lines` and terminates each with a newline.
#[must_use]
pub fn align_lines<S: AsRef<str>>(lines: &[S], params: &LayoutParams, alignment: Alignment) -> String {
    lines
        .iter()
        .map(|line| {
            let mut aligned = align(line.as_ref(), params, alignment);
            aligned.push('\n');
            aligned
        })
        .collect()
}

/// Record of an answered prompt, e.g. ` >> Enter Row number: 4`.
#[must_use]
pub fn echo_line(prompt: &str, value: &str) -> String {
    format!("{INPUT_MARKER}{prompt}{value}\n")
}

/// Renders `[key] label` option lines, left aligned.
#[must_use]
pub fn format_menu<K, L, I>(entries: I, params: &LayoutParams) -> String
where
    K: fmt::Display,
    L: AsRef<str>,
    I: IntoIterator<Item = (K, L)>,
{
    let text = entries
        .into_iter()
        .map(|(key, label)| format!("[{key}] {}", label.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    align(&text, params, Alignment::Left)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing)]

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_split_ratio_even_width() {
        assert_eq!(split_ratio(80, 1, 1), (40, 40));
    }

    #[test]
    fn test_split_ratio_odd_width_gives_remainder_to_second() {
        assert_eq!(split_ratio(81, 1, 1), (40, 41));
        assert_eq!(split_ratio(10, 1, 2), (3, 7));
    }

    #[test]
    fn test_split_ratio_zero_sum() {
        assert_eq!(split_ratio(10, 0, 0), (0, 10));
    }

    #[test]
    fn test_fill_units_center_biases_right() {
        assert_eq!(fill_units(7, Alignment::Center), (3, 4));
        assert_eq!(fill_units(6, Alignment::Center), (3, 3));
        assert_eq!(fill_units(5, Alignment::Left), (0, 5));
        assert_eq!(fill_units(5, Alignment::Right), (5, 0));
    }

    #[test]
    fn test_align_left_right_center() {
        let params = LayoutParams::new(10);
        assert_eq!(align("abc", &params, Alignment::Left), "abc       ");
        assert_eq!(align("abc", &params, Alignment::Right), "       abc");
        assert_eq!(align("abc", &params, Alignment::Center), "   abc    ");
    }

    #[test]
    fn test_align_with_padding() {
        let params = LayoutParams::new(12).with_padding(2);
        assert_eq!(align("abc", &params, Alignment::Right), "       abc  ");
        assert_eq!(align("abc", &params, Alignment::Center), "    abc     ");
    }

    #[test]
    fn test_align_multiple_lines_joined_without_trailing_newline() {
        let params = LayoutParams::new(6);
        assert_eq!(align("ab\ncd", &params, Alignment::Right), "    ab\n    cd");
    }

    #[test]
    fn test_align_explicit_length_skips_measuring() {
        let params = LayoutParams::new(8)
            .with_fill("░")
            .with_explicit_length(4);
        // the text is three columns but laid out as if it were four
        assert_eq!(align("███", &params, Alignment::Center), "░░███░░");
    }

    #[test]
    fn test_align_measures_display_width() {
        let params = LayoutParams::new(6).with_fill(".");
        assert_eq!(align("░░", &params, Alignment::Left), "░░....");
    }

    #[test]
    fn test_align_overlong_word_overflows_without_fill() {
        let params = LayoutParams::new(4);
        assert_eq!(align("abcdef", &params, Alignment::Center), "abcdef");
    }

    #[test]
    fn test_align_lines_terminates_each_line() {
        let params = LayoutParams::new(4);
        assert_eq!(
            align_lines(&["a", "b"], &params, Alignment::Left),
            "a   \nb   \n"
        );
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_preserves_indentation() {
        assert_eq!(wrap("  one two", 7), vec!["  one", "two"]);
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole_on_its_own_line() {
        assert_eq!(
            wrap("a extraordinarily b", 5),
            vec!["a", "extraordinarily", "b"]
        );
    }

    #[test]
    fn test_wrap_drops_indent_that_cannot_fit() {
        assert_eq!(wrap("    word", 5), vec!["word"]);
    }

    #[test]
    fn test_wrap_blank_line_wider_than_limit_becomes_empty() {
        assert_eq!(wrap("      ", 2), vec![String::new()]);
        assert_eq!(wrap("  ", 4), vec!["  ".to_string()]);
    }

    #[test]
    fn test_wrap_keeps_empty_lines() {
        assert_eq!(wrap("a\n\nb", 5), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty_text_has_no_lines() {
        assert!(wrap("", 5).is_empty());
    }

    #[test]
    fn test_wrap_keeps_inner_spacing_on_one_line() {
        assert_eq!(wrap("[1]  Exit", 20), vec!["[1]  Exit"]);
    }

    #[test]
    fn test_echo_line() {
        assert_eq!(echo_line("Enter Row number: ", "4"), " >> Enter Row number: 4\n");
    }

    #[test]
    fn test_divider() {
        assert_eq!(divider('=', 3), "===\n");
    }

    #[test]
    fn test_format_menu() {
        let params = LayoutParams::new(20).with_padding(2);
        let menu = format_menu([(1, "Exit"), (0, "Back")], &params);
        assert_eq!(menu, "  [1] Exit          \n  [0] Back          ");
    }

    proptest! {
        #[test]
        fn prop_split_ratio_is_exact(total in 0usize..100_000, a in 1usize..1_000, b in 1usize..1_000) {
            let (first, second) = split_ratio(total, a, b);
            prop_assert_eq!(first + second, total);
            prop_assert_eq!(first, total * a / (a + b));
        }

        #[test]
        fn prop_wrap_respects_limit_and_keeps_words(
            text in "[a-z]{1,12}( [a-z]{1,12}){0,20}",
            limit in 1usize..40,
        ) {
            let lines = wrap(&text, limit);
            for line in &lines {
                let single_word = !line.trim().contains(' ');
                prop_assert!(display_width(line) <= limit || single_word, "line {:?} over {}", line, limit);
            }
            let rebuilt = lines.join(" ");
            let rebuilt: Vec<&str> = rebuilt.split_whitespace().collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rebuilt, original);
        }

        #[test]
        fn prop_center_fills_exactly(text in "[a-z]{1,20}", width in 20usize..100) {
            let aligned = align(&text, &LayoutParams::new(width), Alignment::Center);
            let left = aligned.len() - aligned.trim_start().len();
            let right = aligned.len() - aligned.trim_end().len();
            prop_assert_eq!(left + right + text.len(), width);
            prop_assert!(right == left || right == left + 1);
        }
    }
}
