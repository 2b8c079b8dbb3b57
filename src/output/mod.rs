//! Output formatting for CLI display
//!
//! Helpers for the `list` command: section headers, key lines and the word
//! wrapping used by the long listing.

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column width the long listing wraps statements to, indent included
pub const WRAP_WIDTH: usize = 80;

/// Indent placed before every wrapped statement line
pub const STATEMENT_INDENT: &str = "    ";

/// Format a section header, e.g. `[greeting]`
#[must_use]
pub fn section_header(name: &str) -> String {
    format!("[{name}]").bold().to_string()
}

/// Format a key in the short listing
#[must_use]
pub fn key_line(key: &str) -> String {
    format!("  {}", key.cyan())
}

/// Format a key in the long listing (unindented, above its statement)
#[must_use]
pub fn long_key_line(key: &str) -> String {
    key.cyan().to_string()
}

/// Format a statement for the long listing
///
/// Wraps to [`WRAP_WIDTH`] with every line indented by [`STATEMENT_INDENT`].
#[must_use]
pub fn statement_lines(text: &str) -> Vec<String> {
    wrap(text, WRAP_WIDTH, STATEMENT_INDENT)
}

/// Greedy word wrap
///
/// Each line of `text` is wrapped on its own, so explicit newlines survive.
/// Runs of whitespace collapse to one space. No output line is wider than
/// `width` terminal columns including `indent`; a word that cannot fit on a
/// line by itself is split. Blank input lines come out as empty strings.
#[must_use]
pub fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let available = width.saturating_sub(indent.width()).max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let mut rest = word;

            while !rest.is_empty() {
                let rest_width = rest.width();

                if current_width == 0 && rest_width > available {
                    let split = split_at_width(rest, available);
                    lines.push(format!("{indent}{}", &rest[..split]));
                    rest = &rest[split..];
                } else if current_width == 0 {
                    current.push_str(rest);
                    current_width = rest_width;
                    rest = "";
                } else if current_width + 1 + rest_width <= available {
                    current.push(' ');
                    current.push_str(rest);
                    current_width += 1 + rest_width;
                    rest = "";
                } else {
                    lines.push(format!("{indent}{current}"));
                    current.clear();
                    current_width = 0;
                }
            }
        }

        if current.is_empty() {
            if paragraph.trim().is_empty() {
                lines.push(String::new());
            }
        } else {
            lines.push(format!("{indent}{current}"));
        }
    }

    lines
}

/// Byte index of the longest prefix of `word` that fits in `max_width` columns
///
/// Always takes at least one character so a character wider than the line
/// still makes progress.
fn split_at_width(word: &str, max_width: usize) -> usize {
    let mut used = 0;

    for (idx, c) in word.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if idx > 0 && used + char_width > max_width {
            return idx;
        }
        used += char_width;
    }

    word.len()
}
