//! Terminal text layout.
//!
//! Column arithmetic is done in display columns rather than chars, so wide
//! glyphs such as CJK meanings occupy two columns and tables stay aligned.
//!
//! # Key Functions
//!
//! - [`display_width`]: columns a string occupies
//! - [`pad_to_width`] / [`center`]: fill to a column width
//! - [`truncate_to_width`]: shorten with an ellipsis
//! - [`render_page`]: the boxed browse table

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::dictionary::{DictionaryStats, Page};
use crate::types::format_meanings;

/// Columns between the two vertical borders of a box.
pub const BOX_INNER_WIDTH: usize = 78;

const NUMBER_WIDTH: usize = 5;
const WORD_WIDTH: usize = 18;
const MEANING_WIDTH: usize = 38;
const STATUS_WIDTH: usize = 6;
const ELLIPSIS: &str = "...";

/// Number of terminal columns `text` occupies.
///
/// # Examples
///
/// ```
/// use byd_core::layout::display_width;
///
/// assert_eq!(display_width("apple"), 5);
/// assert_eq!(display_width("苹果"), 4);
/// ```
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Right-pads `text` with spaces to `width` columns.
///
/// Text that is already at least `width` columns wide is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - current))
}

/// Centers `text` in `width` columns; an odd leftover column goes right.
pub fn center(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    let left = (width - current) / 2;
    let right = width - current - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Shortens text wider than `limit` columns.
///
/// Keeps the longest prefix of at most `keep` columns and appends `...`.
///
/// # Examples
///
/// ```
/// use byd_core::layout::truncate_to_width;
///
/// assert_eq!(truncate_to_width("short", 10, 7), "short");
/// assert_eq!(truncate_to_width("a rather long meaning", 10, 7), "a rathe...");
/// ```
pub fn truncate_to_width(text: &str, limit: usize, keep: usize) -> String {
    if display_width(text) <= limit {
        return text.to_string();
    }
    let mut kept = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > keep {
            break;
        }
        kept.push(c);
        width += w;
    }
    kept.push_str(ELLIPSIS);
    kept
}

// ============================================================================
// Box drawing
// ============================================================================

/// `╔══…══╗`
pub fn box_top() -> String {
    format!("╔{}╗", "═".repeat(BOX_INNER_WIDTH))
}

/// `╚══…══╝`
pub fn box_bottom() -> String {
    format!("╚{}╝", "═".repeat(BOX_INNER_WIDTH))
}

/// `╠══…══╣`
pub fn box_divider() -> String {
    format!("╠{}╣", "═".repeat(BOX_INNER_WIDTH))
}

/// A box row with centered text.
pub fn box_line(text: &str) -> String {
    format!("║{}║", center(text, BOX_INNER_WIDTH))
}

/// A single-line message in a closed box.
pub fn message_box(text: &str) -> Vec<String> {
    vec![box_top(), box_line(text), box_bottom()]
}

fn key_help_row() -> String {
    let cells = [
        (4, " J: Next page"),
        (4, "K: Previous page"),
        (4, "S: Search"),
        (3, "Q: Quit"),
    ];
    let inner: Vec<String> = cells
        .iter()
        .map(|(pad, label)| format!("{0}{label}{0}", " ".repeat(*pad)))
        .collect();
    format!("║{}║", inner.join("│"))
}

fn column_divider() -> String {
    format!(
        "╠{}╪{}╪{}╪{}╣",
        "═".repeat(NUMBER_WIDTH + 2),
        "═".repeat(WORD_WIDTH + 2),
        "═".repeat(MEANING_WIDTH + 2),
        "═".repeat(STATUS_WIDTH + 2)
    )
}

fn table_row(number: &str, word: &str, meaning: &str, status: &str) -> String {
    format!(
        "║ {} │ {} │ {} │ {} ║",
        center(number, NUMBER_WIDTH),
        word,
        meaning,
        center(status, STATUS_WIDTH)
    )
}

/// Status cell for a memory count.
pub fn status_cell(count: u32, threshold: u32) -> String {
    if count >= threshold {
        "✓".to_string()
    } else {
        format!("{count:2}")
    }
}

/// Renders one browse page as boxed table lines.
pub fn render_page(page: &Page<'_>, stats: DictionaryStats, threshold: u32) -> Vec<String> {
    let mut lines = vec![
        box_top(),
        box_line(&format!(
            "All Words (Page {}/{})",
            page.index + 1,
            page.total_pages.max(1)
        )),
        box_divider(),
        key_help_row(),
        box_divider(),
        table_row(
            "No.",
            &center("Word", WORD_WIDTH),
            &center("Meaning", MEANING_WIDTH),
            "Status",
        ),
        column_divider(),
    ];

    for (offset, entry) in page.entries.iter().enumerate() {
        let number = (page.start + offset).to_string();
        let word = pad_to_width(
            &truncate_to_width(entry.word.as_str(), WORD_WIDTH, WORD_WIDTH - ELLIPSIS.len()),
            WORD_WIDTH,
        );
        let meaning = pad_to_width(
            &truncate_to_width(
                &format_meanings(&entry.meanings),
                MEANING_WIDTH,
                MEANING_WIDTH - ELLIPSIS.len(),
            ),
            MEANING_WIDTH,
        );
        let status = status_cell(entry.memory.count, threshold);
        lines.push(table_row(&number, &word, &meaning, &status));
    }

    lines.push(box_divider());
    lines.push(box_line(&format!(
        "Showing {}-{} of {} words | Mastered: {}/{}",
        page.start, page.end, stats.total, stats.mastered, stats.total
    )));
    lines.push(box_bottom());
    lines
}
