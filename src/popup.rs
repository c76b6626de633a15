//! Popup content and placement.

use std::fmt;

use itertools::Itertools;

use crate::config;
use crate::entry::DictEntry;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Visible part of the page, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub inner_width: f64,
    pub inner_height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxWidth {
    Percent(u32),
    Pixels(u32),
}

impl fmt::Display for MaxWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{}%", p),
            Self::Pixels(px) => write!(f, "{}px", px),
        }
    }
}

/// Document coordinates of the popup's top left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub max_width: MaxWidth,
}

pub fn max_width_for(viewport: &Viewport) -> MaxWidth {
    if viewport.inner_width < config::NARROW_VIEWPORT {
        MaxWidth::Percent(config::NARROW_MAX_WIDTH_PERCENT)
    } else {
        MaxWidth::Pixels(config::MAX_WIDTH_PX)
    }
}

/// Put the popup below the pointer, or above it in the lower half of the viewport,
/// and shift it left so it does not overflow the right edge.
pub fn place_popup(viewport: &Viewport, pointer: Point, popup: Size) -> Placement {
    let mut left = pointer.x + viewport.scroll_x;
    let overflow_x = pointer.x + popup.width - viewport.inner_width + config::POPUP_EDGE_PADDING;
    if overflow_x > 0.0 {
        left -= overflow_x;
    }

    let top = if pointer.y > viewport.inner_height / 2.0 {
        pointer.y + viewport.scroll_y - popup.height - config::POPUP_MARGIN
    } else {
        pointer.y + viewport.scroll_y + config::POPUP_MARGIN
    };

    Placement {
        left,
        top,
        max_width: max_width_for(viewport),
    }
}

pub fn render_row(entry: &DictEntry, show_translation: bool) -> String {
    let mut row = String::from("<li>");
    row.push_str(&format!(
        "<div class='kana'>{}</div>",
        escape_html(&entry.pinyin_marks())
    ));
    if !entry.hanzi.is_empty() {
        row.push_str(&format!(
            "<div class='kanji'>{}</div>",
            escape_html(&entry.hanzi)
        ));
    }
    if show_translation {
        row.push_str(&format!(
            "<div class='translation'>{}</div>",
            escape_html(&entry.translation)
        ));
    }
    row.push_str("</li>");
    row
}

/// Popup HTML, `None` if there is nothing to show
pub fn render_results(entries: &[DictEntry], show_translation: bool) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let rows = entries
        .iter()
        .map(|entry| render_row(entry, show_translation))
        .join("");
    Some(format!("<ul class='results'>{}</ul>", rows))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
