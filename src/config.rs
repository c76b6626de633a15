use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const WORD_SEP: &str = "／";
pub const TRANSLATION_SEP: &str = "; ";

/// DOM id of the popup element
pub const POPUP_ID: &str = "safarikai-popup";
/// Number of characters after the caret sent to the lookup service
pub const LOOKUP_LENGTH: usize = 20;
/// Vertical distance between pointer and popup (px)
pub const POPUP_MARGIN: f64 = 30.0;
/// Distance kept to the right edge of the viewport (px)
pub const POPUP_EDGE_PADDING: f64 = 10.0;
/// Below this viewport width the popup width is relative
pub const NARROW_VIEWPORT: f64 = 400.0;
pub const NARROW_MAX_WIDTH_PERCENT: u32 = 80;
pub const MAX_WIDTH_PX: u32 = 500;

/// Options pushed by the host, field names as used in the status message
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// select the looked up word in the page
    #[serde(default = "default_true")]
    pub highlight_text: bool,
    #[serde(default = "default_true")]
    pub show_translation: bool,
    /// only look up while Alt is held
    #[serde(default)]
    pub lookup_only_on_hotkey: bool,
    /// look up the alt text of images
    #[serde(default)]
    pub lookup_img_alt: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Status {
    fn default() -> Self {
        Self {
            enabled: true,
            highlight_text: true,
            show_translation: true,
            lookup_only_on_hotkey: false,
            lookup_img_alt: false,
        }
    }
}

pub fn load_status(path: &Path) -> anyhow::Result<Status> {
    let s = fs::read_to_string(path)
        .context(format!("Could not open status file {}", path.display()))?;
    let status: Status = serde_json::from_str(&s)
        .context(format!("Invalid status file {}", path.display()))?;
    Ok(status)
}
