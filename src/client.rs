//! Page side of the lookup: tracks the pointer, asks the host to look up the text
//! under it and turns the answer into a popup.
//!
//! The client does not touch the page itself. Events come in as plain values,
//! whatever has to happen in the page is returned as a list of [`Effect`]s.

use crate::config::{self, Status};
use crate::entry::DictEntry;
use crate::message::Message;
use crate::popup::{self, MaxWidth, Placement, Point, Size, Viewport};

/// Element found under the pointer
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    /// textarea or input
    TextInput,
    /// inside a contenteditable element
    ContentEditable,
    Image { alt: String },
    /// text node with the caret position under the pointer (in chars)
    Text { data: String, offset: usize },
    /// no caret position could be determined
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub target: PointerTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Send(Message),
    HidePopup,
    ShowPopup { html: String, placement: Placement },
    /// select chars `start..end` of the text node under the pointer
    Highlight { start: usize, end: usize },
    ClearHighlight,
}

/// What the client needs to read from the page when showing a result
pub trait Page {
    fn viewport(&self) -> Viewport;
    /// the user has selected text themselves
    fn has_selection(&self) -> bool;
    /// rendered size of the popup with the given content
    fn measure_popup(&self, html: &str, max_width: MaxWidth) -> Size;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TextRange {
    offset: usize,
    data_len: usize,
}

#[derive(Debug)]
pub struct Client {
    url: String,
    is_top_frame: bool,
    status: Status,
    pointer: Point,
    mouse_down: bool,
    alt_pressed: bool,
    highlighted: bool,
    range: Option<TextRange>,
    selection_text: String,
}

impl Client {
    pub fn new(url: &str, is_top_frame: bool) -> Self {
        Client {
            url: url.to_owned(),
            is_top_frame,
            status: Status::default(),
            pointer: Point::default(),
            mouse_down: false,
            alt_pressed: false,
            highlighted: false,
            range: None,
            selection_text: String::new(),
        }
    }

    /// Message to send once the client is set up
    pub fn startup(&self) -> Message {
        Message::QueryStatus
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn selection_text(&self) -> &str {
        &self.selection_text
    }

    pub fn on_mouse_move(&mut self, event: &PointerEvent) -> Vec<Effect> {
        if !self.status.enabled || self.mouse_down {
            return vec![Effect::HidePopup];
        }
        let should_lookup = !self.status.lookup_only_on_hotkey || self.alt_pressed;
        self.resolve_selection(event);
        if should_lookup && !self.selection_text.is_empty() {
            vec![Effect::Send(Message::LookupWord {
                word: self.selection_text.clone(),
                url: self.url.clone(),
            })]
        } else {
            let mut effects = self.clear_highlight();
            effects.push(Effect::HidePopup);
            effects
        }
    }

    pub fn on_mouse_out(&mut self) -> Vec<Effect> {
        vec![Effect::HidePopup]
    }

    pub fn on_mouse_down(&mut self, button: u16) -> Vec<Effect> {
        if button != 0 {
            return vec![];
        }
        self.mouse_down = true;
        self.clear_highlight()
    }

    pub fn on_mouse_up(&mut self, button: u16) {
        if button == 0 {
            self.mouse_down = false;
        }
    }

    pub fn on_key_down(&mut self, key: &str) {
        if key == "Alt" {
            self.alt_pressed = true;
        }
    }

    pub fn on_key_up(&mut self) {
        self.alt_pressed = false;
    }

    pub fn handle_message(&mut self, message: Message, page: &impl Page) -> Vec<Effect> {
        match message {
            Message::ShowResult { word, url, result } => {
                self.show_result(&word, &url, &result, page)
            }
            Message::Status(status) => self.update_status(status),
            other => {
                log::debug!("ignoring message for the host: {other:?}");
                vec![]
            }
        }
    }

    fn resolve_selection(&mut self, event: &PointerEvent) {
        self.pointer = event.position;
        self.range = None;
        match &event.target {
            PointerTarget::TextInput | PointerTarget::ContentEditable => {
                self.selection_text.clear();
            }
            PointerTarget::Image { alt } if self.status.lookup_img_alt => {
                self.selection_text = alt.trim().to_owned();
            }
            PointerTarget::Text { data, offset } => {
                let data_len = data.chars().count();
                let offset = (*offset).min(data_len);
                self.selection_text = data
                    .chars()
                    .skip(offset)
                    .take(config::LOOKUP_LENGTH)
                    .collect();
                self.range = Some(TextRange { offset, data_len });
            }
            // keep the previous selection
            PointerTarget::Image { .. } | PointerTarget::Other => {}
        }
    }

    fn show_result(
        &mut self,
        word: &str,
        url: &str,
        result: &[DictEntry],
        page: &impl Page,
    ) -> Vec<Effect> {
        if url != self.url || !self.is_top_frame {
            return vec![];
        }
        let Some(html) = popup::render_results(result, self.status.show_translation) else {
            let mut effects = self.clear_highlight();
            effects.push(Effect::HidePopup);
            return effects;
        };

        let mut effects = self.highlight(word, page);
        let viewport = page.viewport();
        let size = page.measure_popup(&html, popup::max_width_for(&viewport));
        let placement = popup::place_popup(&viewport, self.pointer, size);
        effects.push(Effect::ShowPopup { html, placement });
        effects
    }

    fn update_status(&mut self, status: Status) -> Vec<Effect> {
        log::debug!("status update: {status:?}");
        self.status = status;
        if self.status.enabled {
            vec![]
        } else {
            vec![Effect::HidePopup]
        }
    }

    fn highlight(&mut self, word: &str, page: &impl Page) -> Vec<Effect> {
        if !self.status.highlight_text || self.mouse_down {
            return vec![];
        }
        let Some(range) = self.range else {
            return vec![];
        };
        if !self.highlighted && page.has_selection() {
            return vec![];
        }
        self.highlighted = true;
        vec![Effect::Highlight {
            start: range.offset,
            end: range.data_len.min(range.offset + word.chars().count()),
        }]
    }

    fn clear_highlight(&mut self) -> Vec<Effect> {
        if !self.status.highlight_text || !self.highlighted {
            return vec![];
        }
        self.highlighted = false;
        vec![Effect::ClearHighlight]
    }
}
