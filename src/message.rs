//! Messages exchanged between the page client and the host extension.
//!
//! On the wire a message is `{"name": "...", "message": {...}}`, the name
//! selects the variant.

use serde::{Deserialize, Serialize};

use crate::config::Status;
use crate::entry::DictEntry;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "name", content = "message", rename_all = "camelCase")]
pub enum Message {
    /// client -> host: look up the text under the pointer
    LookupWord { word: String, url: String },
    /// client -> host: ask for the current options, sent once on startup
    QueryStatus,
    /// host -> client: lookup result, `word` is the matched prefix of the request
    ShowResult {
        word: String,
        url: String,
        result: Vec<DictEntry>,
    },
    /// host -> client: options changed
    Status(Status),
}
