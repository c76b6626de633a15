use serde::{Deserialize, Serialize};

use crate::config;
use crate::pinyin;

/// One result row returned by the lookup service for a word
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DictEntry {
    pub hanzi: String,
    /// pinyin with tone numbers, e.g. "ni3 hao3"
    pub pinyin: String,
    pub translation: String,
}

impl DictEntry {
    pub fn new(hanzi: &str, pinyin: &str, translation: &str) -> Self {
        DictEntry {
            hanzi: hanzi.to_owned(),
            pinyin: pinyin.to_owned(),
            translation: translation.to_owned(),
        }
    }

    pub fn pinyin_marks(&self) -> String {
        pinyin::convert(&self.pinyin)
    }
}

/// Headword as shown in the popup, traditional and simplified form only differ for some words
pub fn format_hanzi(trad: &str, simp: &str) -> String {
    if trad == simp {
        trad.to_owned()
    } else {
        format!("{}{}{}", trad, config::WORD_SEP, simp)
    }
}
