pub mod cedict;
pub mod client;
pub mod config;
pub mod entry;
pub mod message;
pub mod pinyin;
pub mod popup;
