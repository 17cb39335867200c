//! XML response decoding

pub mod feed;

pub use feed::{parse_feed, xml_to_json};
