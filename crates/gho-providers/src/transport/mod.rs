//! DataTransport implementations
//!
//! | Transport | Use |
//! |-----------|-----|
//! | [`ReqwestTransport`] | Production HTTP access |
//! | [`NullTransport`] | Offline development, always empty |
//! | [`StaticTransport`] | Tests, canned response with request log |

pub mod fixed;
pub mod null;
pub mod reqwest;

pub use fixed::{RecordedRequest, StaticTransport};
pub use null::NullTransport;
pub use self::reqwest::ReqwestTransport;
