pub mod config;
pub mod error;
pub mod types;

pub use config::{ArtifactConfig, ServerConfig, SpamFilterConfig};
pub use error::{Result, SmsError};
pub use types::{Label, Verdict};
