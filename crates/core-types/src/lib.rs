use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shared error type for the vidveil crates.
#[derive(Debug, Error, Clone)]
pub enum VidveilError {
    #[error("{message}")]
    Message { message: String },
}

impl VidveilError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// The six fixed categories a normalized page path can be classified into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PageType {
    Channel,
    Home,
    Explore,
    Library,
    History,
    Subscriptions,
}

impl PageType {
    /// All page types, in the fixed classification order.
    pub const ALL: [PageType; 6] = [
        PageType::Channel,
        PageType::Home,
        PageType::Explore,
        PageType::Library,
        PageType::History,
        PageType::Subscriptions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Channel => "channel",
            PageType::Home => "home",
            PageType::Explore => "explore",
            PageType::Library => "library",
            PageType::History => "history",
            PageType::Subscriptions => "subscriptions",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
