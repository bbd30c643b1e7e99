use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vidveil_core_types::PageType;

/// Full configuration state the evaluator answers queries against.
///
/// The snapshot is replaced wholesale by each successful load and is never
/// partially mutated by the evaluator. Serde field defaults guarantee a
/// partial persisted object deserializes into a fully populated snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SettingsSnapshot {
    /// Per-page-type enablement. `false` disables the hide feature
    /// entirely on that page type.
    pub hide_channels: bool,
    pub hide_home: bool,
    pub hide_explore: bool,
    pub hide_library: bool,
    pub hide_history: bool,
    pub hide_subscriptions: bool,
    /// Universal hide toggle, consulted when no bookmark exists for the
    /// current page.
    pub hide_videos: bool,
    /// Per-page overrides keyed by normalized page path. Exact-path
    /// equality; an entry wins over `hide_videos` unconditionally.
    pub bookmarks: HashMap<String, bool>,
    /// Whether the custom watch threshold below is active.
    pub threshold_enabled: bool,
    /// Minimum watch progress, inclusive [1, 100]. Meaningful only while
    /// `threshold_enabled`; read back unvalidated.
    pub threshold_percent: u8,
}

impl SettingsSnapshot {
    /// Whether the hide feature is enabled on the given page type.
    pub fn page_type_enabled(&self, page_type: PageType) -> bool {
        match page_type {
            PageType::Channel => self.hide_channels,
            PageType::Home => self.hide_home,
            PageType::Explore => self.hide_explore,
            PageType::Library => self.hide_library,
            PageType::History => self.hide_history,
            PageType::Subscriptions => self.hide_subscriptions,
        }
    }
}
