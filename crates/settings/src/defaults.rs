use std::collections::HashMap;

use crate::model::SettingsSnapshot;

/// The fixed default state: the feature is active everywhere, watched
/// videos are hidden, and only fully-watched videos count.
pub fn default_snapshot() -> SettingsSnapshot {
    SettingsSnapshot {
        hide_channels: true,
        hide_home: true,
        hide_explore: true,
        hide_library: true,
        hide_history: true,
        hide_subscriptions: true,
        hide_videos: true,
        bookmarks: HashMap::new(),
        threshold_enabled: false,
        threshold_percent: 100,
    }
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        default_snapshot()
    }
}
