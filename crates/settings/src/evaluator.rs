use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::watch;
use tracing::debug;

use vidveil_page_classifier::classify;
use vidveil_settings_store::SettingsStore;

use crate::defaults::default_snapshot;
use crate::errors::SettingsError;
use crate::model::SettingsSnapshot;

/// Policy evaluator deciding, for a normalized page path, whether the hide
/// feature is disabled, whether watched videos are hidden, and which watch
/// threshold applies.
///
/// Queries are synchronous reads of the currently installed snapshot;
/// `load` is the only suspension point.
pub struct Settings {
    store: Arc<dyn SettingsStore>,
    state: ArcSwap<SettingsSnapshot>,
    watch_tx: watch::Sender<Arc<SettingsSnapshot>>,
}

impl Settings {
    /// Constructs the evaluator with the default snapshot installed.
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        let initial = Arc::new(default_snapshot());
        let (watch_tx, _watch_rx) = watch::channel(Arc::clone(&initial));
        Self {
            store,
            state: ArcSwap::new(initial),
            watch_tx,
        }
    }

    /// Constructs the evaluator and immediately replaces the defaults with
    /// the persisted configuration.
    pub async fn with_initial_load(store: Arc<dyn SettingsStore>) -> Result<Self, SettingsError> {
        let settings = Self::new(store);
        settings.load().await?;
        Ok(settings)
    }

    /// Reports whether the hide feature is disabled entirely for the page
    /// at `path`.
    ///
    /// A path matching none of the six page types is never ignored,
    /// regardless of the toggles.
    pub fn ignored(&self, path: &str) -> bool {
        let snapshot = self.state.load();
        match classify(path) {
            Some(page_type) => !snapshot.page_type_enabled(page_type),
            None => false,
        }
    }

    /// Reports whether watched videos on the page at `path` should be
    /// hidden. A bookmark for the exact path wins over the universal
    /// toggle unconditionally.
    ///
    /// Does not consult `ignored`; callers check that first and skip
    /// hiding altogether when it is true.
    pub fn hidden(&self, path: &str) -> bool {
        let snapshot = self.state.load();
        match snapshot.bookmarks.get(path) {
            Some(bookmark) => *bookmark,
            None => snapshot.hide_videos,
        }
    }

    /// Minimum watch progress, in [1, 100], for a video to count as
    /// watched. Fixed at 100 while the custom threshold is disabled; the
    /// stored percent is passed through unvalidated otherwise.
    pub fn threshold(&self) -> u8 {
        let snapshot = self.state.load();
        if snapshot.threshold_enabled {
            snapshot.threshold_percent
        } else {
            100
        }
    }

    /// Fetches the persisted configuration merged over the defaults and
    /// installs it as the current snapshot, then notifies subscribers.
    ///
    /// Reads sequenced after `load().await` see the fresh snapshot.
    /// Overlapping loads race: the snapshot ends up holding whichever
    /// response is installed last, with no ordering guarantee by request
    /// order.
    pub async fn load(&self) -> Result<(), SettingsError> {
        let defaults = serde_json::to_value(default_snapshot())?;
        let merged = self.store.get(defaults).await?;
        let snapshot: SettingsSnapshot = serde_json::from_value(merged)?;
        debug!(?snapshot, "settings loaded");

        let snapshot = Arc::new(snapshot);
        self.state.store(Arc::clone(&snapshot));
        let _ = self.watch_tx.send(snapshot);
        Ok(())
    }

    /// The currently installed snapshot.
    pub fn snapshot(&self) -> Arc<SettingsSnapshot> {
        self.state.load_full()
    }

    /// Change notifications, one per installed snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SettingsSnapshot>> {
        self.watch_tx.subscribe()
    }
}
