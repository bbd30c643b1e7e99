pub mod defaults;
pub mod errors;
pub mod evaluator;
pub mod model;

pub use defaults::default_snapshot;
pub use errors::SettingsError;
pub use evaluator::Settings;
pub use model::SettingsSnapshot;
