mod environment;
mod scaffold_settings;
mod settings;

pub use environment::Environment;
pub use scaffold_settings::ScaffoldSettings;
pub use settings::{
    LoggingSettings, PollingSettings, ProviderSettings, ServerSettings, Settings, SettingsError,
};
