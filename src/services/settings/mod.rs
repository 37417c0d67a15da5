// Settings service module
// Grid configuration persisted as TOML

mod service;

pub use service::SettingsService;
