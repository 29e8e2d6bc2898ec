pub mod settings;

pub use settings::{AppSettings, GamificationSettings, Settings};
