pub mod answer;
pub mod app;
pub mod config;
pub mod data;
pub mod model;
pub mod presenter;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::{Event, Key, Trainer};
pub use config::TrainerConfig;
pub use ui::TrainerApp;
