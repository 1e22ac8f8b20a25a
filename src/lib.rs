pub mod app;
pub mod boot;
pub mod cli;
pub mod config;
pub mod events;
pub mod skin;
pub mod storage;
pub mod ui;

pub use app::App;
