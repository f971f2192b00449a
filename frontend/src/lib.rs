pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod services;

pub use app::{App, AppProps};
pub use config::AppConfig;
