pub mod config;
pub mod email;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod validation;

use crate::config::Config;
use crate::email::EmailValidator;
use crate::validation::signup::SignUpValidation;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub signup: SignUpValidation,
}

impl AppState {
    pub fn new(config: Config, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            config: Arc::new(config),
            signup: SignUpValidation::new(email_validator),
        }
    }
}

pub fn init_tracing(config: &Config) {
    let level_filter = match config.log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    unsafe {
        std::env::set_var("RUST_LOG", level_filter);
    }

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .init();
        },
        _ => {
            tracing_subscriber::fmt()
                .init();
        }
    }
}
