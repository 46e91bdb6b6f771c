#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod expiry;
pub mod model;
pub mod session;
pub mod store;
pub mod transfer;
pub mod ui;
pub mod views;

pub use config::Config;
pub use error::{CertError, Result};
