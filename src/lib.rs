//! carport — terminal admin console for a vehicle inventory REST service.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ui;
