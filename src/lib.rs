pub mod access;
pub mod api;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod session;
pub mod ui;
