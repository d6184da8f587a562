//! CLI command handlers

pub mod config;
pub mod features;
pub mod models;
