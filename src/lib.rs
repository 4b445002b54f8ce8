pub mod check;
pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod discovery;
pub mod manifest;
pub mod profile;
pub mod render;
pub mod schema;
pub mod service;

pub use anyhow::Result;
