// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod enrich;
pub mod error;
pub mod event;
pub mod message;
pub mod notify;
pub mod routing;
pub mod runner;
pub mod specs;

pub use error::{FinderError, Result};
