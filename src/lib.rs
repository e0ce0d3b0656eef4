// src/lib.rs

#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod html;
pub mod normalize;
pub mod progress;
pub mod runner;
pub mod select;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
