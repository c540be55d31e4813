//! Library crate for cw-careers.
//!
//! This crate exposes the building blocks of the careers TUI:
//! - Candidate records and the registration draft (`model`)
//! - Draft validation (`validation`) and directory search (`search`)
//! - The careers REST client (`api`)
//! - Application state, controllers and the update loop (`app`)
//! - UI rendering (`ui`) and headless commands (`cli`)
//!
//! It is used by the `cw-careers` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod search;
pub mod ui;
pub mod validation;

/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
