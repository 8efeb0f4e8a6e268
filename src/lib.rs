//! gifgrid - a reactive GIF browser core
//!
//! Search text and selections go in through [`browser::GifBrowser`]; the
//! display list, detail lookups and navigation commands come out as streams.
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod reactive;
pub mod traits;
