//! # Almuraqib - attendance lookup
//!
//! A command-line client for looking up a worker's monthly attendance by
//! mobile number. It fetches the month from the attendance service, derives
//! the summary figures and renders the rows as a table or as cards, with
//! free-text remarks translated into the chosen language.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use almuraqib::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
