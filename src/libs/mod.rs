//! Core library modules of the attendance client.
//!
//! - **Data model**: attendance rows and the monthly summary payload
//! - **Calculations**: time-field formatting, break durations, derived metrics
//! - **Translation**: cached translator with an offline fallback dictionary
//! - **Infrastructure**: configuration, data storage, saved preferences, messages
//! - **Presentation**: month picker, table and card rendering

pub mod attendance;
pub mod breaks;
pub mod cache;
pub mod config;
pub mod data_storage;
pub mod fallback;
pub mod formatter;
pub mod locale;
pub mod lookup;
pub mod messages;
pub mod preferences;
pub mod summary;
pub mod translator;
pub mod view;
