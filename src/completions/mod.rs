//! # Completions Module
//!
//! This module owns completion facts - "habit H was done on calendar date D":
//! - Symmetric toggle (mark / unmark) keyed by (habit_id, completed_date)
//! - Range and per-habit date queries consumed by the stats module
//!
//! Dates are plain YYYY-MM-DD strings throughout; there is no time-of-day
//! and no timezone attached to a completion.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::completions_routes;
