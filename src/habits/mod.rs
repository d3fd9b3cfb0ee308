//! # Habits Module
//!
//! This module handles the habit registry:
//! - Habit CRUD operations (create, list, update)
//! - Soft-archive lifecycle (archive is one-way; completions are kept)
//! - Ownership checks scoped to the authenticated user

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::habits_routes;
