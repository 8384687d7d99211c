/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, Mood, Notification) and their
/// validation rules, along with the user-facing settings types. These types
/// represent the fundamental concepts in the wellness tracking system.

pub mod habit;
pub mod mood;
pub mod notification;
pub mod settings;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use mood::*;
pub use notification::*;
pub use settings::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Aggregation error: {0}")]
    Aggregation(String),
}
