//! # Error Types
//!
//! Domain-specific error types for shelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shelf-core errors (this file)                                         │
//! │  └── CoreError        - Malformed domain values                        │
//! │                                                                         │
//! │  shelf-catalog errors (separate crate)                                 │
//! │  └── CatalogError     - Catalog fetch failures                         │
//! │                                                                         │
//! │  shelf-app errors                                                      │
//! │  └── AppError         - What the UI shell sees                         │
//! │                                                                         │
//! │  Flow: CoreError → CatalogError::Decode → AppError → Alert             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations never fail; the only fallible core operation is turning
//! a decimal price from the wire into [`Money`](crate::Money).

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A price could not be represented as whole cents.
    ///
    /// ## When This Occurs
    /// - The catalog sent a negative price
    /// - The catalog sent `NaN` / infinity, or a value too large for i64 cents
    #[error("Invalid price: {value}")]
    InvalidPrice { value: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
