//! # Application State
//!
//! Focused state types, each passed only to the code that needs it:
//!
//! - [`CartStore`] - the shared cart
//! - [`ConfigState`] - startup configuration

pub mod cart;
pub mod config;

pub use cart::CartStore;
pub use config::ConfigState;
