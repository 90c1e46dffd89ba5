//! Utility modules
//!
//! Provides logging initialization for hosts without their own subscriber.

pub mod logging;

pub use logging::init_logging;
