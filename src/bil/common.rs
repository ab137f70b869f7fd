//! Common utilities module
//!
//! This module contains the error type and the progress observer shared by the
//! classification and scanning stages.

pub mod error;
pub mod observer;

pub use error::{BilError, Result};
pub use observer::{ProgressObserver, TracingObserver};
