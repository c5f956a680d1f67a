//! Error types for the device search provider.
//!
//! This module provides the single error type shared by the provider and every
//! collaborator trait it calls.

mod device_search_error;

pub use device_search_error::DeviceSearchError;
