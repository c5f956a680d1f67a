//! Catalog query construction.
//!
//! One pure builder per catalog back end. Each turns the keywords of a parsed
//! query into the `Query` tree sent to that catalog; nothing here touches a
//! catalog.

pub mod device_search_catalog;
pub mod model_catalog;
