//! Permission checker trait definition.

use crate::errors::DeviceSearchError;
use crate::types::DeviceObject;

/// Host permission system, consulted per hit on the device search catalog path.
pub trait PermissionChecker: Send + Sync {
    /// Returns whether the current user holds `permission` on `object`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` / `Ok(false)` - The outcome of the check
    /// * `Err(DeviceSearchError)` - If the check could not be evaluated
    fn check_permission(
        &self,
        permission: &str,
        object: &DeviceObject,
    ) -> Result<bool, DeviceSearchError>;
}
