//! Search result wrapper around a single catalog hit.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::errors::DeviceSearchError;
use crate::interfaces::{CatalogBrain, SearchResultItem};

/// A device search result.
///
/// Wraps exactly one catalog brain and projects it onto the host's result
/// contract. `url`, `category`, `excerpt` and `popout` read from the brain
/// alone. `icon_template` and `icon` load the underlying device on every call;
/// nothing is cached, so callers rendering icons should call one of them once
/// per result.
#[derive(Clone)]
pub struct DeviceSearchResult {
    brain: Arc<dyn CatalogBrain>,
}

impl DeviceSearchResult {
    /// Wrap a catalog hit. Does not load the device.
    pub fn new(brain: Arc<dyn CatalogBrain>) -> Self {
        Self { brain }
    }

    /// The wrapped catalog hit.
    pub fn brain(&self) -> &Arc<dyn CatalogBrain> {
        &self.brain
    }

    pub fn url(&self) -> &str {
        self.brain.path()
    }

    pub fn category(&self) -> &str {
        self.brain.meta_type()
    }

    pub fn excerpt(&self) -> &str {
        self.brain.id()
    }

    /// Image markup for the device icon.
    ///
    /// Loads the device to read its icon URL.
    pub fn icon_template(&self) -> Result<String, DeviceSearchError> {
        trace!(path = %self.brain.path(), "Loading device for icon");
        let device = self.brain.get_object()?;
        Ok(format!("<img src='{}' />", device.z_icon))
    }

    /// Same markup as `icon_template`, loaded the same way.
    pub fn icon(&self) -> Result<String, DeviceSearchError> {
        self.icon_template()
    }

    pub fn popout(&self) -> bool {
        false
    }
}

impl SearchResultItem for DeviceSearchResult {
    fn url(&self) -> &str {
        DeviceSearchResult::url(self)
    }

    fn category(&self) -> &str {
        DeviceSearchResult::category(self)
    }

    fn excerpt(&self) -> &str {
        DeviceSearchResult::excerpt(self)
    }

    fn icon_template(&self) -> Result<String, DeviceSearchError> {
        DeviceSearchResult::icon_template(self)
    }

    fn icon(&self) -> Result<String, DeviceSearchError> {
        DeviceSearchResult::icon(self)
    }

    fn popout(&self) -> bool {
        DeviceSearchResult::popout(self)
    }
}

impl fmt::Debug for DeviceSearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceSearchResult")
            .field("url", &self.url())
            .field("category", &self.category())
            .field("excerpt", &self.excerpt())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeviceObject;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Brain that counts how often its device is loaded.
    struct CountingBrain {
        path: String,
        id: String,
        icon: String,
        loads: AtomicUsize,
        fail_load: bool,
    }

    impl CountingBrain {
        fn new(id: &str, icon: &str) -> Self {
            Self {
                path: format!("/zport/dmd/Devices/Server/devices/{}", id),
                id: id.to_string(),
                icon: icon.to_string(),
                loads: AtomicUsize::new(0),
                fail_load: false,
            }
        }

        fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl CatalogBrain for CountingBrain {
        fn path(&self) -> &str {
            &self.path
        }

        fn meta_type(&self) -> &str {
            "Device"
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn get_object(&self) -> Result<DeviceObject, DeviceSearchError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail_load {
                return Err(DeviceSearchError::object_load("Mock failure"));
            }
            Ok(DeviceObject {
                id: self.id.clone(),
                path: self.path.clone(),
                z_icon: self.icon.clone(),
            })
        }
    }

    #[test]
    fn test_accessors_do_not_load_device() {
        let brain = Arc::new(CountingBrain::new("router1", "/img/router.png"));
        let result = DeviceSearchResult::new(brain.clone());

        assert_eq!(result.url(), "/zport/dmd/Devices/Server/devices/router1");
        assert_eq!(result.category(), "Device");
        assert_eq!(result.excerpt(), "router1");
        assert!(!result.popout());
        let _ = format!("{:?}", result);

        assert_eq!(brain.loads(), 0);
    }

    #[test]
    fn test_icon_matches_icon_template() {
        let brain = Arc::new(CountingBrain::new("router1", "/img/router.png"));
        let result = DeviceSearchResult::new(brain.clone());

        let template = result.icon_template().unwrap();
        let icon = result.icon().unwrap();

        assert_eq!(template, "<img src='/img/router.png' />");
        assert_eq!(icon.as_bytes(), template.as_bytes());
        // No caching: one load per call
        assert_eq!(brain.loads(), 2);
    }

    #[test]
    fn test_icon_load_failure_propagates() {
        let mut brain = CountingBrain::new("router1", "/img/router.png");
        brain.fail_load = true;
        let result = DeviceSearchResult::new(Arc::new(brain));

        assert!(matches!(
            result.icon(),
            Err(DeviceSearchError::ObjectLoadError(_))
        ));
    }

    #[test]
    fn test_trait_object_delegates() {
        let brain = Arc::new(CountingBrain::new("sw1", "/img/switch.png"));
        let result = DeviceSearchResult::new(brain.clone());
        let item: &dyn SearchResultItem = &result;

        assert_eq!(item.url(), result.url());
        assert_eq!(item.excerpt(), "sw1");
        assert_eq!(item.icon().unwrap(), "<img src='/img/switch.png' />");
        assert!(!item.popout());
        assert_eq!(brain.loads(), 1);
    }
}
