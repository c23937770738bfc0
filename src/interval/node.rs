use crate::alloc::assignment::ResourceSlot;
use crate::foundation::core::{OpRange, ProxyId};
use crate::resource::key::ShapeKey;
use crate::resource::provider::SurfaceProxy;

/// Usage interval of one proxy.
#[derive(Clone, Debug)]
pub(crate) struct Interval<P> {
    pub(crate) proxy: P,
    pub(crate) proxy_id: ProxyId,
    pub(crate) key: Option<ShapeKey>,
    pub(crate) range: OpRange,
    pub(crate) resource: Option<ResourceSlot>,
}

impl<P: SurfaceProxy> Interval<P> {
    pub(crate) fn new(proxy: P, range: OpRange) -> Self {
        let proxy_id = proxy.unique_id();
        let key = proxy.shape_key();
        Self {
            proxy,
            proxy_id,
            key,
            range,
            resource: None,
        }
    }

    /// Grows the range to cover `other`. Returns true when `start` moved earlier.
    pub(crate) fn extend_to(&mut self, other: OpRange) -> bool {
        let widened = self.range.union(other);
        let moved_start = widened.start != self.range.start;
        self.range = widened;
        moved_start
    }
}
