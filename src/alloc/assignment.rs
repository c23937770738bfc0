use crate::foundation::core::ProxyId;
use crate::foundation::error::AllocError;
use crate::pool::free_pool::FreePoolStats;
use std::collections::HashMap;

/// Index of a resource in [`Assignment::resources`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ResourceSlot(pub u32);

/// How one proxy was resolved.
#[derive(Debug)]
pub enum Resolution {
    /// Backed by the resource in this slot.
    Resolved(ResourceSlot),
    /// The provider could not create a resource; the proxy has no backing this flush.
    Failed(AllocError),
}

impl Resolution {
    /// Slot of the backing resource, `None` for a failed proxy.
    pub fn slot(&self) -> Option<ResourceSlot> {
        match self {
            Self::Resolved(slot) => Some(*slot),
            Self::Failed(_) => None,
        }
    }
}

/// Counters for one `assign` pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AssignStats {
    /// Proxies visited, resolved or failed.
    pub intervals: usize,
    /// Resources created through the provider.
    pub created: usize,
    /// Proxies backed by a pooled resource.
    pub reused: usize,
    /// Proxies the provider could not back.
    pub failed: usize,
    /// Peak size of the active list.
    pub max_active: usize,
    /// Free pool counters at the end of the pass.
    pub pool: FreePoolStats,
}

/// Output of `ResourceAllocator::assign`: every created resource plus the binding of each proxy.
///
/// A resource handed to several proxies over the flush (through the free pool) appears once in
/// `resources` and is referenced by several slots.
#[derive(Debug)]
pub struct Assignment<R> {
    pub(crate) resources: Vec<R>,
    pub(crate) resolutions: HashMap<ProxyId, Resolution>,
    pub(crate) stats: AssignStats,
}

impl<R> Assignment<R> {
    pub(crate) fn new() -> Self {
        Self {
            resources: Vec::new(),
            resolutions: HashMap::new(),
            stats: AssignStats::default(),
        }
    }

    pub(crate) fn push_resource(&mut self, resource: R) -> ResourceSlot {
        let slot = ResourceSlot(self.resources.len() as u32);
        self.resources.push(resource);
        slot
    }

    /// How `proxy` was resolved, `None` if it was never registered.
    pub fn resolution(&self, proxy: ProxyId) -> Option<&Resolution> {
        self.resolutions.get(&proxy)
    }

    /// Slot backing `proxy`, if it resolved.
    pub fn slot_for(&self, proxy: ProxyId) -> Option<ResourceSlot> {
        self.resolutions.get(&proxy).and_then(Resolution::slot)
    }

    /// Resource backing `proxy`, if it resolved.
    pub fn resource_for(&self, proxy: ProxyId) -> Option<&R> {
        self.slot_for(proxy).and_then(|slot| self.resource(slot))
    }

    /// Resource stored in `slot`.
    pub fn resource(&self, slot: ResourceSlot) -> Option<&R> {
        self.resources.get(slot.0 as usize)
    }

    /// Every created resource, indexed by slot.
    pub fn resources(&self) -> &[R] {
        &self.resources
    }

    /// Hands ownership of the created resources back to the caller.
    pub fn into_resources(self) -> Vec<R> {
        self.resources
    }

    /// Proxies the provider failed to back, with the provider's error.
    pub fn failures(&self) -> impl Iterator<Item = (ProxyId, &AllocError)> + '_ {
        self.resolutions.iter().filter_map(|(id, r)| match r {
            Resolution::Failed(e) => Some((*id, e)),
            Resolution::Resolved(_) => None,
        })
    }

    /// True when every registered proxy got a resource.
    pub fn is_complete(&self) -> bool {
        self.stats.failed == 0
    }

    /// Counters for the pass that produced this assignment.
    pub fn stats(&self) -> AssignStats {
        self.stats
    }
}
