use crate::foundation::core::ProxyId;
use crate::foundation::error::AllocResult;
use crate::resource::key::{ShapeKey, SurfaceDesc};

/// A logical surface whose physical backing is chosen at flush time.
///
/// The allocator keeps a clone of the proxy for as long as its interval lives, so
/// implementations are expected to be cheap handles (ids, `Rc`/`Arc` wrappers, small descs).
pub trait SurfaceProxy: Clone {
    /// Stable id, unique among the proxies of one flush.
    fn unique_id(&self) -> ProxyId;

    /// Scratch key for pool matching. `None` opts the proxy out of sharing: its resource is
    /// always freshly created and never handed back to the free pool.
    fn shape_key(&self) -> Option<ShapeKey>;
}

/// Creates physical resources when the free pool has nothing that matches.
pub trait ResourceProvider {
    /// Proxy type the provider creates resources for.
    type Proxy: SurfaceProxy;
    /// Physical resource handed back to the caller in the [`Assignment`](crate::Assignment).
    type Resource;

    /// Called at most once per proxy, during `assign`. An `Err` marks only that proxy as failed.
    fn create_resource(&mut self, proxy: &Self::Proxy) -> AllocResult<Self::Resource>;
}

/// Plain-data proxy: an id plus the surface it asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProxyDesc {
    /// Proxy id.
    pub id: ProxyId,
    /// Requested surface.
    pub desc: SurfaceDesc,
    /// Whether the backing may be shared through the free pool.
    pub poolable: bool,
}

impl ProxyDesc {
    /// A poolable proxy.
    pub fn new(id: ProxyId, desc: SurfaceDesc) -> Self {
        Self {
            id,
            desc,
            poolable: true,
        }
    }

    /// A proxy whose backing must stay exclusive to it (e.g. uniquely keyed content).
    pub fn exclusive(id: ProxyId, desc: SurfaceDesc) -> Self {
        Self {
            id,
            desc,
            poolable: false,
        }
    }
}

impl SurfaceProxy for ProxyDesc {
    fn unique_id(&self) -> ProxyId {
        self.id
    }

    fn shape_key(&self) -> Option<ShapeKey> {
        self.poolable.then(|| self.desc.shape_key())
    }
}
