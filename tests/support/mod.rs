#![allow(dead_code)]

use surfalloc::{
    AllocError, AllocResult, OpIndex, PixelFormat, ProxyDesc, ProxyId, ResourceAllocator,
    ResourceProvider, SurfaceDesc,
};

/// Stand-in for a GPU surface: remembers which creation call produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeSurface {
    pub serial: u32,
    pub desc: SurfaceDesc,
}

/// Provider that counts creation calls and fails on chosen call numbers (0-based).
#[derive(Debug, Default)]
pub struct FakeProvider {
    pub calls: u32,
    pub fail_calls: Vec<u32>,
    pub requested: Vec<ProxyId>,
}

impl FakeProvider {
    pub fn failing_on(calls: &[u32]) -> Self {
        Self {
            fail_calls: calls.to_vec(),
            ..Self::default()
        }
    }
}

impl ResourceProvider for FakeProvider {
    type Proxy = ProxyDesc;
    type Resource = FakeSurface;

    fn create_resource(&mut self, proxy: &ProxyDesc) -> AllocResult<FakeSurface> {
        let serial = self.calls;
        self.calls += 1;
        self.requested.push(proxy.id);
        if self.fail_calls.contains(&serial) {
            return Err(AllocError::creation(format!(
                "device out of memory creating {}x{}",
                proxy.desc.width, proxy.desc.height
            )));
        }
        Ok(FakeSurface {
            serial,
            desc: proxy.desc,
        })
    }
}

pub fn rgba(w: u32, h: u32) -> SurfaceDesc {
    SurfaceDesc::new(w, h, PixelFormat::Rgba8Unorm).unwrap()
}

pub fn alpha(w: u32, h: u32) -> SurfaceDesc {
    SurfaceDesc::new(w, h, PixelFormat::Alpha8).unwrap()
}

pub fn proxy(id: u32, desc: SurfaceDesc) -> ProxyDesc {
    ProxyDesc::new(ProxyId(id), desc)
}

/// Advances the cursor until `op` is the op being recorded.
pub fn seek(alloc: &mut ResourceAllocator<ProxyDesc>, op: u32) {
    while alloc.cur_op() < OpIndex(op) {
        alloc.inc_ops();
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
