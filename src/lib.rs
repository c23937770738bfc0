//! Surfalloc decides, at flush time, which physical GPU surface backs each surface proxy.
//!
//! Proxies are logical placeholders recorded while a frame's ops are built. Once the op DAG is
//! linearized, every proxy has an inclusive usage interval in op-index space. The allocator
//! sweeps those intervals in start order and recycles the resources of intervals that have
//! ended into later ones with the same scratch key, creating new resources through a
//! [`ResourceProvider`] only when nothing pooled fits.
//!
//! # Flow
//!
//! 1. **Record**: `inc_ops` once per op, `add_interval` / `add_interval_at_cur_op` per proxy use
//! 2. **Assign**: `assign(&mut provider) -> Assignment<R>` (exactly once)
//! 3. **Bind**: look each proxy up in the [`Assignment`] to find its resource
//!
//! The crate does not linearize ops and does not allocate GPU memory itself.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alloc;
mod foundation;
mod interval;
mod pool;
mod resource;

pub use alloc::allocator::ResourceAllocator;
pub use alloc::assignment::{AssignStats, Assignment, Resolution, ResourceSlot};
pub use alloc::dump::{AllocatorDump, IntervalDump, NodeStats};
pub use alloc::opts::AllocatorOpts;
pub use foundation::core::{OpIndex, OpRange, ProxyId};
pub use foundation::error::{AllocError, AllocResult};
pub use pool::free_pool::FreePoolStats;
pub use resource::key::{PixelFormat, SURFACE_KEY_DOMAIN, ShapeKey, ShapeKeyBuilder, SurfaceDesc};
pub use resource::provider::{ProxyDesc, ResourceProvider, SurfaceProxy};
