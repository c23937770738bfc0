use crate::foundation::error::{AllocError, AllocResult};

/// Occupancy of the interval node arena.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct NodeStats {
    /// Nodes holding an interval.
    pub live: usize,
    /// Nodes on the free list.
    pub retired: usize,
    /// Total slots ever allocated.
    pub slots: usize,
    /// Whether the arena outgrew its inline storage.
    pub spilled: bool,
}

/// One registered interval.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct IntervalDump {
    /// Proxy id.
    pub proxy: u32,
    /// First op of the interval.
    pub start: u32,
    /// Last op of the interval, inclusive.
    pub end: u32,
    /// Scratch key hash, absent for proxies that never share their backing.
    pub key_hash: Option<u64>,
}

/// Snapshot of the allocator state, intervals in master-list (increasing start) order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AllocatorDump {
    /// Op cursor at the time of the dump.
    pub num_ops: u32,
    /// Whether `assign` has run.
    pub assigned: bool,
    /// Registered intervals; empty after `assign`.
    pub intervals: Vec<IntervalDump>,
    /// Arena occupancy.
    pub nodes: NodeStats,
}

impl AllocatorDump {
    /// Pretty-printed JSON form of the snapshot.
    pub fn to_json_pretty(&self) -> AllocResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AllocError::serde(e.to_string()))
    }
}
