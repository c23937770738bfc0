use crate::alloc::assignment::{Assignment, Resolution, ResourceSlot};
use crate::alloc::dump::{AllocatorDump, IntervalDump, NodeStats};
use crate::alloc::opts::AllocatorOpts;
use crate::foundation::core::{OpIndex, OpRange, ProxyId};
use crate::foundation::error::{AllocError, AllocResult};
use crate::interval::arena::{NodeArena, NodeId};
use crate::interval::list::{IntervalList, ListOrder};
use crate::interval::node::Interval;
use crate::pool::free_pool::FreePool;
use crate::resource::provider::{ResourceProvider, SurfaceProxy};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Assigns physical resources to proxies at flush time from their op-index usage intervals.
///
/// Usage is two-phase. While the caller walks its linearized ops it calls [`inc_ops`] once per
/// op and registers every proxy the op touches with [`add_interval`] (ranged, e.g. render
/// targets) or [`add_interval_at_cur_op`] (single op, e.g. sampled textures). Repeated
/// registrations of one proxy coalesce into a single interval. Then [`assign`] runs once: it
/// walks intervals by increasing start, returns the resources of intervals that ended before
/// the current start to a free pool keyed by scratch key, and backs the current proxy with a
/// pooled resource or a freshly created one.
///
/// [`inc_ops`]: ResourceAllocator::inc_ops
/// [`add_interval`]: ResourceAllocator::add_interval
/// [`add_interval_at_cur_op`]: ResourceAllocator::add_interval_at_cur_op
/// [`assign`]: ResourceAllocator::assign
#[derive(Debug)]
pub struct ResourceAllocator<P> {
    opts: AllocatorOpts,
    nodes: NodeArena<Interval<P>>,
    by_proxy: HashMap<ProxyId, NodeId>,
    // sorted by increasing start
    intervals: IntervalList,
    // live intervals during assign, sorted by increasing end
    active: IntervalList,
    num_ops: u32,
    assigned: bool,
}

impl<P: SurfaceProxy> Default for ResourceAllocator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SurfaceProxy> ResourceAllocator<P> {
    /// Creates an allocator with default options.
    pub fn new() -> Self {
        Self::with_opts(AllocatorOpts::default())
    }

    /// Creates an allocator with the given options.
    pub fn with_opts(opts: AllocatorOpts) -> Self {
        Self {
            opts,
            nodes: NodeArena::new(),
            by_proxy: HashMap::new(),
            intervals: IntervalList::new(ListOrder::ByIncreasingStart),
            active: IntervalList::new(ListOrder::ByIncreasingEnd),
            num_ops: 0,
            assigned: false,
        }
    }

    /// Options this allocator was built with.
    pub fn opts(&self) -> AllocatorOpts {
        self.opts
    }

    /// Index of the op currently being recorded.
    pub fn cur_op(&self) -> OpIndex {
        OpIndex(self.num_ops)
    }

    /// Advances the cursor to the next op.
    ///
    /// The cursor stops at `u32::MAX`; recording more ops than that is a caller bug and trips a
    /// debug assertion.
    pub fn inc_ops(&mut self) {
        debug_assert!(self.num_ops < u32::MAX, "op cursor overflow");
        self.num_ops = self.num_ops.saturating_add(1);
    }

    /// Number of ops advanced past so far.
    pub fn num_ops(&self) -> u32 {
        self.num_ops
    }

    /// Registers use of `proxy` over the inclusive range `[start, end]`.
    ///
    /// If the proxy already has an interval it is widened to the union of both ranges.
    /// `end` may not be past [`cur_op`](Self::cur_op).
    pub fn add_interval(&mut self, proxy: &P, start: OpIndex, end: OpIndex) -> AllocResult<()> {
        if self.assigned {
            return Err(AllocError::misuse("add_interval called after assign"));
        }
        if start > end {
            return Err(AllocError::misuse(format!(
                "interval start {} is after end {}",
                start.0, end.0
            )));
        }
        let range = OpRange::new(start, end)?;
        if range.end > self.cur_op() {
            return Err(AllocError::misuse(format!(
                "interval end {} is past the current op {}",
                range.end.0, self.num_ops
            )));
        }

        let id = proxy.unique_id();
        if let Some(&node) = self.by_proxy.get(&id)
            && let Some(intvl) = self.nodes.get_mut(node)
        {
            let moved_start = intvl.extend_to(range);
            let widened = intvl.range;
            if moved_start {
                self.intervals.remove(node);
                self.intervals.insert(node, widened);
            }
            trace!(
                proxy = id.0,
                start = widened.start.0,
                end = widened.end.0,
                "extended interval"
            );
            return Ok(());
        }

        let node = self.nodes.insert(Interval::new(proxy.clone(), range));
        self.intervals.insert(node, range);
        self.by_proxy.insert(id, node);
        trace!(proxy = id.0, start = start.0, end = end.0, "added interval");
        Ok(())
    }

    /// Registers use of `proxy` at the current op only.
    pub fn add_interval_at_cur_op(&mut self, proxy: &P) -> AllocResult<()> {
        let op = self.cur_op();
        self.add_interval(proxy, op, op)
    }

    /// Registered range of a proxy. `None` once `assign` has run.
    pub fn interval_for(&self, id: ProxyId) -> Option<OpRange> {
        let node = *self.by_proxy.get(&id)?;
        self.nodes.get(node).map(|intvl| intvl.range)
    }

    /// Number of distinct proxies registered.
    pub fn interval_count(&self) -> usize {
        self.by_proxy.len()
    }

    /// Whether `assign` has already run.
    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// Occupancy of the interval node arena.
    pub fn node_stats(&self) -> NodeStats {
        NodeStats {
            live: self.nodes.live(),
            retired: self.nodes.retired(),
            slots: self.nodes.slot_count(),
            spilled: self.nodes.spilled(),
        }
    }

    /// Resolves every registered interval to a resource. May run once per allocator.
    ///
    /// A provider failure marks only the affected proxy as [`Resolution::Failed`]; the pass
    /// carries on with the remaining intervals.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn assign<V>(&mut self, provider: &mut V) -> AllocResult<Assignment<V::Resource>>
    where
        V: ResourceProvider<Proxy = P>,
    {
        if self.assigned {
            return Err(AllocError::misuse("assign called more than once"));
        }
        self.assigned = true;

        let mut out = Assignment::new();
        let mut pool = FreePool::new(self.opts.pool_opts());

        while let Some(node) = self.intervals.pop_head() {
            let Some(cur) = self.nodes.get(node) else {
                continue;
            };
            let (proxy_id, range) = (cur.proxy_id, cur.range);

            self.expire(range.start, &mut pool);

            debug_assert!(
                !out.resolutions.contains_key(&proxy_id),
                "proxy {} has more than one interval",
                proxy_id.0
            );
            if let Some(slot) = out.slot_for(proxy_id) {
                self.activate(node, range, slot);
                continue;
            }

            let Some(cur) = self.nodes.get(node) else {
                continue;
            };
            let pooled = match &cur.key {
                Some(key) if self.opts.reuse_resources => pool.take(key),
                _ => None,
            };
            let created = match pooled {
                Some(slot) => {
                    out.stats.reused += 1;
                    Ok(slot)
                }
                None => provider.create_resource(&cur.proxy).map(|resource| {
                    out.stats.created += 1;
                    out.push_resource(resource)
                }),
            };

            match created {
                Ok(slot) => {
                    trace!(
                        proxy = proxy_id.0,
                        slot = slot.0,
                        start = range.start.0,
                        end = range.end.0,
                        "assigned"
                    );
                    out.resolutions
                        .insert(proxy_id, Resolution::Resolved(slot));
                    self.activate(node, range, slot);
                    out.stats.max_active = out.stats.max_active.max(self.active.len());
                }
                Err(err) => {
                    warn!(proxy = proxy_id.0, error = %err, "resource creation failed");
                    out.stats.failed += 1;
                    out.resolutions.insert(proxy_id, Resolution::Failed(err));
                    self.nodes.retire(node);
                }
            }
        }

        // The flush is over; resources still active are not pooled again.
        while let Some(node) = self.active.pop_head() {
            self.nodes.retire(node);
        }

        out.stats.intervals = out.resolutions.len();
        out.stats.pool = pool.stats();
        debug!(
            intervals = out.stats.intervals,
            created = out.stats.created,
            reused = out.stats.reused,
            failed = out.stats.failed,
            max_active = out.stats.max_active,
            pooled = pool.len(),
            pool_keys = pool.key_count(),
            "assignment complete"
        );
        Ok(out)
    }

    fn activate(&mut self, node: NodeId, range: OpRange, slot: ResourceSlot) {
        if let Some(intvl) = self.nodes.get_mut(node) {
            intvl.resource = Some(slot);
        }
        self.active.insert(node, range);
    }

    /// Retires every active interval that ends before `cur_start` and pools its resource.
    fn expire(&mut self, cur_start: OpIndex, pool: &mut FreePool<ResourceSlot>) {
        while let Some((end, node)) = self.active.peek_head()
            && end < cur_start
        {
            self.active.pop_head();
            let Some(intvl) = self.nodes.retire(node) else {
                continue;
            };
            if self.opts.reuse_resources
                && let (Some(key), Some(slot)) = (&intvl.key, intvl.resource)
            {
                pool.release(key, slot);
            }
            trace!(proxy = intvl.proxy_id.0, end = end.0, "expired");
        }
    }

    /// Snapshot of registered intervals and node usage.
    pub fn dump(&self) -> AllocatorDump {
        let intervals = self
            .intervals
            .iter()
            .filter_map(|node| self.nodes.get(node))
            .map(|intvl| IntervalDump {
                proxy: intvl.proxy_id.0,
                start: intvl.range.start.0,
                end: intvl.range.end.0,
                key_hash: intvl.key.as_ref().map(|k| k.hash_value()),
            })
            .collect();

        AllocatorDump {
            num_ops: self.num_ops,
            assigned: self.assigned,
            intervals,
            nodes: self.node_stats(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/alloc/allocator.rs"]
mod tests;
