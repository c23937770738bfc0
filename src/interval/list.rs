use crate::foundation::core::{OpIndex, OpRange};
use crate::interval::arena::NodeId;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListOrder {
    ByIncreasingStart,
    ByIncreasingEnd,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    key: OpIndex,
    id: NodeId,
}

/// Interval handles kept sorted by one end of their range.
///
/// The sort key is captured at insertion; callers that change a member's key must `remove` and
/// re-`insert` it. Equal keys keep insertion order.
#[derive(Debug)]
pub(crate) struct IntervalList {
    order: ListOrder,
    entries: VecDeque<Entry>,
}

impl IntervalList {
    pub(crate) fn new(order: ListOrder) -> Self {
        Self {
            order,
            entries: VecDeque::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Head handle and its sort key.
    pub(crate) fn peek_head(&self) -> Option<(OpIndex, NodeId)> {
        self.entries.front().map(|e| (e.key, e.id))
    }

    pub(crate) fn pop_head(&mut self) -> Option<NodeId> {
        self.entries.pop_front().map(|e| e.id)
    }

    pub(crate) fn insert(&mut self, id: NodeId, range: OpRange) {
        let key = match self.order {
            ListOrder::ByIncreasingStart => range.start,
            ListOrder::ByIncreasingEnd => range.end,
        };
        let at = self.entries.partition_point(|e| e.key <= key);
        self.entries.insert(at, Entry { key, id });
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interval/list.rs"]
mod tests;
