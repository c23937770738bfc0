use smallvec::SmallVec;

/// Nodes stored inline before the arena spills to the heap. Most flushes stay below this.
pub(crate) const INLINE_NODES: usize = 12;

/// Generation-checked handle into a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug)]
enum SlotState<T> {
    Live(T),
    Retired { next_free: Option<u32> },
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    state: SlotState<T>,
}

/// Bump-style slab with an intrusive free list of retired slots.
///
/// New nodes take the most recently retired slot when one exists, otherwise they are appended.
/// Slots are never released back to the allocator; a retired slot only changes generation so
/// outstanding handles to it stop resolving.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: SmallVec<[Slot<T>; INLINE_NODES]>,
    free_head: Option<u32>,
    live: usize,
    retired: usize,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: SmallVec::new(),
            free_head: None,
            live: 0,
            retired: 0,
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        if let Some(index) = self.free_head
            && let Some(slot) = self.slots.get_mut(index as usize)
            && let SlotState::Retired { next_free } = slot.state
        {
            self.free_head = next_free;
            slot.state = SlotState::Live(value);
            self.retired -= 1;
            self.live += 1;
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            state: SlotState::Live(value),
        });
        self.live += 1;
        NodeId {
            index,
            generation: 0,
        }
    }

    /// Moves a live node onto the free list and hands back its value.
    pub(crate) fn retire(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation || !matches!(slot.state, SlotState::Live(_)) {
            return None;
        }

        let prev = std::mem::replace(
            &mut slot.state,
            SlotState::Retired {
                next_free: self.free_head,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(id.index);
        self.live -= 1;
        self.retired += 1;

        match prev {
            SlotState::Live(value) => Some(value),
            SlotState::Retired { .. } => None,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        let slot = self.slots.get(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        match &slot.state {
            SlotState::Live(v) => Some(v),
            SlotState::Retired { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        match &mut slot.state {
            SlotState::Live(v) => Some(v),
            SlotState::Retired { .. } => None,
        }
    }

    pub(crate) fn live(&self) -> usize {
        self.live
    }

    pub(crate) fn retired(&self) -> usize {
        self.retired
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// True once the node count outgrew the inline storage.
    pub(crate) fn spilled(&self) -> bool {
        self.slots.spilled()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interval/arena.rs"]
mod tests;
