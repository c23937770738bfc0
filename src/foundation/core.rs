use crate::foundation::error::{AllocError, AllocResult};

/// Position of an op in the linearized op sequence of one flush.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct OpIndex(pub u32);

/// Inclusive usage range `[start, end]` in op-index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OpRange {
    /// First op that uses the surface.
    pub start: OpIndex,
    /// Last op that uses the surface.
    pub end: OpIndex, // inclusive
}

impl OpRange {
    /// Validated constructor; rejects `start > end`.
    pub fn new(start: OpIndex, end: OpIndex) -> AllocResult<Self> {
        if start.0 > end.0 {
            return Err(AllocError::validation(format!(
                "OpRange start must be <= end (got {}..={})",
                start.0, end.0
            )));
        }
        Ok(Self { start, end })
    }

    /// Range covering the single op `op`.
    pub fn point(op: OpIndex) -> Self {
        Self { start: op, end: op }
    }

    /// Smallest range covering both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// True when the ranges share at least one op; touching endpoints overlap.
    pub fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True when `op` lies inside the range.
    pub fn contains(self, op: OpIndex) -> bool {
        self.start <= op && op <= self.end
    }

    /// Number of ops covered. Widened to `u64` so `[0, u32::MAX]` fits.
    pub fn len_ops(self) -> u64 {
        u64::from(self.end.0) - u64::from(self.start.0) + 1
    }
}

/// Unique id of a surface proxy; keys the interval hash index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ProxyId(pub u32);

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
