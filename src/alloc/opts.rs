use crate::foundation::error::{AllocError, AllocResult};
use crate::pool::free_pool::FreePoolOpts;

/// Allocator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AllocatorOpts {
    /// Hand expired resources to later intervals with a matching scratch key. When false every
    /// proxy gets a freshly created resource.
    pub reuse_resources: bool,
    /// Maximum number of released resources retained per scratch key.
    pub max_pooled_per_key: usize,
}

impl Default for AllocatorOpts {
    fn default() -> Self {
        Self {
            reuse_resources: true,
            max_pooled_per_key: 16,
        }
    }
}

impl AllocatorOpts {
    /// Parses options from JSON. Missing fields take their defaults; unknown fields are errors.
    pub fn from_json(s: &str) -> AllocResult<Self> {
        serde_json::from_str(s).map_err(|e| AllocError::serde(format!("allocator opts: {e}")))
    }

    pub(crate) fn pool_opts(self) -> FreePoolOpts {
        FreePoolOpts {
            max_per_key: self.max_pooled_per_key,
        }
    }
}
