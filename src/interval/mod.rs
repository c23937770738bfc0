pub(crate) mod arena;
pub(crate) mod list;
pub(crate) mod node;
