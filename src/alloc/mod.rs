pub(crate) mod allocator;
pub(crate) mod assignment;
pub(crate) mod dump;
pub(crate) mod opts;
