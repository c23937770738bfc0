pub(crate) mod free_pool;
