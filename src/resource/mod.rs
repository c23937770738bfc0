pub(crate) mod key;
pub(crate) mod provider;
