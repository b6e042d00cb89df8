//! Cart Handlers

pub(crate) mod active;
pub(crate) mod complete;
pub(crate) mod create;
pub(crate) mod get;
