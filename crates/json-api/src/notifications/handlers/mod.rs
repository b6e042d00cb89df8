//! Notification Handlers

pub(crate) mod email;
pub(crate) mod orders;
pub(crate) mod purchases;
pub(crate) mod users;
