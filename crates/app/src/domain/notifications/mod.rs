//! Notifications
//!
//! Composes purchase confirmations and plain emails and hands them to a
//! [`MailSender`]. Delivery is attempted once; failures are returned to the
//! caller.

pub mod errors;
pub mod messages;
pub mod models;
pub mod sender;
pub mod service;
pub mod validation;

pub use errors::NotificationError;
pub use sender::{HttpMailSender, LogMailSender, MailSender, MailSenderError};
pub use service::*;
