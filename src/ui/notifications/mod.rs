// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications carry an i18n key (plus optional interpolation arguments)
//! rather than resolved text, so the toast renders in the active locale at
//! display time.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
