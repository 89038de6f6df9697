// SPDX-License-Identifier: MPL-2.0
//! Localization of the application chrome (labels, buttons, notifications).
//!
//! This is distinct from the translation catalog: the catalog lists the
//! languages the user can translate between, while this module localizes
//! the UI itself.

pub mod fluent;

pub use fluent::I18n;
