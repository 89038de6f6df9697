// SPDX-License-Identifier: MPL-2.0
//! `iced_lingo` is a lightweight desktop translation client built with the
//! Iced GUI framework.
//!
//! It wraps a third-party translation provider in a two-screen interface
//! and demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod translate;
pub mod ui;
