// SPDX-License-Identifier: MPL-2.0
//! `iced_alert` normalizes arbitrary application errors into a uniform,
//! displayable shape and presents that shape as a modal alert in Iced
//! applications.
//!
//! The crate ships two collaborating pieces: the [`alert::AnyLocalizedError`]
//! normalizer, which reduces any error to four optional display strings, and
//! the [`alert::ErrorAlert`] decoration, which overlays a blocking alert on
//! any view while such a value is present in caller-owned state. A small demo
//! application ([`app`]) exercises both end to end and demonstrates
//! internationalization with Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/iced_alert/0.1.0")]

pub mod alert;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
