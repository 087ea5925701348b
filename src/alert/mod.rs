// SPDX-License-Identifier: MPL-2.0
//! Error normalization and modal alert presentation.
//!
//! This module turns arbitrary application errors into a uniform shape and
//! shows that shape as a blocking alert bound to caller-owned view state.
//!
//! # Components
//!
//! - [`localized`] - The [`LocalizedError`] capability trait, the
//!   [`AnyLocalizedError`] record, and the normalization entry points
//! - [`presenter`] - The [`ErrorAlert`] view decoration and the
//!   [`acknowledge`] write-back helper
//!
//! # Usage
//!
//! ```ignore
//! use iced_alert::alert::{acknowledge, AnyLocalizedError, ErrorAlert, Localize};
//!
//! // Normalize anywhere an error surfaces:
//! state.error = Some(failure.to_localized());
//!
//! // Decorate the screen in `view()`:
//! ErrorAlert::new(state.error.as_ref(), Message::AlertDismissed).view(screen)
//!
//! // Clear the state in `update()` when the dismiss message arrives:
//! acknowledge(&mut state.error);
//! ```

pub mod localized;
pub mod presenter;

pub use localized::{AnyLocalizedError, Localize, LocalizedError};
pub use presenter::{acknowledge, ErrorAlert};
