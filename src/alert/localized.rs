// SPDX-License-Identifier: MPL-2.0
//! Normalization of arbitrary errors into a uniform localized shape.
//!
//! Errors reach the UI from many sources: crate-local enums, I/O failures,
//! third-party library errors. Before anything is shown to the user, all of
//! them are reduced to [`AnyLocalizedError`], a record of four independently
//! optional display strings. Types that already carry user-facing strings
//! implement [`LocalizedError`] and normalize losslessly; everything else goes
//! through a caller-supplied mapping function or falls back to the generic
//! `Display`/`source()` representation.
//!
//! Normalization never fails. The worst case is a record with all four
//! fields absent.

use std::error::Error as StdError;
use std::fmt;

/// Capability trait for errors that already expose user-facing display
/// strings.
///
/// Every method defaults to `None`, so implementors only provide the strings
/// they actually have.
pub trait LocalizedError: StdError {
    /// Primary human-readable message.
    fn error_description(&self) -> Option<String> {
        None
    }

    /// Why the failure happened.
    fn failure_reason(&self) -> Option<String> {
        None
    }

    /// Reference or help-link identifier for further reading.
    fn help_anchor(&self) -> Option<String> {
        None
    }

    /// Actionable remediation text.
    fn recovery_suggestion(&self) -> Option<String> {
        None
    }
}

/// Uniform localized error record.
///
/// The four fields are independently optional and carry no semantics beyond
/// their display role. Values are held transiently in caller-owned state and
/// cleared when the user dismisses the alert presenting them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnyLocalizedError {
    /// Primary human-readable message.
    pub error_description: Option<String>,
    /// Why the failure happened.
    pub failure_reason: Option<String>,
    /// Reference or help-link identifier.
    pub help_anchor: Option<String>,
    /// Actionable remediation text.
    pub recovery_suggestion: Option<String>,
}

impl AnyLocalizedError {
    /// Creates an empty record with all four fields absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary message.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.error_description = Some(description.into());
        self
    }

    /// Sets the failure reason.
    #[must_use]
    pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = Some(reason.into());
        self
    }

    /// Sets the help anchor.
    #[must_use]
    pub fn with_help_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.help_anchor = Some(anchor.into());
        self
    }

    /// Sets the recovery suggestion.
    #[must_use]
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.recovery_suggestion = Some(suggestion.into());
        self
    }

    /// Returns whether all four fields are absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.error_description.is_none()
            && self.failure_reason.is_none()
            && self.help_anchor.is_none()
            && self.recovery_suggestion.is_none()
    }

    /// Adapts an error that already conforms to [`LocalizedError`].
    ///
    /// This is the identity on the four display fields.
    pub fn from_localized<E>(error: &E) -> Self
    where
        E: LocalizedError + ?Sized,
    {
        Self {
            error_description: error.error_description(),
            failure_reason: error.failure_reason(),
            help_anchor: error.help_anchor(),
            recovery_suggestion: error.recovery_suggestion(),
        }
    }

    /// Normalizes an arbitrary error without a mapping function.
    ///
    /// Equivalent to [`from_error_with`](Self::from_error_with) with a map
    /// that never matches.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: StdError + 'static,
    {
        Self::from_error_with(error, |_| None)
    }

    /// Normalizes an arbitrary error, consulting `map` before falling back to
    /// the generic representation.
    ///
    /// Resolution order:
    ///
    /// 1. If `error` is itself an [`AnyLocalizedError`], it is returned
    ///    unchanged.
    /// 2. If `map` returns `Some`, the mapped record wins.
    /// 3. Otherwise the generic representation applies: `Display` output as
    ///    the description, the `source()` rendering as the failure reason.
    pub fn from_error_with<E, F>(error: &E, map: F) -> Self
    where
        E: StdError + 'static,
        F: FnOnce(&E) -> Option<AnyLocalizedError>,
    {
        let erased: &(dyn StdError + 'static) = error;
        if let Some(native) = erased.downcast_ref::<AnyLocalizedError>() {
            return native.clone();
        }
        if let Some(mapped) = map(error) {
            return mapped;
        }
        Self::generic(error)
    }

    /// Normalizes a type-erased error without a mapping function.
    pub fn from_dyn(error: &(dyn StdError + 'static)) -> Self {
        Self::from_dyn_with(error, |_| None)
    }

    /// Normalizes a type-erased error with the same resolution order as
    /// [`from_error_with`](Self::from_error_with).
    ///
    /// Mapping functions probing for concrete types use `downcast_ref` here,
    /// since the static type information is gone.
    pub fn from_dyn_with<F>(error: &(dyn StdError + 'static), map: F) -> Self
    where
        F: FnOnce(&(dyn StdError + 'static)) -> Option<AnyLocalizedError>,
    {
        if let Some(native) = error.downcast_ref::<AnyLocalizedError>() {
            return native.clone();
        }
        if let Some(mapped) = map(error) {
            return mapped;
        }
        Self::generic(error)
    }

    /// Generic representation of an error with no localized fields.
    fn generic<E>(error: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        Self {
            error_description: Some(error.to_string()),
            failure_reason: error.source().map(ToString::to_string),
            help_anchor: None,
            recovery_suggestion: None,
        }
    }
}

impl fmt::Display for AnyLocalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(description) => f.write_str(description),
            None => f.write_str("unidentified error"),
        }
    }
}

impl StdError for AnyLocalizedError {}

impl LocalizedError for AnyLocalizedError {
    fn error_description(&self) -> Option<String> {
        self.error_description.clone()
    }

    fn failure_reason(&self) -> Option<String> {
        self.failure_reason.clone()
    }

    fn help_anchor(&self) -> Option<String> {
        self.help_anchor.clone()
    }

    fn recovery_suggestion(&self) -> Option<String> {
        self.recovery_suggestion.clone()
    }
}

/// Convenience methods callable on any error value.
///
/// Blanket-implemented, so `failure.to_localized()` works wherever a
/// `std::error::Error` is at hand.
pub trait Localize: StdError + Sized + 'static {
    /// Normalizes `self` into an [`AnyLocalizedError`].
    fn to_localized(&self) -> AnyLocalizedError {
        AnyLocalizedError::from_error(self)
    }

    /// Normalizes `self`, consulting `map` before the generic fallback.
    fn to_localized_with<F>(&self, map: F) -> AnyLocalizedError
    where
        F: FnOnce(&Self) -> Option<AnyLocalizedError>,
    {
        AnyLocalizedError::from_error_with(self, map)
    }
}

impl<E: StdError + Sized + 'static> Localize for E {}
