// SPDX-License-Identifier: MPL-2.0
//! Failure scenarios raised by the demo screen.
//!
//! Each scenario surfaces an error through a different normalization path:
//! native conformance, a caller-supplied mapping function, and the generic
//! `Display`/`source()` fallback.

use crate::alert::{AnyLocalizedError, Localize, LocalizedError};
use crate::config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use std::fmt;
use std::io;
use std::path::Path;

/// A failure the demo screen can raise on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// An error type that carries its own display strings.
    Upload,
    /// A crate error from a real failed settings load, enriched by a mapping
    /// function.
    Settings,
    /// A bare error exposing only `Display` and a source.
    Decode,
}

/// Every scenario, in the order the demo screen lists them.
pub const ALL: [Scenario; 3] = [Scenario::Upload, Scenario::Settings, Scenario::Decode];

impl Scenario {
    /// Returns the i18n key for the trigger button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Scenario::Upload => "demo-trigger-upload",
            Scenario::Settings => "demo-trigger-settings",
            Scenario::Decode => "demo-trigger-decode",
        }
    }

    /// Produces the scenario's failure and normalizes it for presentation.
    pub fn raise(self, i18n: &I18n) -> AnyLocalizedError {
        match self {
            Scenario::Upload => {
                AnyLocalizedError::from_localized(&UploadError::ConnectionInterrupted)
            }
            Scenario::Settings => {
                let missing = Path::new("nonexistent/settings.toml");
                match config::load_from_path(missing) {
                    Err(error) => error.to_localized_with(|source: &Error| {
                        Some(
                            AnyLocalizedError::new()
                                .with_description(i18n.tr("scenario-settings-description"))
                                .with_failure_reason(source.to_string())
                                .with_recovery_suggestion(i18n.tr("scenario-settings-recovery")),
                        )
                    }),
                    Ok(_) => AnyLocalizedError::new()
                        .with_description(i18n.tr("scenario-settings-description")),
                }
            }
            Scenario::Decode => DecodeError {
                offset: 1337,
                source: io::Error::new(io::ErrorKind::InvalidData, "unexpected end of stream"),
            }
            .to_localized(),
        }
    }
}

/// Error type demonstrating native conformance to `LocalizedError`.
#[derive(Debug)]
pub enum UploadError {
    ConnectionInterrupted,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::ConnectionInterrupted => write!(f, "upload failed: connection interrupted"),
        }
    }
}

impl std::error::Error for UploadError {}

impl LocalizedError for UploadError {
    fn error_description(&self) -> Option<String> {
        Some("Upload failed".to_string())
    }

    fn failure_reason(&self) -> Option<String> {
        Some("The connection to the server was interrupted before the file was fully sent.".to_string())
    }

    fn help_anchor(&self) -> Option<String> {
        Some("upload-troubleshooting".to_string())
    }

    fn recovery_suggestion(&self) -> Option<String> {
        Some("Check your network connection and retry the upload.".to_string())
    }
}

/// Error type demonstrating the generic fallback: no localized fields, only
/// `Display` and a source chain.
#[derive(Debug)]
pub struct DecodeError {
    offset: u64,
    source: io::Error,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corrupted block at byte {}", self.offset)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_scenario_uses_the_native_fields() {
        let i18n = I18n::default();
        let localized = Scenario::Upload.raise(&i18n);

        assert_eq!(localized.error_description.as_deref(), Some("Upload failed"));
        assert_eq!(
            localized.recovery_suggestion.as_deref(),
            Some("Check your network connection and retry the upload.")
        );
        assert_eq!(
            localized.help_anchor.as_deref(),
            Some("upload-troubleshooting")
        );
    }

    #[test]
    fn settings_scenario_maps_the_crate_error() {
        let i18n = I18n::default();
        let localized = Scenario::Settings.raise(&i18n);

        assert!(localized.error_description.is_some());
        assert!(localized.recovery_suggestion.is_some());
        // The mapping function keeps the raw error text as the reason.
        assert!(localized
            .failure_reason
            .as_deref()
            .is_some_and(|reason| reason.starts_with("I/O Error:")));
    }

    #[test]
    fn decode_scenario_falls_back_to_display_and_source() {
        let i18n = I18n::default();
        let localized = Scenario::Decode.raise(&i18n);

        assert_eq!(
            localized.error_description.as_deref(),
            Some("corrupted block at byte 1337")
        );
        assert_eq!(
            localized.failure_reason.as_deref(),
            Some("unexpected end of stream")
        );
        assert!(localized.recovery_suggestion.is_none());
        assert!(localized.help_anchor.is_none());
    }

    #[test]
    fn every_scenario_has_a_distinct_label_key() {
        let keys: Vec<_> = ALL.iter().map(|s| s.label_key()).collect();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }
}
