// SPDX-License-Identifier: MPL-2.0
//! Modal alert presentation bound to caller-owned error state.
//!
//! [`ErrorAlert`] decorates any view with a blocking alert that appears while
//! an [`AnyLocalizedError`] is present in the caller's state and disappears
//! when the caller clears it. The decoration is stateless: it reads the bound
//! value at render time and emits a caller-supplied message when the single
//! dismiss action fires. The caller's update loop routes that message to
//! [`acknowledge`], the only path that writes the state back to absent.
//!
//! # Usage
//!
//! ```ignore
//! // In view():
//! ErrorAlert::new(self.error.as_ref(), Message::AlertDismissed)
//!     .labels(i18n.tr("alert-default-title"), i18n.tr("alert-dismiss"), i18n.tr("alert-fallback-message"))
//!     .view(screen)
//!
//! // In update():
//! Message::AlertDismissed => acknowledge(&mut self.error),
//! ```

use super::localized::AnyLocalizedError;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, center, opaque, stack, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Message shown when the bound error carries neither a recovery suggestion
/// nor a failure reason.
pub const FALLBACK_MESSAGE: &str = "Try again later.";

const DEFAULT_TITLE: &str = "Error";
const DEFAULT_DISMISS_LABEL: &str = "OK";

/// Modal alert decoration for a view.
///
/// Holds a reference into the caller-owned binding cell for one render pass.
/// When the cell is absent the wrapped content is returned unchanged; when it
/// is present the content is rendered beneath a dimmed, interaction-blocking
/// backdrop with the alert card centered on top.
#[derive(Debug, Clone)]
pub struct ErrorAlert<'a, Message> {
    error: Option<&'a AnyLocalizedError>,
    on_dismiss: Message,
    title_label: String,
    dismiss_label: String,
    fallback_message: String,
}

impl<'a, Message: Clone + 'a> ErrorAlert<'a, Message> {
    /// Creates the decoration for the current value of the binding cell.
    ///
    /// `on_dismiss` is emitted when the user activates the alert's single
    /// dismiss action.
    pub fn new(error: Option<&'a AnyLocalizedError>, on_dismiss: Message) -> Self {
        Self {
            error,
            on_dismiss,
            title_label: DEFAULT_TITLE.to_string(),
            dismiss_label: DEFAULT_DISMISS_LABEL.to_string(),
            fallback_message: FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Sets the localized default title, dismiss label, and fallback message.
    #[must_use]
    pub fn labels(
        mut self,
        title: impl Into<String>,
        dismiss: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        self.title_label = title.into();
        self.dismiss_label = dismiss.into();
        self.fallback_message = fallback.into();
        self
    }

    /// Returns whether the alert overlay will be rendered.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.error.is_some()
    }

    /// Renders the wrapped content, overlaying the modal alert when the bound
    /// value is present.
    pub fn view(self, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
        let content = content.into();
        let Some(error) = self.error else {
            return content;
        };

        let title = dialog_title(error, &self.title_label);
        let body = body_text(error, &self.fallback_message).to_string();

        let title_widget = Text::new(title)
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            });

        let body_widget = Text::new(body).size(typography::BODY);

        let dismiss_button = button(Text::new(self.dismiss_label).size(typography::BODY))
            .on_press(self.on_dismiss)
            .padding(spacing::XS)
            .style(button_styles::primary);

        let actions = Container::new(dismiss_button)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right);

        let card = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(title_widget)
                .push(body_widget)
                .push(actions),
        )
        .width(Length::Fill)
        .max_width(sizing::DIALOG_WIDTH)
        .padding(spacing::LG)
        .style(container_styles::dialog);

        // The opaque backdrop swallows every event aimed at the content below,
        // so the alert is the only interactive surface while it is shown.
        stack![
            content,
            opaque(center(opaque(card)).style(container_styles::backdrop))
        ]
        .into()
    }
}

/// Writes the binding cell back to absent.
///
/// Called from the owner's update loop in response to the dismiss message.
pub fn acknowledge(error: &mut Option<AnyLocalizedError>) {
    *error = None;
}

/// Title shown at the top of the alert card.
fn dialog_title(error: &AnyLocalizedError, default: &str) -> String {
    error
        .error_description
        .clone()
        .unwrap_or_else(|| default.to_string())
}

/// Alert body, first match wins: recovery suggestion, failure reason,
/// fallback.
fn body_text<'e>(error: &'e AnyLocalizedError, fallback: &'e str) -> &'e str {
    error
        .recovery_suggestion
        .as_deref()
        .or(error.failure_reason.as_deref())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestMessage {
        Dismissed,
    }

    #[test]
    fn body_prefers_recovery_suggestion() {
        let error = AnyLocalizedError::new()
            .with_failure_reason("Network unreachable")
            .with_recovery_suggestion("Retry the upload");

        assert_eq!(body_text(&error, FALLBACK_MESSAGE), "Retry the upload");
    }

    #[test]
    fn body_falls_back_to_failure_reason() {
        let error = AnyLocalizedError::new().with_failure_reason("Network unreachable");

        assert_eq!(body_text(&error, FALLBACK_MESSAGE), "Network unreachable");
    }

    #[test]
    fn body_falls_back_to_fixed_message() {
        let error = AnyLocalizedError::new().with_description("Upload failed");

        assert_eq!(body_text(&error, FALLBACK_MESSAGE), "Try again later.");
    }

    #[test]
    fn title_uses_description_when_present() {
        let error = AnyLocalizedError::new().with_description("Upload failed");

        assert_eq!(dialog_title(&error, "Error"), "Upload failed");
        assert_eq!(dialog_title(&AnyLocalizedError::new(), "Error"), "Error");
    }

    #[test]
    fn absent_state_renders_no_overlay() {
        let alert = ErrorAlert::new(None, TestMessage::Dismissed);
        assert!(!alert.is_showing());
    }

    #[test]
    fn present_state_renders_the_overlay() {
        let error = AnyLocalizedError::new().with_description("Upload failed");
        let alert = ErrorAlert::new(Some(&error), TestMessage::Dismissed);
        assert!(alert.is_showing());
    }

    #[test]
    fn acknowledge_clears_the_binding_cell() {
        let mut cell = Some(AnyLocalizedError::new().with_description("Upload failed"));
        acknowledge(&mut cell);
        assert!(cell.is_none());

        // Acknowledging an already absent cell is harmless.
        acknowledge(&mut cell);
        assert!(cell.is_none());
    }

    #[test]
    fn labels_override_the_defaults() {
        let error = AnyLocalizedError::new();
        let alert = ErrorAlert::new(Some(&error), TestMessage::Dismissed).labels(
            "Erreur",
            "D'accord",
            "Réessayez plus tard.",
        );

        assert_eq!(alert.title_label, "Erreur");
        assert_eq!(alert.dismiss_label, "D'accord");
        assert_eq!(alert.fallback_message, "Réessayez plus tard.");
    }
}
