// SPDX-License-Identifier: MPL-2.0
//! Update logic for the demo application.
//!
//! The binding cell transitions exactly two ways: a trigger message writes a
//! freshly normalized error into it, and the alert's dismiss message writes
//! it back to absent through [`alert::acknowledge`].

use super::{App, Message, Status};
use crate::alert;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Trigger(scenario) => {
            app.error = Some(scenario.raise(&app.i18n));
            app.status = Status::Raised(scenario);
        }
        Message::AlertDismissed => {
            alert::acknowledge(&mut app.error);
            app.status = Status::Dismissed;
        }
    }

    Task::none()
}
