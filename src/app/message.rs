// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use super::scenarios::Scenario;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A demo button raised the given failure scenario.
    Trigger(Scenario),
    /// The user activated the alert's dismiss action.
    AlertDismissed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
