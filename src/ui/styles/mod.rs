// SPDX-License-Identifier: MPL-2.0
//! Centralized style functions for buttons and containers.

pub mod button;
pub mod container;
