// SPDX-License-Identifier: MPL-2.0
//! Rendering half of the crate: design tokens and the toast widget.

pub mod design_tokens;
pub mod notifications;
