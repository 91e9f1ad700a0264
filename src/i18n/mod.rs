// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the toast layer.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! Default notification titles, form-feedback messages, and the confirm
//! dialog title all resolve through here, so a Spanish deployment shows
//! "Éxito" where an English one shows "Success".

pub mod fluent;
