//! Stub locale system for non-Windows compile targets.
//!
//! Keyboard-layout control is a Win32 concern; on every other OS each
//! operation reports [`LocaleError::UnsupportedPlatform`].  Keeping this stub
//! lets the crate build and its command surface be tested anywhere.

#![cfg(not(target_os = "windows"))]

use crate::domain::{ChangeRequest, InputLocaleId, TargetMode};

use super::{InputLocaleSystem, LocaleError};

/// A locale system that refuses every operation.
pub struct UnsupportedLocaleSystem;

impl InputLocaleSystem for UnsupportedLocaleSystem {
    fn current_layout(&self) -> Result<InputLocaleId, LocaleError> {
        Err(unsupported())
    }

    fn loaded_layouts(&self) -> Result<Vec<InputLocaleId>, LocaleError> {
        Err(unsupported())
    }

    fn post_change_request(
        &self,
        _request: ChangeRequest,
        _target: TargetMode,
    ) -> Result<(), LocaleError> {
        Err(unsupported())
    }
}

fn unsupported() -> LocaleError {
    LocaleError::UnsupportedPlatform(std::env::consts::OS.to_string())
}
