//! Input-locale system access for the layout commands.
//!
//! On Windows, this resolves the foreground window, reads per-thread keyboard
//! layouts, and posts `WM_INPUTLANGCHANGEREQUEST` messages.  The message post
//! is asynchronous and non-blocking: Windows delivers it to the target
//! window's queue and the switch happens (or not) in that window's own
//! message processing.  Nothing here waits for or verifies the outcome.
//!
//! # Testability
//!
//! The [`InputLocaleSystem`] trait allows unit tests to observe queries and
//! posted requests without a live windowing system; tests use
//! [`mock::MockLocaleSystem`].

use std::sync::Arc;

use crate::domain::{ChangeRequest, InputLocaleId, TargetMode};

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

/// Error type for input-locale operations.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// `Foreground` mode was requested but no window currently has focus
    /// (e.g., a headless session).  There is nothing to post to.
    #[error("no focused window is available to receive the change request")]
    NoFocusTarget,
    /// The OS refused to accept the change request for delivery.
    #[error("failed to post the layout change request: {0}")]
    PostFailed(String),
    /// The operation is not implemented on this compile target.
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// Trait abstracting the windowing system's input-locale surface.
///
/// The production implementation makes Win32 calls; tests use
/// [`mock::MockLocaleSystem`].
pub trait InputLocaleSystem: Send + Sync {
    /// Returns the active layout of the foreground window's owning thread.
    ///
    /// When no window has focus the query degrades to the system-default
    /// context rather than failing; this is accepted behavior.
    fn current_layout(&self) -> Result<InputLocaleId, LocaleError>;

    /// Enumerates every layout currently loaded into the system, in
    /// system-determined order (not sorted, not stable across calls).
    fn loaded_layouts(&self) -> Result<Vec<InputLocaleId>, LocaleError>;

    /// Posts one layout change request to the resolved target window(s).
    ///
    /// Fire-and-forget: success means the request was accepted for delivery,
    /// not that the layout actually changed.
    fn post_change_request(
        &self,
        request: ChangeRequest,
        target: TargetMode,
    ) -> Result<(), LocaleError>;
}

/// Returns the locale system implementation for the compile target.
pub fn platform_system() -> Arc<dyn InputLocaleSystem> {
    #[cfg(target_os = "windows")]
    {
        Arc::new(windows::WindowsLocaleSystem::new())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Arc::new(unsupported::UnsupportedLocaleSystem)
    }
}
