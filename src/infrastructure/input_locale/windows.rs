//! Win32 input-locale system implementation.
//!
//! Queries go through `GetForegroundWindow` → `GetWindowThreadProcessId` →
//! `GetKeyboardLayout`; enumeration uses `GetKeyboardLayoutList`; change
//! requests are posted with `PostMessageW(WM_INPUTLANGCHANGEREQUEST)`.
//! HKL handles are pointer-sized on the API surface and are masked down to
//! their 32-bit identifier on the way out.

#![cfg(target_os = "windows")]

use std::ptr;

use tracing::debug;
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyboardLayout, GetKeyboardLayoutList};
use windows::Win32::UI::TextServices::HKL;
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowThreadProcessId, PostMessageW, HWND_BROADCAST,
    WM_INPUTLANGCHANGEREQUEST,
};

use crate::domain::{ChangeRequest, InputLocaleId, TargetMode};

use super::{InputLocaleSystem, LocaleError};

/// Windows implementation of [`InputLocaleSystem`].
pub struct WindowsLocaleSystem;

impl WindowsLocaleSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsLocaleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLocaleSystem for WindowsLocaleSystem {
    fn current_layout(&self) -> Result<InputLocaleId, LocaleError> {
        // Thread id 0 reads the calling thread's layout, which is the
        // documented degradation when no window has focus.
        let thread_id = foreground_thread_id();
        // SAFETY: GetKeyboardLayout is always safe to call; an unknown
        // thread id yields the default layout rather than failing.
        let hkl = unsafe { GetKeyboardLayout(thread_id) };
        Ok(InputLocaleId::from_handle(hkl.0 as usize))
    }

    fn loaded_layouts(&self) -> Result<Vec<InputLocaleId>, LocaleError> {
        // SAFETY: passing no buffer asks for the required element count.
        let count = unsafe { GetKeyboardLayoutList(None) };
        if count <= 0 {
            return Ok(Vec::new());
        }

        let mut handles = vec![HKL(ptr::null_mut()); count as usize];
        // SAFETY: the buffer is sized from the count returned above; the OS
        // reports how many elements it actually filled.
        let filled = unsafe { GetKeyboardLayoutList(Some(&mut handles)) };
        handles.truncate(filled.max(0) as usize);

        Ok(handles
            .into_iter()
            .map(|hkl| InputLocaleId::from_handle(hkl.0 as usize))
            .collect())
    }

    fn post_change_request(
        &self,
        request: ChangeRequest,
        target: TargetMode,
    ) -> Result<(), LocaleError> {
        let hwnd = match target {
            TargetMode::Broadcast => HWND_BROADCAST,
            TargetMode::Foreground => {
                // SAFETY: GetForegroundWindow is always safe to call.
                let hwnd = unsafe { GetForegroundWindow() };
                if hwnd.is_invalid() {
                    // Posting to a null HWND would land in our own thread
                    // queue instead of a window; refuse instead.
                    return Err(LocaleError::NoFocusTarget);
                }
                hwnd
            }
        };

        let (wparam, lparam) = request.message_params();
        debug!(?request, ?target, "posting WM_INPUTLANGCHANGEREQUEST");
        // SAFETY: hwnd is either HWND_BROADCAST or a live foreground window
        // handle; the message parameters are plain integers.
        unsafe {
            PostMessageW(
                Some(hwnd),
                WM_INPUTLANGCHANGEREQUEST,
                WPARAM(wparam as usize),
                LPARAM(lparam as isize),
            )
        }
        .map_err(|e| LocaleError::PostFailed(e.to_string()))
    }
}

/// Returns the id of the thread owning the foreground window, or 0 when no
/// window has focus.
fn foreground_thread_id() -> u32 {
    // SAFETY: GetForegroundWindow is always safe to call.
    let hwnd = unsafe { GetForegroundWindow() };
    if hwnd.is_invalid() {
        return 0;
    }
    // SAFETY: hwnd was just returned by the OS; the process id out-param is
    // optional and not needed here.
    unsafe { GetWindowThreadProcessId(hwnd, None) }
}
