//! Mock locale system for unit testing.
//!
//! # Why a mock locale system?
//!
//! The real [`WindowsLocaleSystem`](super::windows) makes Win32 calls that:
//!
//! - Require a live desktop session with a foreground window.
//! - Actually ask windows on the test machine to switch keyboard layouts.
//! - Cannot be observed directly from Rust test code.
//!
//! The `MockLocaleSystem` replaces all OS calls with in-memory recording.
//! Queries return canned values and every posted request is pushed into a
//! `Mutex<Vec<...>>` so assertions can inspect exactly what was dispatched,
//! in what order, and how often the OS layer was touched at all.
//!
//! # `should_fail` flag
//!
//! Construct with [`MockLocaleSystem::failing`] to make every post return
//! [`LocaleError::PostFailed`].  This exercises the fire-and-forget error
//! policy in the command surface without needing a broken OS.

use std::sync::Mutex;
use std::time::Instant;

use crate::domain::{ChangeRequest, InputLocaleId, TargetMode};

use super::{InputLocaleSystem, LocaleError};

/// A mock implementation of [`InputLocaleSystem`] that records all calls.
///
/// Every query and post is timestamped on entry, so tests can assert not
/// just how often the OS layer was touched but *when* relative to the rest
/// of the run (e.g. that a pre-operation delay elapsed first).
pub struct MockLocaleSystem {
    /// The layout reported by `current_layout`.
    current: InputLocaleId,
    /// The layouts reported by `loaded_layouts`, in order.
    loaded: Vec<InputLocaleId>,
    /// Records each `(request, target)` pair passed to `post_change_request`.
    pub posts: Mutex<Vec<(ChangeRequest, TargetMode)>>,
    /// The entry instant of every query and post, in call order.
    call_times: Mutex<Vec<Instant>>,
    /// When `true`, every post immediately returns `LocaleError::PostFailed`.
    should_fail: bool,
}

impl MockLocaleSystem {
    /// Creates a mock reporting the given current layout and loaded set.
    pub fn new(current: InputLocaleId, loaded: Vec<InputLocaleId>) -> Self {
        Self {
            current,
            loaded,
            posts: Mutex::new(Vec::new()),
            call_times: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    /// Creates a mock whose posts all fail with [`LocaleError::PostFailed`].
    pub fn failing() -> Self {
        let mut mock = Self::new(InputLocaleId::new(0), Vec::new());
        mock.should_fail = true;
        mock
    }

    /// Total number of OS-layer calls observed (queries plus posts).
    pub fn os_call_count(&self) -> usize {
        self.call_times.lock().expect("lock poisoned").len()
    }

    /// The instant the first OS-layer call was entered, if any happened.
    pub fn first_call_time(&self) -> Option<Instant> {
        self.call_times.lock().expect("lock poisoned").first().copied()
    }

    fn record_call(&self) {
        self.call_times.lock().expect("lock poisoned").push(Instant::now());
    }

    /// Returns a copy of every recorded post.
    pub fn recorded_posts(&self) -> Vec<(ChangeRequest, TargetMode)> {
        self.posts.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockLocaleSystem {
    fn default() -> Self {
        Self::new(InputLocaleId::new(0x0409_0409), vec![InputLocaleId::new(0x0409_0409)])
    }
}

impl InputLocaleSystem for MockLocaleSystem {
    fn current_layout(&self) -> Result<InputLocaleId, LocaleError> {
        self.record_call();
        Ok(self.current)
    }

    fn loaded_layouts(&self) -> Result<Vec<InputLocaleId>, LocaleError> {
        self.record_call();
        Ok(self.loaded.clone())
    }

    fn post_change_request(
        &self,
        request: ChangeRequest,
        target: TargetMode,
    ) -> Result<(), LocaleError> {
        self.record_call();
        self.posts.lock().expect("lock poisoned").push((request, target));
        if self.should_fail {
            return Err(LocaleError::PostFailed("mock failure".into()));
        }
        Ok(())
    }
}
