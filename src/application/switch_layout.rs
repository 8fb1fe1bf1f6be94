//! SwitchLayoutUseCase: dispatches layout change requests.
//!
//! The dispatch is fire-and-forget by design: the underlying notification is
//! delivered asynchronously and the actual switch happens in the receiving
//! window's own message processing.  Success here means "accepted for
//! delivery", nothing more, and callers must not read it as confirmation.

use std::sync::Arc;

use crate::domain::{ChangeRequest, TargetMode};
use crate::infrastructure::input_locale::{InputLocaleSystem, LocaleError};

/// The Switch Layout use case.
///
/// Issues exactly one change-request post per call, regardless of target
/// mode; broadcast fan-out is the system's responsibility.
pub struct SwitchLayoutUseCase {
    system: Arc<dyn InputLocaleSystem>,
}

impl SwitchLayoutUseCase {
    /// Creates a new use case over the given locale system.
    pub fn new(system: Arc<dyn InputLocaleSystem>) -> Self {
        Self { system }
    }

    /// Requests a layout change on the given target(s).
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::NoFocusTarget`] when `Foreground` mode finds no
    /// focused window, [`LocaleError::PostFailed`] when the OS refuses the
    /// message, and [`LocaleError::UnsupportedPlatform`] on non-Windows
    /// targets.
    pub fn request(&self, request: ChangeRequest, target: TargetMode) -> Result<(), LocaleError> {
        self.system.post_change_request(request, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CycleDirection, InputLocaleId};
    use crate::infrastructure::input_locale::mock::MockLocaleSystem;

    #[test]
    fn test_request_issues_exactly_one_post() {
        // Arrange
        let mock = Arc::new(MockLocaleSystem::default());
        let system: Arc<dyn InputLocaleSystem> = mock.clone();
        let use_case = SwitchLayoutUseCase::new(system);

        // Act
        use_case
            .request(
                ChangeRequest::Select(InputLocaleId::new(0x1234)),
                TargetMode::Broadcast,
            )
            .unwrap();

        // Assert — one post even in broadcast mode.
        assert_eq!(mock.os_call_count(), 1);
        assert_eq!(
            mock.recorded_posts(),
            vec![(
                ChangeRequest::Select(InputLocaleId::new(0x1234)),
                TargetMode::Broadcast
            )]
        );
    }

    #[test]
    fn test_request_propagates_post_failure() {
        let mock = Arc::new(MockLocaleSystem::failing());
        let system: Arc<dyn InputLocaleSystem> = mock.clone();
        let use_case = SwitchLayoutUseCase::new(system);

        let result = use_case.request(
            ChangeRequest::Cycle(CycleDirection::Next),
            TargetMode::Foreground,
        );

        assert!(matches!(result, Err(LocaleError::PostFailed(_))));
    }
}
