//! QueryLayoutUseCase: read-only snapshots of the input-locale state.

use std::sync::Arc;

use crate::domain::InputLocaleId;
use crate::infrastructure::input_locale::{InputLocaleSystem, LocaleError};

/// The Query Layout use case.
///
/// Reads the set of loaded layouts and the layout active for the focused
/// window, without mutating anything.
pub struct QueryLayoutUseCase {
    system: Arc<dyn InputLocaleSystem>,
}

impl QueryLayoutUseCase {
    /// Creates a new use case over the given locale system.
    pub fn new(system: Arc<dyn InputLocaleSystem>) -> Self {
        Self { system }
    }

    /// Returns the foreground window's active layout.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnsupportedPlatform`] on non-Windows targets.
    /// On Windows the query degrades rather than failing when no window has
    /// focus.
    pub fn current(&self) -> Result<InputLocaleId, LocaleError> {
        self.system.current_layout()
    }

    /// Returns every loaded layout, in system-determined order.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnsupportedPlatform`] on non-Windows targets.
    pub fn loaded(&self) -> Result<Vec<InputLocaleId>, LocaleError> {
        self.system.loaded_layouts()
    }
}
