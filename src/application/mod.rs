//! Application layer: use cases for the layout commands.
//!
//! Each use case delegates to the [`InputLocaleSystem`] trait so the
//! command surface and tests can run against either the Win32 adapter or
//! the in-memory mock.
//!
//! [`InputLocaleSystem`]: crate::infrastructure::input_locale::InputLocaleSystem

pub mod query_layout;
pub mod switch_layout;

pub use query_layout::QueryLayoutUseCase;
pub use switch_layout::SwitchLayoutUseCase;
