//! Domain entities for keyboard-layout control.
//!
//! Everything in this layer is a plain value type: no OS calls, no I/O.

pub mod locale;

pub use locale::{ChangeRequest, CycleDirection, InputLocaleId, ParseLocaleIdError, TargetMode};
