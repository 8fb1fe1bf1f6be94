//! kblayout library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does kblayout do?
//!
//! Windows keeps one *input locale* (keyboard layout) active per thread and
//! identifies each loaded layout with an opaque 32-bit handle, the HKL.
//! `kblayout` is a command-line replacement for the language bar: it can
//! print the foreground window's active HKL, list every loaded HKL, and ask
//! one window (or all windows) to switch layouts by posting a
//! `WM_INPUTLANGCHANGEREQUEST` message.
//!
//! Each invocation performs exactly one query or one notification and exits;
//! there is no daemon, no persisted state, and no retry logic.

/// Domain layer: input-locale identifiers and change-request values.
pub mod domain;

/// Application layer: query and switch use cases over the locale system trait.
pub mod application;

/// Infrastructure layer: Win32 adapter, non-Windows stub, and the test mock.
pub mod infrastructure;

/// Command surface: clap argument types and the command dispatcher.
pub mod cli;
