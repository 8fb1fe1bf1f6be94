//! Infrastructure layer: OS-facing adapters.
//!
//! **Dependency rule**: this layer may depend on `domain`, but MUST NOT be
//! imported by the `domain` or `application` layers except through the
//! [`input_locale::InputLocaleSystem`] trait.

pub mod input_locale;
