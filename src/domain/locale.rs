//! Input-locale domain entities.
//!
//! Windows names each loaded keyboard layout / input-locale pairing with an
//! opaque handle, the HKL.  The API-level handle is pointer-sized and may
//! carry flag bits in its high half, but the identifier itself is 32 bits
//! wide; [`InputLocaleId`] masks accordingly on construction.
//!
//! A layout change is requested by posting `WM_INPUTLANGCHANGEREQUEST` with
//! one of two mutually exclusive parameter encodings:
//!
//! - absolute selection: `wparam = 0`, `lparam = HKL`
//! - cycling: `wparam = INPUTLANGCHANGE_FORWARD | INPUTLANGCHANGE_BACKWARD`,
//!   `lparam = 0`
//!
//! [`ChangeRequest`] captures that encoding as a closed enum so callers
//! cannot combine the two modes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// `WM_INPUTLANGCHANGEREQUEST` WPARAM value for cycling forward one layout.
const INPUTLANGCHANGE_FORWARD: u32 = 0x0002;

/// `WM_INPUTLANGCHANGEREQUEST` WPARAM value for cycling backward one layout.
const INPUTLANGCHANGE_BACKWARD: u32 = 0x0004;

/// An input locale identifier (HKL): an opaque 32-bit handle naming one
/// loaded keyboard layout / input-locale pairing.
///
/// Zero is a theoretically valid identifier and is never treated as "absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputLocaleId(u32);

impl InputLocaleId {
    /// Wraps an already-masked 32-bit identifier.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Builds an identifier from a raw pointer-sized OS handle, discarding
    /// any high-order flag bits the API may have set.
    pub const fn from_handle(handle: usize) -> Self {
        Self((handle & 0xffff_ffff) as u32)
    }

    /// Returns the identifier as a 32-bit value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Renders the identifier the way every command prints it: `0x` followed by
/// exactly eight lowercase hex digits.
impl fmt::Display for InputLocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Error returned when an HKL argument cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{input}' is not a decimal or hexadecimal input locale identifier")]
pub struct ParseLocaleIdError {
    /// The rejected input string.
    pub input: String,
}

/// Parses an HKL argument: decimal first, then hexadecimal with or without
/// a `0x` prefix.  `"4660"` and `"0x1234"` name the same identifier.
impl FromStr for InputLocaleId {
    type Err = ParseLocaleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<u32>() {
            return Ok(Self(value));
        }
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseLocaleIdError { input: s.to_string() })
    }
}

/// Direction for cycling through the loaded layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    /// Cycle forward one layout.
    Next,
    /// Cycle backward one layout.
    Prev,
}

impl CycleDirection {
    /// Returns the reserved WPARAM value that encodes this direction.
    pub const fn wire_code(self) -> u32 {
        match self {
            Self::Next => INPUTLANGCHANGE_FORWARD,
            Self::Prev => INPUTLANGCHANGE_BACKWARD,
        }
    }
}

/// A description of how to alter the active layout.
///
/// Absolute selection and cycling are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeRequest {
    /// Activate the layout named by this identifier.
    Select(InputLocaleId),
    /// Cycle to an adjacent layout in the given direction.
    Cycle(CycleDirection),
}

impl ChangeRequest {
    /// Returns the `(wparam, lparam)` pair for the change-request message.
    ///
    /// Absolute selection passes the identifier as the payload with a zero
    /// reserved value; cycling passes the direction code with a zero payload.
    pub const fn message_params(self) -> (u32, u32) {
        match self {
            Self::Select(id) => (0, id.as_u32()),
            Self::Cycle(direction) => (direction.wire_code(), 0),
        }
    }
}

/// Which windows receive the change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Only the current foreground window.
    Foreground,
    /// Every top-level window in the system.
    Broadcast,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
