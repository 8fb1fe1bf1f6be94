//! Command surface: argument grammar and command dispatch.
//!
//! Parses one subcommand per invocation, applies the optional pre-operation
//! delay, and hands off to the query or switch use case.  The whole run is a
//! single pass: delay → one OS interaction → exit code.
//!
//! # Usage
//!
//! ```text
//! kblayout <COMMAND>
//!
//! Commands:
//!   get-layout    Print the current keyboard layout (HKL) of the foreground window
//!   set-layout    Set the current keyboard layout
//!   prev-layout   Cycle backward one keyboard layout
//!   next-layout   Cycle forward one keyboard layout
//!   list-layouts  List every loaded input locale identifier (HKL)
//! ```
//!
//! # Exit codes
//!
//! - `0` — success.  An undeliverable change request also exits 0: delivery
//!   is best-effort and the actual switch is asynchronous either way.
//! - `1` — argument parse failure, or an operation the compile target does
//!   not support.
//!
//! Note that `set-layout` followed immediately by `get-layout` is *not*
//! guaranteed to observe the new value; the receiving window applies the
//! change in its own message processing, some time after this process has
//! already exited.

use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, warn};

use crate::application::{QueryLayoutUseCase, SwitchLayoutUseCase};
use crate::domain::{ChangeRequest, CycleDirection, InputLocaleId, TargetMode};
use crate::infrastructure::input_locale::{InputLocaleSystem, LocaleError};

/// Utility command-line program for working with Windows keyboard layouts.
#[derive(Debug, Parser)]
#[command(
    name = "kblayout",
    about = "Query and switch Windows keyboard layouts from the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// The five terminal commands.  The set is closed: dispatch is an exhaustive
/// match, so no command can parse without also having a handler.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current keyboard layout (HKL) of the foreground window.
    ///
    /// The printed value is used as an argument for other commands.
    GetLayout {
        /// Time in seconds to delay before getting the keyboard layout.
        #[arg(short, long, default_value_t = 0.0, value_parser = parse_delay)]
        delay: f64,
    },

    /// Set the current keyboard layout.
    SetLayout {
        /// An input locale identifier (HKL) corresponding to the keyboard
        /// layout to set.  Accepts decimal or hexadecimal (e.g. 0x04090409).
        #[arg(value_parser = parse_locale_id)]
        hkl: InputLocaleId,

        /// Change the keyboard layout for all windows instead of only the
        /// current foreground window.
        #[arg(short, long)]
        all_windows: bool,

        /// Time in seconds to delay before setting the keyboard layout.
        #[arg(short, long, default_value_t = 0.0, value_parser = parse_delay)]
        delay: f64,
    },

    /// Cycle backward one keyboard layout.
    PrevLayout {
        /// Change the keyboard layout for all windows instead of only the
        /// current foreground window.
        #[arg(short, long)]
        all_windows: bool,

        /// Time in seconds to delay before setting the keyboard layout.
        #[arg(short, long, default_value_t = 0.0, value_parser = parse_delay)]
        delay: f64,
    },

    /// Cycle forward one keyboard layout.
    NextLayout {
        /// Change the keyboard layout for all windows instead of only the
        /// current foreground window.
        #[arg(short, long)]
        all_windows: bool,

        /// Time in seconds to delay before setting the keyboard layout.
        #[arg(short, long, default_value_t = 0.0, value_parser = parse_delay)]
        delay: f64,
    },

    /// List every input locale identifier (HKL) currently loaded into the
    /// system, one per line.  These values can be used with `set-layout`.
    ListLayouts,
}

/// clap value parser for the HKL positional argument.
fn parse_locale_id(s: &str) -> Result<InputLocaleId, String> {
    s.parse::<InputLocaleId>().map_err(|e| e.to_string())
}

/// clap value parser for `--delay`: a non-negative number of seconds that a
/// `Duration` can represent.  NaN, infinities, negative values, and values
/// too large to sleep for are all parse failures.
fn parse_delay(s: &str) -> Result<f64, String> {
    let seconds: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of seconds"))?;
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("delay must be a non-negative number of seconds, got '{s}'"))?;
    Ok(seconds)
}

/// Runs one parsed command against the given locale system and returns the
/// process exit code.
///
/// Query output goes to `out`; diagnostics go through `tracing`.  No error
/// from the query or dispatch layer escapes this function.
pub fn run(cli: Cli, system: Arc<dyn InputLocaleSystem>, out: &mut dyn Write) -> i32 {
    match cli.command {
        Command::GetLayout { delay } => {
            apply_delay(delay);
            let query = QueryLayoutUseCase::new(system);
            match query.current() {
                Ok(id) => print_line(out, id),
                Err(err) => query_failure(&err),
            }
        }
        Command::SetLayout { hkl, all_windows, delay } => {
            apply_delay(delay);
            dispatch(system, ChangeRequest::Select(hkl), target_mode(all_windows))
        }
        Command::PrevLayout { all_windows, delay } => {
            apply_delay(delay);
            dispatch(
                system,
                ChangeRequest::Cycle(CycleDirection::Prev),
                target_mode(all_windows),
            )
        }
        Command::NextLayout { all_windows, delay } => {
            apply_delay(delay);
            dispatch(
                system,
                ChangeRequest::Cycle(CycleDirection::Next),
                target_mode(all_windows),
            )
        }
        Command::ListLayouts => {
            let query = QueryLayoutUseCase::new(system);
            match query.loaded() {
                Ok(ids) => {
                    for id in ids {
                        let code = print_line(out, id);
                        if code != 0 {
                            return code;
                        }
                    }
                    0
                }
                Err(err) => query_failure(&err),
            }
        }
    }
}

/// Blocks the whole process for the requested duration before any OS
/// interaction begins.  Not cancellable; this is the only suspension point.
fn apply_delay(seconds: f64) {
    // The grammar only admits representable values; anything else is
    // treated as no delay rather than a panic.
    match Duration::try_from_secs_f64(seconds) {
        Ok(duration) if !duration.is_zero() => thread::sleep(duration),
        _ => {}
    }
}

fn target_mode(all_windows: bool) -> TargetMode {
    if all_windows {
        TargetMode::Broadcast
    } else {
        TargetMode::Foreground
    }
}

/// Posts one change request and maps the outcome onto an exit code.
fn dispatch(system: Arc<dyn InputLocaleSystem>, request: ChangeRequest, target: TargetMode) -> i32 {
    let switch = SwitchLayoutUseCase::new(system);
    match switch.request(request, target) {
        Ok(()) => 0,
        Err(err @ LocaleError::UnsupportedPlatform(_)) => {
            error!("{err}");
            1
        }
        // Delivery is best-effort: an undeliverable request is a no-op,
        // not a failure.
        Err(err) => {
            warn!("layout change request not delivered: {err}");
            0
        }
    }
}

fn query_failure(err: &LocaleError) -> i32 {
    error!("{err}");
    1
}

fn print_line(out: &mut dyn Write, id: InputLocaleId) -> i32 {
    if let Err(err) = writeln!(out, "{id}") {
        error!("failed to write output: {err}");
        return 1;
    }
    0
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_get_layout_default_delay_is_zero() {
        let cli = parse(&["kblayout", "get-layout"]);
        assert!(matches!(cli.command, Command::GetLayout { delay } if delay == 0.0));
    }

    #[test]
    fn test_get_layout_accepts_fractional_delay() {
        let cli = parse(&["kblayout", "get-layout", "--delay", "1.5"]);
        assert!(matches!(cli.command, Command::GetLayout { delay } if delay == 1.5));
    }

    #[test]
    fn test_delay_short_flag() {
        let cli = parse(&["kblayout", "next-layout", "-d", "2"]);
        assert!(matches!(cli.command, Command::NextLayout { delay, .. } if delay == 2.0));
    }

    #[test]
    fn test_negative_delay_is_a_parse_failure() {
        let result = Cli::try_parse_from(["kblayout", "get-layout", "--delay", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_delay_is_a_parse_failure() {
        let result = Cli::try_parse_from(["kblayout", "get-layout", "--delay", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overlarge_delay_is_a_parse_failure() {
        // 1e300 seconds overflows Duration; it must be rejected at the
        // grammar, not panic at the sleep.
        let result = Cli::try_parse_from(["kblayout", "get-layout", "--delay", "1e300"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_delay_is_a_parse_failure() {
        let result = Cli::try_parse_from(["kblayout", "get-layout", "--delay", "NaN"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_delay_tolerates_unrepresentable_values() {
        // An unrepresentable value degrades to no delay, never a panic.
        apply_delay(f64::INFINITY);
        apply_delay(f64::NAN);
        apply_delay(-1.0);
    }

    #[test]
    fn test_set_layout_decimal_and_hex_arguments_agree() {
        // 4660 decimal == 0x1234.
        let from_hex = parse(&["kblayout", "set-layout", "0x1234"]);
        let from_decimal = parse(&["kblayout", "set-layout", "4660"]);

        let Command::SetLayout { hkl: hex, .. } = from_hex.command else {
            panic!("expected set-layout");
        };
        let Command::SetLayout { hkl: decimal, .. } = from_decimal.command else {
            panic!("expected set-layout");
        };
        assert_eq!(hex, decimal);
        assert_eq!(hex, InputLocaleId::new(0x1234));
    }

    #[test]
    fn test_set_layout_requires_an_hkl() {
        let result = Cli::try_parse_from(["kblayout", "set-layout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_layout_rejects_malformed_hkl() {
        let result = Cli::try_parse_from(["kblayout", "set-layout", "qwerty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_windows_flag_defaults_to_off() {
        let cli = parse(&["kblayout", "prev-layout"]);
        assert!(matches!(cli.command, Command::PrevLayout { all_windows: false, .. }));
    }

    #[test]
    fn test_all_windows_long_and_short_flags() {
        let long = parse(&["kblayout", "next-layout", "--all-windows"]);
        let short = parse(&["kblayout", "next-layout", "-a"]);
        assert!(matches!(long.command, Command::NextLayout { all_windows: true, .. }));
        assert!(matches!(short.command, Command::NextLayout { all_windows: true, .. }));
    }

    #[test]
    fn test_get_layout_has_no_all_windows_flag() {
        let result = Cli::try_parse_from(["kblayout", "get-layout", "--all-windows"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_layouts_takes_no_arguments() {
        let result = Cli::try_parse_from(["kblayout", "list-layouts", "--delay", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_command_is_a_parse_failure() {
        let result = Cli::try_parse_from(["kblayout", "foo-layout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_a_command_is_required() {
        let result = Cli::try_parse_from(["kblayout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_target_mode_maps_the_broadcast_flag() {
        assert_eq!(target_mode(true), TargetMode::Broadcast);
        assert_eq!(target_mode(false), TargetMode::Foreground);
    }
}
