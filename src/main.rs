//! kblayout binary entry point.
//!
//! Wires the command surface to the platform locale system and exits with
//! the command's result:
//!
//! ```text
//! main()
//!  └─ tracing init          -- level from RUST_LOG, diagnostics on stderr
//!  └─ Cli::try_parse()      -- parse failure exits 1, no OS call made
//!  └─ platform_system()     -- Win32 adapter, or the stub elsewhere
//!  └─ cli::run()            -- delay → one query or one post → exit code
//! ```
//!
//! Command output (the hex identifiers) goes to stdout; everything else,
//! including clap's parse errors and tracing diagnostics, goes to stderr so
//! stdout stays machine-parseable.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kblayout::cli::{self, Cli};
use kblayout::infrastructure::input_locale::platform_system;

fn main() {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`;
    // the quiet default keeps normal runs silent apart from the command
    // output itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version arrive here too; those print to stdout
            // and exit 0 via clap.  Real parse failures exit 1.
            if err.use_stderr() {
                let _ = err.print();
                process::exit(1);
            }
            err.exit();
        }
    };

    let mut stdout = io::stdout().lock();
    let code = cli::run(cli, platform_system(), &mut stdout);
    let _ = stdout.flush();
    process::exit(code);
}
