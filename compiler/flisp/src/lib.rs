//! fLisp - read-eval-print loop and command line front end.
//!
//! Wires the parser and the evaluation core together:
//! `Session` owns the process-lifetime environment, `run_repl` drives it from
//! line-oriented input, and `Output` decides where results are written.
//!
//! # Debugging
//!
//! Set `RUST_LOG` to see evaluator events on stderr:
//! - `RUST_LOG=flisp_eval=debug`: definitions and failed applications
//! - `RUST_LOG=flisp_eval=trace`: every builtin application

mod config;
mod output;
mod repl;
mod session;

pub use config::ReplConfig;
pub use output::{buffer_output, stdout_output, BufferOutput, Output, StdoutOutput};
pub use repl::{run_repl, ReplError};
pub use session::Session;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
