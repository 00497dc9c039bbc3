//! The interactive read loop.

use std::io::BufRead;

use flisp_eval::print;

use crate::{Output, ReplConfig, Session};

/// Host-side failures of the read loop.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the read loop until `input` is exhausted.
///
/// Each line is evaluated in `session` and the printed result written to
/// `output`. Parse errors are reported and the loop continues.
pub fn run_repl(
    config: &ReplConfig,
    mut input: impl BufRead,
    output: &Output,
    session: &mut Session,
) -> Result<(), ReplError> {
    for line in config.banner_lines() {
        output.println(&line)?;
    }

    let mut line = String::new();
    loop {
        output.print(&config.prompt)?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            output.println("")?;
            tracing::debug!("end of input");
            return Ok(());
        }

        let source = line.trim_end_matches(['\n', '\r']);
        let printed = match session.eval_source(source) {
            Ok(value) => print(&value),
            Err(err) => err.to_string(),
        };
        output.println(&printed)?;
    }
}
