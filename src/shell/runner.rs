//! Shell loops
//!
//! Drives a `Session` from a line reader. Interactive mode shows a prompt
//! and reports bad lines without stopping; script mode stops at the first
//! bad line and reports its number.

use std::io::{BufRead, Write};

use crate::config::ShellConfig;
use crate::shell::error::{ShellError, ShellResult};
use crate::shell::parser::parse_command;
use crate::shell::session::{Outcome, Session};

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Run an interactive session until `quit` or end of input
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    output: &mut W,
    config: &ShellConfig,
) -> ShellResult<()> {
    writeln!(output, "{}", session.render())?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }

        // Undecodable bytes become U+FFFD instead of an IO error
        let line = String::from_utf8_lossy(&buf);
        match handle_line(session, &line, output, config) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(ShellError::Io(e)) => return Err(ShellError::Io(e)),
            Err(e) => writeln!(output, "error: {}", e)?,
        }
    }

    tracing::info!(
        meals = session.state().meals().len(),
        groceries = session.state().groceries().len(),
        "Session ended"
    );
    Ok(())
}

/// Run every line of a script, stopping at the first error
pub fn run_script<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    config: &ShellConfig,
) -> ShellResult<()> {
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let flow = handle_line(session, &line, output, config).map_err(|e| {
            ShellError::Script {
                line: idx + 1,
                source: Box::new(e),
            }
        })?;

        if flow == Flow::Stop {
            break;
        }
    }

    Ok(())
}

fn handle_line<W: Write>(
    session: &mut Session,
    line: &str,
    output: &mut W,
    config: &ShellConfig,
) -> ShellResult<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let command = parse_command(line)?;
    tracing::trace!(?command, "Executing command");

    match session.execute(command)? {
        Outcome::Changed if config.render_after_change => {
            writeln!(output, "{}", session.render())?;
        }
        Outcome::Changed | Outcome::Unchanged => {}
        Outcome::Show => writeln!(output, "{}", session.render())?,
        Outcome::Output(text) => {
            write!(output, "{}", text)?;
            if !text.ends_with('\n') {
                writeln!(output)?;
            }
        }
        Outcome::Quit => return Ok(Flow::Stop),
    }

    Ok(Flow::Continue)
}
