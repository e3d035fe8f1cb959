//! Interactive read-eval-print loop
//!
//! One line is one command. Each command completes before the next line is
//! read, and a failing command never ends the session.

use crate::render::Renderer;
use anyhow::Result;
use roster_core::Dispatcher;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const PROMPT: &str = "> ";

fn is_quit(input: &str) -> bool {
    input == "QUIT" || input == "q"
}

pub async fn run_session<R, W>(
    dispatcher: &Dispatcher,
    renderer: Renderer,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", renderer.banner("Welcome to School Manager!"))?;
    writeln!(out, "{}", renderer.hint("Type QUIT or q to exit."))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            // End of input behaves like QUIT.
            writeln!(out)?;
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_quit(line) {
            writeln!(out, "{}", renderer.banner("Goodbye!"))?;
            break;
        }

        match dispatcher.execute(line).await {
            Ok(outcome) => writeln!(out, "{}", renderer.outcome(&outcome))?,
            Err(err) => {
                if err.is_fatal_for_entity() {
                    log::error!("{}", err);
                } else {
                    log::debug!("Command failed ({}): {}", err.kind(), err);
                }
                writeln!(out, "{}", renderer.error(&err))?;
            }
        }
    }

    Ok(())
}
