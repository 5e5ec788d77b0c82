use std::io::{BufRead, Write};

use icy_bitmap::EditSession;

use crate::commands::{Command, HELP};

pub const GREETING: &str = "Console ready. You may type your command.";
pub const PROMPT: &str = ">";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands line by line until `quit` or end of input.
///
/// Failing commands are reported on `output` and the loop keeps going.
/// Only read or write failures end it early.
pub fn run<R: BufRead, W: Write>(session: &mut EditSession, mut input: R, output: &mut W, show_prompt: bool) -> std::io::Result<()> {
    if show_prompt {
        writeln!(output, "{GREETING}")?;
    }
    let mut raw = Vec::new();
    loop {
        if show_prompt {
            write!(output, "{PROMPT} ")?;
            output.flush()?;
        }
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&raw) else {
            let lossy = String::from_utf8_lossy(&raw);
            log::warn!("ignoring input that is not valid UTF-8: {}", lossy.trim_end());
            writeln!(output, "Invalid input (not UTF-8): {}", lossy.trim_end())?;
            continue;
        };
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("{err}");
                writeln!(output, "{err}")?;
                continue;
            }
        };
        if execute(session, command, output)? == Flow::Quit {
            break;
        }
    }
    output.flush()
}

/// Applies a single command to the session.
pub fn execute<W: Write>(session: &mut EditSession, command: Command, output: &mut W) -> std::io::Result<Flow> {
    log::debug!("{command:?}");
    let result = match command {
        Command::Edit(path) => session.edit(&path).map(|()| {
            let image = session.image().map(|img| (img.width(), img.height())).unwrap_or_default();
            format!("Loaded {} ({}x{})", path.display(), image.0, image.1)
        }),
        Command::Save(path) => session.save(&path).map(|bytes| format!("Wrote {bytes} bytes to {}", path.display())),
        Command::Insert { path, y, x } => session.insert(&path, y, x).map(|rows| format!("Inserted {rows} rows")),
        Command::SetDrawColor { r, g, b } => {
            session.set_draw_color(r, g, b);
            Ok(String::new())
        }
        Command::SetLineWidth(width) => {
            session.set_line_width(width);
            Ok(String::new())
        }
        Command::DrawLine { y1, x1, y2, x2 } => session.draw_line(y1, x1, y2, x2).map(|()| String::new()),
        Command::DrawRectangle { y1, x1, width, height } => session.draw_rectangle(y1, x1, width, height).map(|()| String::new()),
        Command::DrawTriangle { y1, x1, y2, x2, y3, x3 } => session.draw_triangle(y1, x1, y2, x2, y3, x3).map(|()| String::new()),
        Command::Fill { .. } => Ok("fill is not supported".to_string()),
        Command::Help => Ok(HELP.to_string()),
        Command::Quit => return Ok(Flow::Quit),
    };

    match result {
        Ok(msg) if msg.is_empty() => {}
        Ok(msg) => writeln!(output, "{msg}")?,
        Err(err) => {
            log::error!("{err}");
            writeln!(output, "Error: {err}")?;
        }
    }
    Ok(Flow::Continue)
}
