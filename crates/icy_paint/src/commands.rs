//! Console command parsing
//!
//! A command line is a verb followed by whitespace separated arguments:
//! ```text
//! edit <path>
//! save <path>
//! insert <path> <y> <x>
//! set draw_color <r> <g> <b>
//! set line_width <n>
//! draw line <y1> <x1> <y2> <x2>
//! draw rectangle <y1> <x1> <width> <height>
//! draw triangle <y1> <x1> <y2> <x2> <y3> <x3>
//! quit
//! ```

use std::{path::PathBuf, str::SplitWhitespace};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(PathBuf),
    Save(PathBuf),
    Insert { path: PathBuf, y: i32, x: i32 },
    SetDrawColor { r: u8, g: u8, b: u8 },
    SetLineWidth(i32),
    DrawLine { y1: i32, x1: i32, y2: i32, x2: i32 },
    DrawRectangle { y1: i32, x1: i32, width: i32, height: i32 },
    DrawTriangle { y1: i32, x1: i32, y2: i32, x2: i32, y3: i32, x3: i32 },
    /// Flood fill is accepted but not implemented.
    Fill { y: i32, x: i32 },
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unrecognized command: {0}")]
    Unknown(String),

    #[error("Missing argument <{arg}> for '{command}'")]
    MissingArgument { command: &'static str, arg: &'static str },

    #[error("Invalid number '{value}' for <{arg}>")]
    InvalidNumber { arg: &'static str, value: String },

    #[error("Too many arguments for '{command}'")]
    TooManyArguments { command: &'static str },
}

pub const HELP: &str = "\
edit <path>                                   load an image
save <path>                                   save the image
insert <path> <y> <x>                         paste an image at column y, row x
set draw_color <r> <g> <b>                    set the pen color
set line_width <n>                            set the pen width
draw line <y1> <x1> <y2> <x2>
draw rectangle <y1> <x1> <width> <height>
draw triangle <y1> <x1> <y2> <x2> <y3> <x3>
quit";

struct Args<'a> {
    command: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next_str(&mut self, arg: &'static str) -> Result<&'a str, CommandError> {
        self.tokens.next().ok_or(CommandError::MissingArgument { command: self.command, arg })
    }

    fn next_path(&mut self, arg: &'static str) -> Result<PathBuf, CommandError> {
        Ok(PathBuf::from(self.next_str(arg)?))
    }

    fn next_i32(&mut self, arg: &'static str) -> Result<i32, CommandError> {
        let value = self.next_str(arg)?;
        value.parse().map_err(|_| CommandError::InvalidNumber {
            arg,
            value: value.to_string(),
        })
    }

    /// Color channels keep the low byte of the number.
    fn next_channel(&mut self, arg: &'static str) -> Result<u8, CommandError> {
        Ok(self.next_i32(arg)? as u8)
    }

    fn finish(mut self, command: Command) -> Result<Command, CommandError> {
        if self.tokens.next().is_some() {
            return Err(CommandError::TooManyArguments { command: self.command });
        }
        Ok(command)
    }
}

impl Command {
    /// Parses one input line, `None` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };

        let command = match verb {
            "edit" => {
                let mut args = Args { command: "edit", tokens };
                let path = args.next_path("path")?;
                args.finish(Command::Edit(path))?
            }
            "save" => {
                let mut args = Args { command: "save", tokens };
                let path = args.next_path("path")?;
                args.finish(Command::Save(path))?
            }
            "insert" => {
                let mut args = Args { command: "insert", tokens };
                let path = args.next_path("path")?;
                let y = args.next_i32("y")?;
                let x = args.next_i32("x")?;
                args.finish(Command::Insert { path, y, x })?
            }
            "set" => match tokens.next() {
                Some("draw_color") => {
                    let mut args = Args {
                        command: "set draw_color",
                        tokens,
                    };
                    let r = args.next_channel("r")?;
                    let g = args.next_channel("g")?;
                    let b = args.next_channel("b")?;
                    args.finish(Command::SetDrawColor { r, g, b })?
                }
                Some("line_width") => {
                    let mut args = Args {
                        command: "set line_width",
                        tokens,
                    };
                    let width = args.next_i32("n")?;
                    args.finish(Command::SetLineWidth(width))?
                }
                _ => return Err(CommandError::Unknown(line.trim().to_string())),
            },
            "draw" => match tokens.next() {
                Some("line") => {
                    let mut args = Args { command: "draw line", tokens };
                    let y1 = args.next_i32("y1")?;
                    let x1 = args.next_i32("x1")?;
                    let y2 = args.next_i32("y2")?;
                    let x2 = args.next_i32("x2")?;
                    args.finish(Command::DrawLine { y1, x1, y2, x2 })?
                }
                Some("rectangle") => {
                    let mut args = Args {
                        command: "draw rectangle",
                        tokens,
                    };
                    let y1 = args.next_i32("y1")?;
                    let x1 = args.next_i32("x1")?;
                    let width = args.next_i32("width")?;
                    let height = args.next_i32("height")?;
                    args.finish(Command::DrawRectangle { y1, x1, width, height })?
                }
                Some("triangle") => {
                    let mut args = Args {
                        command: "draw triangle",
                        tokens,
                    };
                    let y1 = args.next_i32("y1")?;
                    let x1 = args.next_i32("x1")?;
                    let y2 = args.next_i32("y2")?;
                    let x2 = args.next_i32("x2")?;
                    let y3 = args.next_i32("y3")?;
                    let x3 = args.next_i32("x3")?;
                    args.finish(Command::DrawTriangle { y1, x1, y2, x2, y3, x3 })?
                }
                _ => return Err(CommandError::Unknown(line.trim().to_string())),
            },
            "fill" => {
                let mut args = Args { command: "fill", tokens };
                let y = args.next_i32("y")?;
                let x = args.next_i32("x")?;
                args.finish(Command::Fill { y, x })?
            }
            "help" => Args { command: "help", tokens }.finish(Command::Help)?,
            "quit" => Args { command: "quit", tokens }.finish(Command::Quit)?,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}
