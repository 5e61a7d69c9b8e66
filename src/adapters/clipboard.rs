//! Clipboard sinks.
//!
//! [`CommandClipboard`] pipes the text into the platform clipboard program
//! and is the primary path. [`Osc52Clipboard`] asks the terminal to set its
//! selection with an OSC 52 escape sequence and serves as the fallback.

use crate::domain::ports::ClipboardSink;
use crate::utils::error::{EditorError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::io::{ErrorKind, IsTerminal, Write};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardProgram {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardProgram {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Copies by spawning the first clipboard program that exists.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    candidates: Vec<ClipboardProgram>,
}

impl CommandClipboard {
    pub fn new(candidates: Vec<ClipboardProgram>) -> Self {
        Self { candidates }
    }

    /// Programs usually available on the current platform, most specific first.
    pub fn detect() -> Self {
        let candidates = if cfg!(target_os = "macos") {
            vec![ClipboardProgram::new("pbcopy", &[])]
        } else if cfg!(windows) {
            vec![ClipboardProgram::new("clip", &[])]
        } else {
            let mut programs = Vec::new();
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                programs.push(ClipboardProgram::new("wl-copy", &[]));
            }
            programs.push(ClipboardProgram::new("xclip", &["-selection", "clipboard"]));
            programs.push(ClipboardProgram::new("xsel", &["--clipboard", "--input"]));
            programs
        };
        Self::new(candidates)
    }

    /// Always waits for the child, even when the pipe breaks mid-write.
    fn run(program: &ClipboardProgram, text: &str) -> Result<()> {
        let mut child = Command::new(&program.program)
            .args(&program.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| EditorError::ClipboardError {
                message: match e.kind() {
                    ErrorKind::NotFound => format!("{} not installed", program.program),
                    _ => format!("{} could not start: {}", program.program, e),
                },
            })?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(|e| EditorError::ClipboardError {
            message: format!("{} did not finish: {}", program.program, e),
        })?;

        written.map_err(|e| EditorError::ClipboardError {
            message: format!("{} stopped reading: {}", program.program, e),
        })?;

        if !status.success() {
            return Err(EditorError::ClipboardError {
                message: format!("{} exited with {}", program.program, status),
            });
        }
        Ok(())
    }
}

impl ClipboardSink for CommandClipboard {
    fn name(&self) -> &str {
        "clipboard program"
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut last_error = None;

        for program in &self.candidates {
            match Self::run(program, text) {
                Ok(()) => {
                    tracing::debug!("{} accepted the document", program.program);
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!("Trying next clipboard program: {}", e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| EditorError::ClipboardError {
            message: "no clipboard program found".to_string(),
        }))
    }
}

/// Sets the terminal selection through an OSC 52 escape sequence.
pub struct Osc52Clipboard<W: Write> {
    out: W,
    is_terminal: bool,
}

impl Osc52Clipboard<std::io::Stderr> {
    pub fn stderr() -> Self {
        let out = std::io::stderr();
        let is_terminal = out.is_terminal();
        Self { out, is_terminal }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W, is_terminal: bool) -> Self {
        Self { out, is_terminal }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "terminal selection"
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        if !self.is_terminal {
            return Err(EditorError::ClipboardError {
                message: "output is not a terminal".to_string(),
            });
        }
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
