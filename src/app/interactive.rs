use crate::core::command::{Command, HELP};
use crate::core::session::EditorSession;
use crate::core::store::Applied;
use crate::domain::fields::{EditorMode, Field, FieldShape, NOTES_ENTRY};
use crate::domain::model::Record;
use crate::domain::ports::ClipboardSink;
use crate::utils::error::Result;
use std::fmt;
use std::io::{BufRead, Write};
use std::time::Instant;

/// Human-readable form layout for `mode`, with current values.
pub fn describe_fields(mode: EditorMode, record: &Record) -> String {
    FieldListing { mode, record }.to_string()
}

struct FieldListing<'a> {
    mode: EditorMode,
    record: &'a Record,
}

impl fmt::Display for FieldListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.mode.sections() {
            writeln!(f, "{}", section.title())?;
            for entry in section.entries() {
                describe_entry(f, entry.label, entry.field, self.record)?;
            }
        }
        describe_entry(f, NOTES_ENTRY.label, NOTES_ENTRY.field, self.record)
    }
}

fn describe_entry(
    out: &mut impl fmt::Write,
    label: &str,
    field: Field,
    record: &Record,
) -> fmt::Result {
    write!(out, "  {:<28} {:<26}", label, field.as_str())?;
    match field {
        Field::Scalar(f) => writeln!(out, " {:?}", record.scalar(f))?,
        Field::List(f) => {
            writeln!(out, " [{} {}]", record.list(f).len(), FieldShape::List)?;
            for (idx, item) in record.list(f).iter().enumerate() {
                writeln!(out, "      {}: {:?}", idx, item)?;
            }
        }
        Field::Pair(f) => {
            writeln!(out, " [{} {}]", record.pairs(f).len(), FieldShape::Pair)?;
            for (idx, person) in record.pairs(f).iter().enumerate() {
                writeln!(out, "      {}: {:?} {:?}", idx, person.name, person.url)?;
            }
        }
    }
    Ok(())
}

/// Runs the interactive editor until `quit` or end of input.
///
/// Each line is one event. Errors in a line are reported and the session
/// continues; only I/O failures end it.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut EditorSession,
    input: R,
    output: &mut W,
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
) -> Result<()> {
    writeln!(output, "Type 'help' for commands, 'show' to print the document.")?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line, e);
                writeln!(output, "error: {}", e.user_friendly_message())?;
                continue;
            }
        };

        match command {
            Command::Edit(mutation) => match session.apply(mutation)? {
                Applied::Changed => writeln!(output, "ok")?,
                Applied::Ignored => writeln!(output, "no such entry, nothing changed")?,
            },
            Command::Mode(mode) if mode == session.mode() => {
                writeln!(output, "mode: {:?} (unchanged)", mode)?;
            }
            Command::Mode(mode) => {
                session.set_mode(mode)?;
                writeln!(output, "mode: {:?} (record reset)", mode)?;
            }
            Command::Show => writeln!(output, "{}", session.output())?,
            Command::Fields => {
                write!(output, "{}", describe_fields(session.mode(), session.record()))?
            }
            Command::Copy => {
                let now = Instant::now();
                session.copy_output(primary, fallback, now);
                writeln!(output, "{}", session.copy_label(now))?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    output.flush()?;
    Ok(())
}
