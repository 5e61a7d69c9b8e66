//! Line-oriented command grammar of the interactive session.
//!
//! ```text
//! set <field> <text>            replace a text field
//! item <list> <index> <text>    replace one list entry
//! add <list|people>             append an empty entry
//! remove <list|people> <index>  delete an entry
//! pair <people> <index> name|url <text>
//! reset | mode standard|all | show | fields | copy | help | quit
//! ```
//!
//! Text arguments run to the end of the line and may be empty.

use crate::core::store::Mutation;
use crate::domain::fields::{EditorMode, Field, FieldShape, PairKey};
use crate::utils::error::{EditorError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(Mutation),
    Mode(EditorMode),
    Show,
    Fields,
    Copy,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  set <field> <text>                    replace a text field
  item <list> <index> <text>            replace one list entry
  add <list|people>                     append an empty entry
  remove <list|people> <index>          delete an entry
  pair <people> <index> name|url <text> edit a founder/employee
  reset                                 restore the built-in profile
  mode standard|all                     switch form mode (a new mode resets the record)
  show                                  print the JSON-LD document
  fields                                list editable fields
  copy                                  copy the document to the clipboard
  quit                                  leave the session";

/// Splits off the first whitespace-delimited word.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim_start()),
        None => (input, ""),
    }
}

fn require_word<'a>(input: &'a str, what: &str) -> Result<(&'a str, &'a str)> {
    let (word, rest) = next_word(input);
    if word.is_empty() {
        return Err(EditorError::InvalidCommand {
            message: format!("missing {}", what),
        });
    }
    Ok((word, rest))
}

fn parse_index(word: &str) -> Result<usize> {
    word.parse().map_err(|_| EditorError::InvalidCommand {
        message: format!("'{}' is not a valid index", word),
    })
}

fn expect_end(rest: &str, command: &str) -> Result<()> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(EditorError::InvalidCommand {
            message: format!("unexpected text after '{}': '{}'", command, rest.trim()),
        })
    }
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let (verb, rest) = next_word(line.trim_end_matches(['\r', '\n']));

        let command = match verb {
            "" => return Ok(None),
            "set" => {
                let (field, value) = require_word(rest, "field name")?;
                let field = field.parse::<Field>()?.scalar()?;
                Command::Edit(Mutation::SetScalar {
                    field,
                    value: value.to_string(),
                })
            }
            "item" => {
                let (field, rest) = require_word(rest, "field name")?;
                let field = field.parse::<Field>()?.list()?;
                let (index, value) = require_word(rest, "index")?;
                Command::Edit(Mutation::SetListItem {
                    field,
                    index: parse_index(index)?,
                    value: value.to_string(),
                })
            }
            "add" => {
                let (field, rest) = require_word(rest, "field name")?;
                expect_end(rest, "add")?;
                match field.parse::<Field>()? {
                    Field::List(field) => Command::Edit(Mutation::AddListItem { field }),
                    Field::Pair(field) => Command::Edit(Mutation::AddPair { field }),
                    scalar => return Err(scalar.shape_error(FieldShape::List)),
                }
            }
            "remove" => {
                let (field, rest) = require_word(rest, "field name")?;
                let field = field.parse::<Field>()?;
                let (index, rest) = require_word(rest, "index")?;
                expect_end(rest, "remove")?;
                let index = parse_index(index)?;
                match field {
                    Field::List(field) => Command::Edit(Mutation::RemoveListItem { field, index }),
                    Field::Pair(field) => Command::Edit(Mutation::RemovePair { field, index }),
                    scalar => return Err(scalar.shape_error(FieldShape::List)),
                }
            }
            "pair" => {
                let (field, rest) = require_word(rest, "field name")?;
                let field = field.parse::<Field>()?.pair()?;
                let (index, rest) = require_word(rest, "index")?;
                let index = parse_index(index)?;
                let (key, value) = require_word(rest, "'name' or 'url'")?;
                Command::Edit(Mutation::SetPairItem {
                    field,
                    index,
                    key: key.parse::<PairKey>()?,
                    value: value.to_string(),
                })
            }
            "reset" => {
                expect_end(rest, "reset")?;
                Command::Edit(Mutation::Reset)
            }
            "mode" => {
                let (mode, rest) = require_word(rest, "mode")?;
                expect_end(rest, "mode")?;
                Command::Mode(mode.parse()?)
            }
            "show" => Command::Show,
            "fields" => Command::Fields,
            "copy" => Command::Copy,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(EditorError::InvalidCommand {
                    message: format!("unknown command '{}'", other),
                })
            }
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::{ListField, PairField, ScalarField};

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_set_keeps_rest_of_line() {
        assert_eq!(
            parse("set description  Waterproofing, crawl spaces & more"),
            Command::Edit(Mutation::SetScalar {
                field: ScalarField::Description,
                value: "Waterproofing, crawl spaces & more".to_string(),
            })
        );
    }

    #[test]
    fn test_set_allows_empty_value() {
        assert_eq!(
            parse("set notes"),
            Command::Edit(Mutation::SetScalar {
                field: ScalarField::Notes,
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_add_dispatches_on_shape() {
        assert_eq!(
            parse("add images"),
            Command::Edit(Mutation::AddListItem {
                field: ListField::Images
            })
        );
        assert_eq!(
            parse("add employees"),
            Command::Edit(Mutation::AddPair {
                field: PairField::Employees
            })
        );
        assert!(matches!(
            Command::parse("add postalCode"),
            Err(EditorError::FieldShape { .. })
        ));
    }

    #[test]
    fn test_item_and_pair() {
        assert_eq!(
            parse("item socialProfiles 2 https://x.com/bs"),
            Command::Edit(Mutation::SetListItem {
                field: ListField::SocialProfiles,
                index: 2,
                value: "https://x.com/bs".to_string(),
            })
        );
        assert_eq!(
            parse("pair founders 0 url https://example.com"),
            Command::Edit(Mutation::SetPairItem {
                field: PairField::Founders,
                index: 0,
                key: PairKey::Url,
                value: "https://example.com".to_string(),
            })
        );
    }

    #[test]
    fn test_wrong_shape_and_bad_input_are_errors() {
        assert!(Command::parse("set founders Ada").is_err());
        assert!(Command::parse("item name 0 x").is_err());
        assert!(Command::parse("remove images x").is_err());
        assert!(Command::parse("pair founders 0 email a@b.c").is_err());
        assert!(Command::parse("frobnicate").is_err());
        assert!(Command::parse("mode fancy").is_err());
    }

    #[test]
    fn test_blank_line_and_simple_verbs() {
        assert_eq!(Command::parse("   \n").unwrap(), None);
        assert_eq!(parse("mode all"), Command::Mode(EditorMode::AllFields));
        assert_eq!(parse("reset"), Command::Edit(Mutation::Reset));
        assert_eq!(parse("quit"), Command::Quit);
    }
}
