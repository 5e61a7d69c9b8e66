use anyhow::Result;
use jsonld_editor::app::interactive::run_session;
use jsonld_editor::app::render::{apply_overrides, load_profile, render_document};
use jsonld_editor::config::{ProfileArgs, RenderArgs};
use jsonld_editor::domain::ports::ClipboardSink;
use jsonld_editor::{EditorMode, EditorSession, Person, Record};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[derive(Default)]
struct MemoryClipboard {
    contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_text(&mut self, text: &str) -> jsonld_editor::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

fn run_script(session: &mut EditorSession, script: &str) -> Result<(String, MemoryClipboard)> {
    let mut out = Vec::new();
    let mut clipboard = MemoryClipboard::default();
    let mut unused = MemoryClipboard::default();
    run_session(
        session,
        Cursor::new(script.as_bytes()),
        &mut out,
        &mut clipboard,
        &mut unused,
    )?;
    assert!(unused.contents.is_none());
    Ok((String::from_utf8(out)?, clipboard))
}

#[test]
fn test_interactive_people_editing() -> Result<()> {
    let mut session = EditorSession::new()?;
    let script = "\
add founders
pair founders 1 name Ada Lovelace
pair founders 1 url https://example.com/ada
pair founders 0 name L. Janesky
add employees
pair employees 0 url https://example.com/sam
";
    run_script(&mut session, script)?;

    assert_eq!(
        session.record().founders,
        vec![
            Person::new("L. Janesky", "http://www.larryjanesky.com/"),
            Person::new("Ada Lovelace", "https://example.com/ada"),
        ]
    );
    assert_eq!(
        session.record().employees,
        vec![Person::new("", "https://example.com/sam")]
    );
    assert!(session.output().contains("\"name\": \"Ada Lovelace\""));
    Ok(())
}

#[test]
fn test_copy_writes_current_output() -> Result<()> {
    let mut session = EditorSession::new()?;
    let (out, clipboard) = run_script(&mut session, "set postalCode 10001\ncopy\n")?;

    assert!(out.contains("Copied!"));
    let copied = clipboard.contents.unwrap_or_default();
    assert_eq!(copied, session.output());
    assert_eq!(copied.matches("\"postalCode\": \"10001\"").count(), 2);
    Ok(())
}

#[test]
fn test_mode_switch_and_reset_restore_defaults() -> Result<()> {
    let mut session = EditorSession::new()?;
    run_script(&mut session, "set name Changed\nmode all\n")?;
    assert_eq!(session.mode(), EditorMode::AllFields);
    assert_eq!(session.record(), &Record::default());

    run_script(&mut session, "remove socialProfiles 0\nreset\n")?;
    assert_eq!(session.record().social_profiles.len(), 4);
    Ok(())
}

#[test]
fn test_profile_file_render_with_overrides() -> Result<()> {
    let mut profile = NamedTempFile::new()?;
    profile.write_all(
        br#"
[record]
companyName = "Acme Corp"
socialProfiles = []
alternateNames = ["Acme"]

[output]
script_tag = true
"#,
    )?;

    let profile_args = ProfileArgs {
        profile: Some(profile.path().to_string_lossy().into_owned()),
    };
    let config = load_profile(&profile_args)?;
    let args = RenderArgs {
        profile: profile_args,
        overrides: vec!["addressLocality=Shelton".to_string()],
        ..RenderArgs::default()
    };

    let record = apply_overrides(config.record.clone(), &args)?;
    let document = render_document(&record, config.script_tag())?;

    assert!(document.starts_with("<script type=\"application/ld+json\">"));
    assert!(document.contains("\"sameAs\": []"));
    assert!(document.contains("\"name\": \"Acme Corp\""));
    assert_eq!(document.matches("\"addressLocality\": \"Shelton\"").count(), 2);
    Ok(())
}

#[test]
fn test_missing_profile_file_is_io_error() {
    let args = ProfileArgs {
        profile: Some("/nonexistent/dir/profile.toml".to_string()),
    };
    assert!(matches!(
        load_profile(&args),
        Err(jsonld_editor::EditorError::IoError(_))
    ));
}
