use clap::Parser;
use jsonld_editor::adapters::clipboard::{CommandClipboard, Osc52Clipboard};
use jsonld_editor::app::{interactive, render};
use jsonld_editor::config::{CliCommand, ProfileArgs, RenderArgs};
use jsonld_editor::utils::{logger, validation};
use jsonld_editor::utils::validation::Validate;
use jsonld_editor::{CliConfig, EditorSession, Record, Result};
use std::time::Instant;

fn main() {
    let config = CliConfig::parse();

    // Initialize logging
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate().and_then(|_| run(config.command)) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Render(args) => run_render(&args),
        CliCommand::Fields { mode } => {
            print!("{}", interactive::describe_fields(mode, &Record::default()));
            Ok(())
        }
        CliCommand::Check(args) => run_check(&args),
        CliCommand::Copy(args) => run_copy(&args),
        CliCommand::Edit(args) => run_edit(&args),
    }
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let profile = render::load_profile(&args.profile)?;
    let script_tag = args.script_tag || profile.script_tag();
    let output = args.output.as_deref().or(profile.output_path());

    let record = render::apply_overrides(profile.record.clone(), args)?;
    let document = render::render_document(&record, script_tag)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", document))?;
            tracing::info!("📁 Document written to {}", path);
        }
        None => println!("{}", document),
    }
    Ok(())
}

fn run_check(args: &ProfileArgs) -> Result<()> {
    let profile = render::load_profile(args)?;
    let warnings = validation::lint_record(&profile.record);
    tracing::debug!("Lint found {} warning(s)", warnings.len());

    print!("{}", validation::lint_report(&warnings));
    Ok(())
}

fn run_copy(args: &ProfileArgs) -> Result<()> {
    let profile = render::load_profile(args)?;
    let mode = profile.mode();
    let mut session = EditorSession::with_record(profile.record, mode)?;

    let now = Instant::now();
    session.copy_output(
        &mut CommandClipboard::detect(),
        &mut Osc52Clipboard::stderr(),
        now,
    );
    println!("{}", session.copy_label(now));
    Ok(())
}

fn run_edit(args: &ProfileArgs) -> Result<()> {
    let profile = render::load_profile(args)?;
    let mode = profile.mode();
    let mut session = EditorSession::with_record(profile.record, mode)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    interactive::run_session(
        &mut session,
        stdin.lock(),
        &mut stdout,
        &mut CommandClipboard::detect(),
        &mut Osc52Clipboard::stderr(),
    )
}
