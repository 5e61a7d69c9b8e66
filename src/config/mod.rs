pub mod profile;

use crate::domain::fields::EditorMode;
use crate::utils::error::{EditorError, Result};
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "jsonld-editor")]
#[command(about = "Edit an organization profile and render its schema.org AboutPage JSON-LD")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the JSON-LD document
    Render(RenderArgs),
    /// List the editable fields of a form mode
    Fields {
        #[arg(long, value_enum, default_value = "standard")]
        mode: EditorMode,
    },
    /// Report URL fields that do not parse as http(s) URLs
    Check(ProfileArgs),
    /// Copy the JSON-LD document to the clipboard
    Copy(ProfileArgs),
    /// Edit the profile interactively
    Edit(ProfileArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    /// TOML profile whose [record] table overrides the built-in profile
    #[arg(short, long)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Override a text field, e.g. --set postalCode=06483
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub overrides: Vec<String>,

    /// Set lastReviewed to the current local time
    #[arg(long)]
    pub stamp_reviewed: bool,

    /// Wrap the document in a <script type="application/ld+json"> element
    #[arg(long)]
    pub script_tag: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

impl RenderArgs {
    /// Splits each `--set` argument at the first `=`.
    pub fn parsed_overrides(&self) -> Result<Vec<(&str, &str)>> {
        self.overrides
            .iter()
            .map(|raw| {
                raw.split_once('=')
                    .ok_or_else(|| EditorError::InvalidConfigValue {
                        field: "--set".to_string(),
                        value: raw.clone(),
                        reason: "expected FIELD=VALUE".to_string(),
                    })
            })
            .collect()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let CliCommand::Render(args) = &self.command {
            args.parsed_overrides()?;
            if let Some(path) = &args.output {
                crate::utils::validation::validate_path("--output", path)?;
            }
        }
        Ok(())
    }
}
