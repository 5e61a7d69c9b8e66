use crate::domain::fields::EditorMode;
use crate::domain::model::Record;
use crate::utils::error::{EditorError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Profile file: record overrides plus output and editor preferences.
///
/// ```toml
/// [record]
/// companyName = "Acme Corp"
/// socialProfiles = ["https://www.linkedin.com/company/acme"]
///
/// [[record.founders]]
/// name = "Ada"
/// url = "https://example.com/ada"
///
/// [output]
/// script_tag = true
/// path = "./about.jsonld"
///
/// [editor]
/// mode = "allFields"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub record: Record,
    pub output: Option<OutputConfig>,
    pub editor: Option<EditorConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub script_tag: Option<bool>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    pub mode: Option<EditorMode>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

impl ProfileConfig {
    /// Loads a profile from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading profile from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a profile from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EditorError::ProfileParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references from the environment. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn mode(&self) -> EditorMode {
        self.editor
            .as_ref()
            .and_then(|e| e.mode)
            .unwrap_or_default()
    }

    pub fn script_tag(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.script_tag)
            .unwrap_or(false)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.output_path() {
            crate::utils::validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}
