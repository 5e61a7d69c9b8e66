use crate::domain::fields::{ListField, PairField, ScalarField};
use crate::domain::model::Record;
use crate::utils::error::{EditorError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => {
                if url.host_str().map_or(true, str::is_empty) {
                    return Err(EditorError::InvalidConfigValue {
                        field: field_name.to_string(),
                        value: url_str.to_string(),
                        reason: "URL has no host".to_string(),
                    });
                }
                Ok(())
            }
            scheme => Err(EditorError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Advisory finding about a URL-bearing field. Never blocks rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    /// Field path such as `socialProfiles[2]` or `founders[0].url`.
    pub location: String,
    pub message: String,
}

/// Checks every URL-bearing field of the record.
///
/// Empty values are skipped: an unfilled entry is a normal editing state.
pub fn lint_record(record: &Record) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    let mut check = |location: String, value: &str| {
        if value.is_empty() {
            return;
        }
        if let Err(EditorError::InvalidConfigValue { reason, .. }) = validate_url(&location, value)
        {
            warnings.push(LintWarning {
                location,
                message: reason,
            });
        }
    };

    for field in ScalarField::ALL.into_iter().filter(|f| f.is_url()) {
        check(field.as_str().to_string(), record.scalar(field));
    }

    for field in ListField::ALL.into_iter().filter(|f| f.is_url()) {
        for (idx, value) in record.list(field).iter().enumerate() {
            check(format!("{}[{}]", field.as_str(), idx), value);
        }
    }

    for field in PairField::ALL {
        for (idx, person) in record.pairs(field).iter().enumerate() {
            check(format!("{}[{}].url", field.as_str(), idx), &person.url);
        }
    }

    warnings
}

/// Text printed by `check`: one line per warning, or a single all-clear line.
pub fn lint_report(warnings: &[LintWarning]) -> String {
    if warnings.is_empty() {
        return "✅ All URL fields look valid\n".to_string();
    }
    warnings
        .iter()
        .map(|w| format!("⚠️  {}: {}\n", w.location, w.message))
        .collect()
}
