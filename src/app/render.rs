use crate::config::profile::ProfileConfig;
use crate::config::{ProfileArgs, RenderArgs};
use crate::core::projector;
use crate::core::store::RecordStore;
use crate::domain::fields::{Field, ScalarField};
use crate::domain::model::Record;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::{DateTime, Local, TimeZone};

/// Same layout as the `lastReviewed` value of the built-in profile.
pub const REVIEWED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_reviewed<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(REVIEWED_FORMAT).to_string()
}

/// Loads the profile named on the command line, or the empty profile.
pub fn load_profile(args: &ProfileArgs) -> Result<ProfileConfig> {
    match &args.profile {
        Some(path) => {
            let profile = ProfileConfig::from_file(path)?;
            profile.validate()?;
            tracing::info!("Loaded profile from {}", path);
            Ok(profile)
        }
        None => Ok(ProfileConfig::default()),
    }
}

/// Applies `--set` overrides and `--stamp-reviewed` on top of `record`.
pub fn apply_overrides(record: Record, args: &RenderArgs) -> Result<Record> {
    let mut store = RecordStore::with_record(record);

    for (name, value) in args.parsed_overrides()? {
        let field: ScalarField = name.parse::<Field>()?.scalar()?;
        store.set_scalar(field, value);
    }

    if args.stamp_reviewed {
        let stamp = format_reviewed(&Local::now());
        tracing::debug!("Stamping lastReviewed with {}", stamp);
        store.set_scalar(ScalarField::LastReviewed, stamp);
    }

    Ok(store.record().clone())
}

/// Document text for the `render` subcommand.
pub fn render_document(record: &Record, script_tag: bool) -> Result<String> {
    if script_tag {
        projector::render_script_tag(record)
    } else {
        projector::render(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EditorError;
    use chrono::Utc;

    fn args_with(overrides: &[&str]) -> RenderArgs {
        RenderArgs {
            overrides: overrides.iter().map(|s| s.to_string()).collect(),
            ..RenderArgs::default()
        }
    }

    #[test]
    fn test_overrides_set_scalars() {
        let record =
            apply_overrides(Record::default(), &args_with(&["addressLocality=Shelton"])).unwrap();
        assert_eq!(record.address_locality, "Shelton");
        assert_eq!(record.postal_code, "06483");
    }

    #[test]
    fn test_overrides_reject_list_fields() {
        let result = apply_overrides(Record::default(), &args_with(&["images=a.png"]));
        assert!(matches!(result, Err(EditorError::FieldShape { .. })));
    }

    #[test]
    fn test_format_reviewed_matches_profile_layout() {
        let at = Utc.with_ymd_and_hms(2023, 8, 25, 18, 51, 11).unwrap();
        assert_eq!(format_reviewed(&at), Record::default().last_reviewed);
    }

    #[test]
    fn test_stamp_reviewed_replaces_default() {
        let args = RenderArgs {
            stamp_reviewed: true,
            ..RenderArgs::default()
        };
        let record = apply_overrides(Record::default(), &args).unwrap();
        assert_ne!(record.last_reviewed, Record::default().last_reviewed);
        assert_eq!(record.last_reviewed.len(), "2023-08-25 18:51:11".len());
    }
}
