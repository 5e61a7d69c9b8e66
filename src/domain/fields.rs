//! Typed field names of the [`Record`], grouped by shape, plus the form
//! catalog (labels and sections) shown to the user.
//!
//! Field names on the wire are the camelCase keys used in profile files and
//! interactive commands, e.g. `socialProfiles` or `postalCode`.

use crate::domain::model::{Person, Record};
use crate::utils::error::{EditorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Name,
    CompanyName,
    LegalName,
    Description,
    Url,
    PageId,
    MainEntityOfPage,
    WebsiteId,
    LastReviewed,
    CorporationId,
    StreetAddress,
    AddressLocality,
    PostalCode,
    AddressCountry,
    AdditionalType,
    Logo,
    DisambiguatingDescription,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Audience,
    SocialProfiles,
    Images,
    AlternateNames,
    SubOrganization,
    ContactPoints,
    Awards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairField {
    Founders,
    Employees,
}

/// Attribute of a [`Person`] pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKey {
    Name,
    Url,
}

/// Any field, tagged with its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Scalar(ScalarField),
    List(ListField),
    Pair(PairField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Scalar,
    List,
    Pair,
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldShape::Scalar => write!(f, "text"),
            FieldShape::List => write!(f, "list"),
            FieldShape::Pair => write!(f, "name/url list"),
        }
    }
}

impl ScalarField {
    pub const ALL: [ScalarField; 18] = [
        ScalarField::Name,
        ScalarField::CompanyName,
        ScalarField::LegalName,
        ScalarField::Description,
        ScalarField::Url,
        ScalarField::PageId,
        ScalarField::MainEntityOfPage,
        ScalarField::WebsiteId,
        ScalarField::LastReviewed,
        ScalarField::CorporationId,
        ScalarField::StreetAddress,
        ScalarField::AddressLocality,
        ScalarField::PostalCode,
        ScalarField::AddressCountry,
        ScalarField::AdditionalType,
        ScalarField::Logo,
        ScalarField::DisambiguatingDescription,
        ScalarField::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::CompanyName => "companyName",
            ScalarField::LegalName => "legalName",
            ScalarField::Description => "description",
            ScalarField::Url => "url",
            ScalarField::PageId => "pageId",
            ScalarField::MainEntityOfPage => "mainEntityOfPage",
            ScalarField::WebsiteId => "websiteId",
            ScalarField::LastReviewed => "lastReviewed",
            ScalarField::CorporationId => "corporationId",
            ScalarField::StreetAddress => "streetAddress",
            ScalarField::AddressLocality => "addressLocality",
            ScalarField::PostalCode => "postalCode",
            ScalarField::AddressCountry => "addressCountry",
            ScalarField::AdditionalType => "additionalType",
            ScalarField::Logo => "logo",
            ScalarField::DisambiguatingDescription => "disambiguatingDescription",
            ScalarField::Notes => "notes",
        }
    }

    /// Whether the value is expected to hold a URL.
    pub fn is_url(self) -> bool {
        matches!(
            self,
            ScalarField::Url
                | ScalarField::PageId
                | ScalarField::MainEntityOfPage
                | ScalarField::WebsiteId
                | ScalarField::CorporationId
                | ScalarField::AdditionalType
                | ScalarField::Logo
        )
    }
}

impl ListField {
    pub const ALL: [ListField; 7] = [
        ListField::Audience,
        ListField::SocialProfiles,
        ListField::Images,
        ListField::AlternateNames,
        ListField::SubOrganization,
        ListField::ContactPoints,
        ListField::Awards,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListField::Audience => "audience",
            ListField::SocialProfiles => "socialProfiles",
            ListField::Images => "images",
            ListField::AlternateNames => "alternateNames",
            ListField::SubOrganization => "subOrganization",
            ListField::ContactPoints => "contactPoints",
            ListField::Awards => "awards",
        }
    }

    pub fn is_url(self) -> bool {
        matches!(self, ListField::SocialProfiles | ListField::Images)
    }
}

impl PairField {
    pub const ALL: [PairField; 2] = [PairField::Founders, PairField::Employees];

    pub fn as_str(self) -> &'static str {
        match self {
            PairField::Founders => "founders",
            PairField::Employees => "employees",
        }
    }
}

impl PairKey {
    pub fn as_str(self) -> &'static str {
        match self {
            PairKey::Name => "name",
            PairKey::Url => "url",
        }
    }
}

impl Field {
    pub fn shape(self) -> FieldShape {
        match self {
            Field::Scalar(_) => FieldShape::Scalar,
            Field::List(_) => FieldShape::List,
            Field::Pair(_) => FieldShape::Pair,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Scalar(f) => f.as_str(),
            Field::List(f) => f.as_str(),
            Field::Pair(f) => f.as_str(),
        }
    }

    /// Narrows to a scalar field, failing with a shape error otherwise.
    pub fn scalar(self) -> Result<ScalarField> {
        match self {
            Field::Scalar(f) => Ok(f),
            other => Err(other.shape_error(FieldShape::Scalar)),
        }
    }

    pub fn list(self) -> Result<ListField> {
        match self {
            Field::List(f) => Ok(f),
            other => Err(other.shape_error(FieldShape::List)),
        }
    }

    pub fn pair(self) -> Result<PairField> {
        match self {
            Field::Pair(f) => Ok(f),
            other => Err(other.shape_error(FieldShape::Pair)),
        }
    }

    pub(crate) fn shape_error(self, expected: FieldShape) -> EditorError {
        EditorError::FieldShape {
            field: self.as_str().to_string(),
            expected: expected.to_string(),
            actual: self.shape().to_string(),
        }
    }
}

impl FromStr for Field {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(f) = ScalarField::ALL.iter().find(|f| f.as_str() == s) {
            return Ok(Field::Scalar(*f));
        }
        if let Some(f) = ListField::ALL.iter().find(|f| f.as_str() == s) {
            return Ok(Field::List(*f));
        }
        if let Some(f) = PairField::ALL.iter().find(|f| f.as_str() == s) {
            return Ok(Field::Pair(*f));
        }
        Err(EditorError::UnknownField {
            field: s.to_string(),
        })
    }
}

impl FromStr for PairKey {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "name" => Ok(PairKey::Name),
            "url" => Ok(PairKey::Url),
            other => Err(EditorError::InvalidCommand {
                message: format!("pair attribute must be 'name' or 'url', got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Record {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::CompanyName => &self.company_name,
            ScalarField::LegalName => &self.legal_name,
            ScalarField::Description => &self.description,
            ScalarField::Url => &self.url,
            ScalarField::PageId => &self.page_id,
            ScalarField::MainEntityOfPage => &self.main_entity_of_page,
            ScalarField::WebsiteId => &self.website_id,
            ScalarField::LastReviewed => &self.last_reviewed,
            ScalarField::CorporationId => &self.corporation_id,
            ScalarField::StreetAddress => &self.street_address,
            ScalarField::AddressLocality => &self.address_locality,
            ScalarField::PostalCode => &self.postal_code,
            ScalarField::AddressCountry => &self.address_country,
            ScalarField::AdditionalType => &self.additional_type,
            ScalarField::Logo => &self.logo,
            ScalarField::DisambiguatingDescription => &self.disambiguating_description,
            ScalarField::Notes => &self.notes,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Name => &mut self.name,
            ScalarField::CompanyName => &mut self.company_name,
            ScalarField::LegalName => &mut self.legal_name,
            ScalarField::Description => &mut self.description,
            ScalarField::Url => &mut self.url,
            ScalarField::PageId => &mut self.page_id,
            ScalarField::MainEntityOfPage => &mut self.main_entity_of_page,
            ScalarField::WebsiteId => &mut self.website_id,
            ScalarField::LastReviewed => &mut self.last_reviewed,
            ScalarField::CorporationId => &mut self.corporation_id,
            ScalarField::StreetAddress => &mut self.street_address,
            ScalarField::AddressLocality => &mut self.address_locality,
            ScalarField::PostalCode => &mut self.postal_code,
            ScalarField::AddressCountry => &mut self.address_country,
            ScalarField::AdditionalType => &mut self.additional_type,
            ScalarField::Logo => &mut self.logo,
            ScalarField::DisambiguatingDescription => &mut self.disambiguating_description,
            ScalarField::Notes => &mut self.notes,
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Audience => &self.audience,
            ListField::SocialProfiles => &self.social_profiles,
            ListField::Images => &self.images,
            ListField::AlternateNames => &self.alternate_names,
            ListField::SubOrganization => &self.sub_organization,
            ListField::ContactPoints => &self.contact_points,
            ListField::Awards => &self.awards,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Audience => &mut self.audience,
            ListField::SocialProfiles => &mut self.social_profiles,
            ListField::Images => &mut self.images,
            ListField::AlternateNames => &mut self.alternate_names,
            ListField::SubOrganization => &mut self.sub_organization,
            ListField::ContactPoints => &mut self.contact_points,
            ListField::Awards => &mut self.awards,
        }
    }

    pub fn pairs(&self, field: PairField) -> &[Person] {
        match field {
            PairField::Founders => &self.founders,
            PairField::Employees => &self.employees,
        }
    }

    pub fn pairs_mut(&mut self, field: PairField) -> &mut Vec<Person> {
        match field {
            PairField::Founders => &mut self.founders,
            PairField::Employees => &mut self.employees,
        }
    }
}

/// Which sections of the form are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum EditorMode {
    #[default]
    Standard,
    AllFields,
}

impl EditorMode {
    pub fn sections(self) -> &'static [Section] {
        match self {
            EditorMode::Standard => &Section::STANDARD,
            EditorMode::AllFields => &Section::ALL,
        }
    }
}

impl FromStr for EditorMode {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "standard" => Ok(EditorMode::Standard),
            "all" | "allFields" | "all-fields" => Ok(EditorMode::AllFields),
            other => Err(EditorError::InvalidConfigValue {
                field: "mode".to_string(),
                value: other.to_string(),
                reason: "expected 'standard' or 'all-fields'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Basic,
    Website,
    Company,
    Address,
    Social,
    Review,
    Media,
    People,
    Organization,
    Additional,
}

/// One input of the form: a field and the label it is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormEntry {
    pub label: &'static str,
    pub field: Field,
}

const fn entry(label: &'static str, field: Field) -> FormEntry {
    FormEntry { label, field }
}

impl Section {
    pub const STANDARD: [Section; 5] = [
        Section::Basic,
        Section::Website,
        Section::Company,
        Section::Address,
        Section::Social,
    ];

    pub const ALL: [Section; 10] = [
        Section::Basic,
        Section::Website,
        Section::Company,
        Section::Address,
        Section::Social,
        Section::Review,
        Section::Media,
        Section::People,
        Section::Organization,
        Section::Additional,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Basic => "Basic Page Information",
            Section::Website => "Website Information",
            Section::Company => "Company Information",
            Section::Address => "Address Information",
            Section::Social => "Social Profiles",
            Section::Review => "Review Information",
            Section::Media => "Media Information",
            Section::People => "People Information",
            Section::Organization => "Organization Information",
            Section::Additional => "Additional Information",
        }
    }

    pub fn entries(self) -> &'static [FormEntry] {
        match self {
            Section::Basic => BASIC,
            Section::Website => WEBSITE,
            Section::Company => COMPANY,
            Section::Address => ADDRESS,
            Section::Social => SOCIAL,
            Section::Review => REVIEW,
            Section::Media => MEDIA,
            Section::People => PEOPLE,
            Section::Organization => ORGANIZATION,
            Section::Additional => ADDITIONAL,
        }
    }
}

const BASIC: &[FormEntry] = &[
    entry("Page Name", Field::Scalar(ScalarField::Name)),
    entry("Page ID (URL)", Field::Scalar(ScalarField::PageId)),
    entry("Main Entity Page", Field::Scalar(ScalarField::MainEntityOfPage)),
];
const WEBSITE: &[FormEntry] = &[entry("Website ID", Field::Scalar(ScalarField::WebsiteId))];
const COMPANY: &[FormEntry] = &[
    entry("Company Name", Field::Scalar(ScalarField::CompanyName)),
    entry("Legal Name", Field::Scalar(ScalarField::LegalName)),
    entry("Company URL", Field::Scalar(ScalarField::Url)),
    entry("Corporation ID", Field::Scalar(ScalarField::CorporationId)),
    entry("Company Description", Field::Scalar(ScalarField::Description)),
];
const ADDRESS: &[FormEntry] = &[
    entry("Street Address", Field::Scalar(ScalarField::StreetAddress)),
    entry("City", Field::Scalar(ScalarField::AddressLocality)),
    entry("Postal Code", Field::Scalar(ScalarField::PostalCode)),
    entry("Country", Field::Scalar(ScalarField::AddressCountry)),
];
const SOCIAL: &[FormEntry] = &[entry(
    "Social Media URLs",
    Field::List(ListField::SocialProfiles),
)];
const REVIEW: &[FormEntry] = &[entry(
    "Last Reviewed DateTime",
    Field::Scalar(ScalarField::LastReviewed),
)];
const MEDIA: &[FormEntry] = &[
    entry("Logo URL", Field::Scalar(ScalarField::Logo)),
    entry("Additional Type URL", Field::Scalar(ScalarField::AdditionalType)),
    entry("Images", Field::List(ListField::Images)),
    entry("Alternate Names", Field::List(ListField::AlternateNames)),
];
const PEOPLE: &[FormEntry] = &[
    entry("Founders", Field::Pair(PairField::Founders)),
    entry("Employees", Field::Pair(PairField::Employees)),
];
const ORGANIZATION: &[FormEntry] = &[
    entry("Sub Organizations", Field::List(ListField::SubOrganization)),
    entry("Contact Points", Field::List(ListField::ContactPoints)),
    entry("Awards", Field::List(ListField::Awards)),
];
const ADDITIONAL: &[FormEntry] = &[
    entry("Audience Types", Field::List(ListField::Audience)),
    entry(
        "Disambiguating Description",
        Field::Scalar(ScalarField::DisambiguatingDescription),
    ),
];

/// The notes input sits below the sections in every mode.
pub const NOTES_ENTRY: FormEntry = entry(
    "Notes (for reference only)",
    Field::Scalar(ScalarField::Notes),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_by_shape() {
        assert_eq!(
            "postalCode".parse::<Field>().unwrap(),
            Field::Scalar(ScalarField::PostalCode)
        );
        assert_eq!(
            "socialProfiles".parse::<Field>().unwrap(),
            Field::List(ListField::SocialProfiles)
        );
        assert_eq!(
            "founders".parse::<Field>().unwrap(),
            Field::Pair(PairField::Founders)
        );
        assert!("nope".parse::<Field>().is_err());
    }

    #[test]
    fn test_shape_narrowing_rejects_wrong_shape() {
        let field: Field = "founders".parse().unwrap();
        assert!(field.pair().is_ok());
        assert!(matches!(
            field.list(),
            Err(EditorError::FieldShape { .. })
        ));
        assert!(field.scalar().is_err());
    }

    #[test]
    fn test_every_field_name_round_trips_through_parse() {
        for f in ScalarField::ALL {
            assert_eq!(f.as_str().parse::<Field>().unwrap(), Field::Scalar(f));
        }
        for f in ListField::ALL {
            assert_eq!(f.as_str().parse::<Field>().unwrap(), Field::List(f));
        }
        for f in PairField::ALL {
            assert_eq!(f.as_str().parse::<Field>().unwrap(), Field::Pair(f));
        }
    }

    #[test]
    fn test_catalog_covers_every_field_exactly_once() {
        let mut seen: Vec<Field> = Section::ALL
            .iter()
            .flat_map(|s| s.entries().iter().map(|e| e.field))
            .collect();
        seen.push(NOTES_ENTRY.field);

        let total = ScalarField::ALL.len() + ListField::ALL.len() + PairField::ALL.len();
        assert_eq!(seen.len(), total);
        for (i, f) in seen.iter().enumerate() {
            assert!(!seen[i + 1..].contains(f), "{} listed twice", f);
        }
    }

    #[test]
    fn test_standard_mode_is_prefix_of_all_fields() {
        let standard = EditorMode::Standard.sections();
        let all = EditorMode::AllFields.sections();
        assert_eq!(standard.len(), 5);
        assert_eq!(&all[..5], standard);
    }

    #[test]
    fn test_scalar_accessors_agree() {
        let mut record = Record::default();
        *record.scalar_mut(ScalarField::AddressLocality) = "Hartford".to_string();
        assert_eq!(record.address_locality, "Hartford");
        assert_eq!(record.scalar(ScalarField::AddressLocality), "Hartford");
    }
}
