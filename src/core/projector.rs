//! Projection of a [`Record`] onto the schema.org `AboutPage` document.
//!
//! The document borrows from the record and is rebuilt in full on every
//! call. Struct field order is the serialized key order, so the rendered
//! text is stable for an unchanged record.

use crate::domain::model::{Person, Record};
use crate::utils::error::Result;
use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub id: &'a str,
    #[serde(rename = "mainEntityOfPage")]
    pub main_entity_of_page: &'a str,
    #[serde(rename = "isPartOf")]
    pub is_part_of: WebSiteRef<'a>,
    #[serde(rename = "lastReviewed")]
    pub last_reviewed: &'a str,
    #[serde(rename = "reviewedBy")]
    pub reviewed_by: CorporationRef<'a>,
    pub audience: &'a [String],
    pub name: &'a str,
    pub about: Corporation<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebSiteRef<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorporationRef<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Corporation<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub id: &'a str,
    pub description: &'a str,
    pub name: &'a str,
    pub url: &'a str,
    pub main_entity_of_page: &'a str,
    pub same_as: &'a [String],
    pub additional_type: &'a str,
    pub image: &'a [String],
    pub alternate_name: &'a [String],
    pub legal_name: &'a str,
    pub logo: &'a str,
    pub address: PostalAddress<'a>,
    pub location: Place<'a>,
    pub founder: &'a [Person],
    pub award: &'a [String],
    pub employee: &'a [Person],
    pub sub_organization: &'a [String],
    pub contact_point: &'a [String],
    pub disambiguating_description: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub street_address: &'a str,
    pub address_locality: &'a str,
    pub postal_code: &'a str,
    pub address_country: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Place<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address: PostalAddress<'a>,
}

/// Both address positions of the document are built here.
fn postal_address(record: &Record) -> PostalAddress<'_> {
    PostalAddress {
        kind: "PostalAddress",
        street_address: &record.street_address,
        address_locality: &record.address_locality,
        postal_code: &record.postal_code,
        address_country: &record.address_country,
    }
}

pub fn project(record: &Record) -> AboutPage<'_> {
    AboutPage {
        context: SCHEMA_CONTEXT,
        kind: "AboutPage",
        id: &record.page_id,
        main_entity_of_page: &record.main_entity_of_page,
        is_part_of: WebSiteRef {
            kind: "WebSite",
            id: &record.website_id,
        },
        last_reviewed: &record.last_reviewed,
        reviewed_by: CorporationRef {
            kind: "Corporation",
            name: &record.company_name,
            url: &record.url,
        },
        audience: &record.audience,
        name: &record.name,
        about: Corporation {
            kind: "Corporation",
            id: &record.corporation_id,
            description: &record.description,
            name: &record.company_name,
            url: &record.url,
            main_entity_of_page: &record.main_entity_of_page,
            same_as: &record.social_profiles,
            additional_type: &record.additional_type,
            image: &record.images,
            alternate_name: &record.alternate_names,
            legal_name: &record.legal_name,
            logo: &record.logo,
            address: postal_address(record),
            location: Place {
                kind: "Place",
                address: postal_address(record),
            },
            founder: &record.founders,
            award: &record.awards,
            employee: &record.employees,
            sub_organization: &record.sub_organization,
            contact_point: &record.contact_points,
            disambiguating_description: &record.disambiguating_description,
        },
    }
}

/// Pretty-printed JSON-LD text with two-space indentation.
pub fn render(record: &Record) -> Result<String> {
    Ok(serde_json::to_string_pretty(&project(record))?)
}

/// The document as a generic JSON value.
pub fn to_value(record: &Record) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(project(record))?)
}

/// Wraps the rendered document in the script element expected in `<head>`.
pub fn render_script_tag(record: &Record) -> Result<String> {
    let json = render(record)?;
    Ok(format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        json
    ))
}
