use serde::{Deserialize, Serialize};

/// A `{name, url}` entry of the founders/employees lists.
///
/// Either attribute may be empty while the user is still typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub url: String,
}

impl Person {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Every editable field of the organization profile.
///
/// `Default` yields the built-in profile; a profile file only needs to
/// name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    pub name: String,
    pub company_name: String,
    pub legal_name: String,
    pub description: String,
    pub url: String,
    pub page_id: String,
    pub main_entity_of_page: String,
    pub website_id: String,
    pub last_reviewed: String,
    pub audience: Vec<String>,
    pub corporation_id: String,
    pub street_address: String,
    pub address_locality: String,
    pub postal_code: String,
    pub address_country: String,
    pub social_profiles: Vec<String>,
    pub additional_type: String,
    pub images: Vec<String>,
    pub logo: String,
    pub alternate_names: Vec<String>,
    pub founders: Vec<Person>,
    pub employees: Vec<Person>,
    pub sub_organization: Vec<String>,
    pub contact_points: Vec<String>,
    pub awards: Vec<String>,
    pub disambiguating_description: String,
    /// Free-form notes for the editor's own reference. Never projected.
    pub notes: String,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            name: "About Basement Systems".to_string(),
            company_name: "Basement Systems".to_string(),
            legal_name: "Basement Systems, Inc.".to_string(),
            description: "About Basement Systems, Waterproofing company. Basement Systems Inc. , \
                based in Seymour, Connecticut, is a network of basement waterproofing and crawl \
                space repair contractors spanning across the United States and Canada..."
                .to_string(),
            url: "https://www.basementsystems.com/".to_string(),
            page_id: "https://www.basementsystems.com/company.html".to_string(),
            main_entity_of_page: "https://www.basementsystems.com/".to_string(),
            website_id: "https:///#website".to_string(),
            last_reviewed: "2023-08-25 18:51:11".to_string(),
            audience: Vec::new(),
            corporation_id:
                "https://www.basementsystems.com/company.html/#/schema/corporation/4f38108bdab5a435"
                    .to_string(),
            street_address: "60 Silvermine Road".to_string(),
            address_locality: "Seymour".to_string(),
            postal_code: "06483".to_string(),
            address_country: "US".to_string(),
            social_profiles: vec![
                "https://www.bbb.org/us/ct/seymour/profile/basement-waterproofing/basement-systems-inc-0111-87118487".to_string(),
                "https://www.linkedin.com/company/basement-systems-inc-".to_string(),
                "https://twitter.com/basementsystems".to_string(),
                "https://www.facebook.com/basementsystemsinc/".to_string(),
            ],
            additional_type: "https://en.wikipedia.org/wiki/Basement_waterproofing".to_string(),
            images: Vec::new(),
            logo: "https://cdn.treehouseinternetgroup.com/cms_images/215/bs-logo-2018.svg"
                .to_string(),
            alternate_names: vec!["Basement Systems".to_string(), "Inc.".to_string()],
            founders: vec![Person::new("Larry Janesky", "http://www.larryjanesky.com/")],
            employees: Vec::new(),
            sub_organization: Vec::new(),
            contact_points: Vec::new(),
            awards: Vec::new(),
            disambiguating_description: "Basement Systems: Waterproofing company.".to_string(),
            notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_has_four_social_profiles_in_order() {
        let record = Record::default();
        assert_eq!(record.social_profiles.len(), 4);
        assert!(record.social_profiles[0].contains("bbb.org"));
        assert!(record.social_profiles[1].contains("linkedin.com"));
        assert!(record.social_profiles[2].contains("twitter.com"));
        assert!(record.social_profiles[3].contains("facebook.com"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let record: Record =
            serde_json::from_str(r#"{"companyName": "Acme", "images": ["a.png"]}"#).unwrap();
        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.images, vec!["a.png".to_string()]);
        assert_eq!(record.postal_code, "06483");
        assert_eq!(record.founders.len(), 1);
    }

    #[test]
    fn test_partial_person_defaults_missing_attribute() {
        let person: Person = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(person, Person::new("Ada", ""));
    }
}
