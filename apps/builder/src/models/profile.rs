use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::models::lenient;

/// The profile document: personal details plus free-form resume sections.
///
/// `sections` stays as raw YAML; each renderer decodes the slice it knows how
/// to draw into one of the typed records below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient::or_default")]
    pub personal: Personal,
    #[serde(deserialize_with = "lenient::string_keyed")]
    pub sections: BTreeMap<String, Value>,
}

impl Profile {
    pub fn from_document(doc: &Mapping) -> Self {
        lenient::decode(&Value::Mapping(doc.clone()))
    }

    pub fn section(&self, id: &str) -> Option<&Value> {
        self.sections.get(id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Personal {
    #[serde(deserialize_with = "lenient::text")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub contact: Contact,
    #[serde(deserialize_with = "lenient::or_default")]
    pub profile_image: ProfileImage,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub location: Location,
    #[serde(deserialize_with = "lenient::records")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "lenient::text")]
    pub city: String,
    #[serde(deserialize_with = "lenient::text")]
    pub state: String,
    #[serde(deserialize_with = "lenient::text")]
    pub zip: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "lenient::text")]
    pub display: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileImage {
    #[serde(deserialize_with = "lenient::text")]
    pub path: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Section records
// ────────────────────────────────────────────────────────────────────────────

/// The part every section shares. Unrecognised sections decode only this.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SectionHeading {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationSection {
    #[serde(deserialize_with = "lenient::records")]
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Degree {
    #[serde(deserialize_with = "lenient::text")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::text")]
    pub graduation_year: String,
    #[serde(deserialize_with = "lenient::text")]
    pub institution: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillsSection {
    #[serde(deserialize_with = "lenient::records")]
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub items: Vec<String>,
}

/// Flat item lists: favorite dishes, interests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemList {
    #[serde(deserialize_with = "lenient::texts")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    #[serde(deserialize_with = "lenient::text")]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceSection {
    #[serde(deserialize_with = "lenient::records")]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "lenient::text")]
    pub position: String,
    #[serde(deserialize_with = "lenient::text")]
    pub company: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub achievements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(yaml: &str) -> Profile {
        let doc: Mapping = serde_yaml::from_str(yaml).unwrap();
        Profile::from_document(&doc)
    }

    #[test]
    fn test_personal_fields_decode() {
        let p = profile(
            r#"
personal:
  full_name: Jane Doe
  contact:
    email: jane@example.com
    location: {city: Austin, state: TX, zip: 78701}
    links:
      - display: janedoe.dev
  profile_image:
    path: images/jane.jpg
"#,
        );
        assert_eq!(p.personal.full_name, "Jane Doe");
        assert_eq!(p.personal.contact.email, "jane@example.com");
        assert_eq!(p.personal.contact.location.zip, "78701");
        assert_eq!(p.personal.contact.links[0].display, "janedoe.dev");
        assert_eq!(p.personal.profile_image.path, "images/jane.jpg");
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let p = Profile::from_document(&Mapping::new());
        assert_eq!(p.personal.full_name, "");
        assert!(p.sections.is_empty());
    }

    #[test]
    fn test_sections_not_a_mapping_is_empty() {
        let p = profile("personal: {full_name: Jane}\nsections: [a, b]\n");
        assert_eq!(p.personal.full_name, "Jane");
        assert!(p.sections.is_empty());
    }

    #[test]
    fn test_numeric_graduation_year_is_text() {
        let value: Value =
            serde_yaml::from_str("degrees:\n  - degree: BSc\n    graduation_year: 2015\n").unwrap();
        let edu: EducationSection = lenient::decode(&value);
        assert_eq!(edu.degrees[0].graduation_year, "2015");
        assert_eq!(edu.degrees[0].institution, "");
    }
}
