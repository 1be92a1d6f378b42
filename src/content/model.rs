//! Home content document.

use serde::{Deserialize, Deserializer, Serialize};

/// The home section document. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    #[serde(deserialize_with = "null_as_default")]
    pub hero: Hero,
    #[serde(deserialize_with = "null_as_default")]
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

/// Hero banner text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kicker: Option<String>,
}

/// Owner profile and header media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "headerBg", skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,
}

/// A `null` section reads the same as a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl HomeContent {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_to_empty() {
        let content = HomeContent::from_json(r#"{"intro":"hi"}"#).unwrap();
        assert_eq!(content.intro.as_deref(), Some("hi"));
        assert_eq!(content.hero, Hero::default());
        assert_eq!(content.profile, Profile::default());
        assert_eq!(content.highlights, None);
    }

    #[test]
    fn null_sections_read_as_absent() {
        let content = HomeContent::from_json(r#"{"hero":null,"intro":"kept"}"#).unwrap();
        assert_eq!(content.hero, Hero::default());
        assert_eq!(content.intro.as_deref(), Some("kept"));

        let content =
            HomeContent::from_json(r#"{"profile":null,"highlights":null,"intro":null}"#).unwrap();
        assert_eq!(content, HomeContent::default());
    }

    #[test]
    fn header_bg_uses_camel_case_key() {
        let content =
            HomeContent::from_json(r#"{"profile":{"headerBg":"/bg.jpg","unknown":1}}"#).unwrap();
        assert_eq!(content.profile.header_bg.as_deref(), Some("/bg.jpg"));
    }

    #[test]
    fn bundled_document_parses() {
        let content = HomeContent::from_json(crate::page::EMBEDDED_HOME_CONTENT).unwrap();
        assert!(content.hero.title.is_some());
        assert_eq!(content.highlights.map(|h| h.len()), Some(4));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(HomeContent::from_json(r#"{"highlights":"not a list"}"#).is_err());
        assert!(HomeContent::from_json("not json").is_err());
    }
}
