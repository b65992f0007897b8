//! The key/value bag handed to a stub template.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::naming::{CaseHelper, NamingVariants};

/// A single value in the data bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl TemplateValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Fields available to a stub while it renders.
///
/// Built from the caller's option fields with the naming variants merged on
/// top: a caller option can never shadow `className`, `fileName` and the other
/// naming keys. The case helpers are not data; renderers expose
/// [`TemplateDataBag::helpers`] as callables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateDataBag {
    fields: BTreeMap<String, TemplateValue>,
}

impl TemplateDataBag {
    /// Merge option fields with the naming variants. Naming wins on collision.
    pub fn assemble<I, K>(naming: &NamingVariants, option_fields: I) -> Self
    where
        I: IntoIterator<Item = (K, TemplateValue)>,
        K: Into<String>,
    {
        let mut fields: BTreeMap<String, TemplateValue> = option_fields
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();

        for (key, value) in naming.fields() {
            fields.insert(key.to_string(), TemplateValue::from(value));
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.fields.get(key)
    }

    /// Text value of a field, if it is text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(TemplateValue::as_text)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Case-conversion helpers callable from every template.
    pub fn helpers(&self) -> &'static [CaseHelper] {
        &CaseHelper::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_fields_win_over_options() {
        let naming = NamingVariants::derive("weather-station");
        let bag = TemplateDataBag::assemble(
            &naming,
            [
                ("className", TemplateValue::from("Hijacked")),
                ("endpoint", TemplateValue::from("custom")),
                ("schedule", TemplateValue::from("* * * * * *")),
            ],
        );

        assert_eq!(bag.text("className"), Some("WeatherStation"));
        assert_eq!(bag.text("endpoint"), Some("weather-station"));
        assert_eq!(bag.text("schedule"), Some("* * * * * *"));
    }

    #[test]
    fn every_naming_key_is_present() {
        let bag = TemplateDataBag::assemble(&NamingVariants::derive("x"), Vec::<(String, _)>::new());
        for key in NamingVariants::KEYS {
            assert!(bag.contains(key), "missing {key}");
        }
        assert_eq!(bag.len(), NamingVariants::KEYS.len());
    }

    #[test]
    fn serializes_as_flat_object() {
        let naming = NamingVariants::derive("tiles");
        let bag = TemplateDataBag::assemble(
            &naming,
            [
                ("tags", TemplateValue::List(vec!["a".into()])),
                ("public", TemplateValue::Flag(true)),
            ],
        );
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["a"]));
        assert_eq!(json["public"], serde_json::json!(true));
        assert_eq!(json["fileName"], serde_json::json!("tiles"));
    }

    #[test]
    fn exposes_all_helpers() {
        let bag = TemplateDataBag::default();
        let names: Vec<_> = bag.helpers().iter().map(|h| h.name()).collect();
        assert_eq!(names, ["pascalCase", "camelCase", "snakeCase", "kebabCase"]);
    }
}
