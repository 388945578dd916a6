use std::{collections::BTreeMap, fmt};

use serde::Deserialize;
use strum::VariantArray;

/// Text fields of the contact form, by their multipart names.
#[derive(VariantArray, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Type,
    /// Sent as `org` by one form revision and `company` by another
    #[serde(alias = "company")]
    Org,
    Name,
    Email,
    Phone,
    Region,
    Subject,
    Message,
    FilesLink,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Org => "org",
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Region => "region",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::FilesLink => "filesLink",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded text fields, keyed by field name.
///
/// A name seen more than once keeps its last value: [`FormFields::insert`]
/// overwrites and hands back what it replaced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    /// Store the trimmed value under `name`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: &str) -> Option<String> {
        self.0.insert(name.into(), value.trim().to_owned())
    }

    /// Value under `name`, empty when the field was never sent.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }

    /// First non-empty value among `names`.
    pub fn first_of(&self, names: &[&str]) -> &str {
        names
            .iter()
            .map(|name| self.get(name))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The canonical set of fields a deployment insists on.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct RequiredFields(Vec<Field>);

impl Default for RequiredFields {
    fn default() -> Self {
        Self(vec![
            Field::Type,
            Field::Name,
            Field::Phone,
            Field::Email,
            Field::Message,
        ])
    }
}

impl RequiredFields {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut unique = Vec::new();
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }

        Self(unique)
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The required fields for which `value` yields an empty string after trimming.
    pub fn missing<'a>(&self, value: impl Fn(Field) -> &'a str) -> RequiredFields {
        Self(self.iter().filter(|f| value(*f).trim().is_empty()).collect())
    }
}

impl fmt::Display for RequiredFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(field.name())?;
        }

        Ok(())
    }
}
