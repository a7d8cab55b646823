//! Asset info record entity
//!
//! One hand-curated `info.json` per asset. Every scalar field is a [`Field`] so a
//! record can be partially filled; a template has every field present but empty.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that is either present in the record or absent from it.
///
/// `Absent` reads from a missing key or `null` and is omitted on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Present(T),
    Absent,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }
}

impl<T: Default> Field<T> {
    /// The present value, or the type's empty value when absent
    pub fn value_or_empty(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Absent,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Present(value) => value.serialize(serializer),
            Field::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub url: Field<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetInfo {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_absent")]
    pub token_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub symbol: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub decimals: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub website: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub explorer: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl AssetInfo {
    /// A record with every key present and an empty placeholder value.
    pub fn template(token_id: &str) -> Self {
        let empty = || Field::Present(String::new());
        Self {
            name: empty(),
            token_type: empty(),
            symbol: empty(),
            decimals: Field::Present(0),
            description: empty(),
            website: empty(),
            explorer: empty(),
            status: empty(),
            id: Field::Present(token_id.to_string()),
            links: Some(vec![Link {
                name: empty(),
                url: empty(),
            }]),
            tags: Some(vec![String::new()]),
        }
    }
}
