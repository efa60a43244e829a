//! Company - One Row of the YC Dataset

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DISPLAY_SUBCATEGORY_LIMIT;

/// A Y Combinator company entry
///
/// Field names on the wire follow the static `yc_batches.json` export.
/// Missing or `null` fields read as empty strings; anything else that is not
/// a string fails the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company name (not unique)
    #[serde(rename = "Company", default, deserialize_with = "null_as_empty")]
    pub company: String,
    /// Company website URL
    #[serde(rename = "Website", default, deserialize_with = "null_as_empty")]
    pub website: String,
    /// YC profile URL
    #[serde(rename = "YC_Link", default, deserialize_with = "null_as_empty")]
    pub yc_link: String,
    /// Primary category
    #[serde(rename = "Category", default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(rename = "Subcategory", default, deserialize_with = "null_as_empty")]
    pub subcategory: String,
    /// Short description
    #[serde(rename = "Description", default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// City, country
    #[serde(rename = "Location", default, deserialize_with = "null_as_empty")]
    pub location: String,
    /// Batch label, e.g. "Winter 2025"
    #[serde(rename = "Batch", default, deserialize_with = "null_as_empty")]
    pub batch: String,
    /// One-line pitch
    #[serde(rename = "YC_OneLiner", default, deserialize_with = "null_as_empty")]
    pub one_liner: String,
    /// Longer description from the YC profile
    #[serde(rename = "YC_Description", default, deserialize_with = "null_as_empty")]
    pub yc_description: String,
    #[serde(rename = "Subcategory_1", default, deserialize_with = "null_as_empty")]
    pub subcategory_1: String,
    #[serde(rename = "Subcategory_2", default, deserialize_with = "null_as_empty")]
    pub subcategory_2: String,
    #[serde(rename = "Subcategory_3", default, deserialize_with = "null_as_empty")]
    pub subcategory_3: String,
    #[serde(rename = "Subcategory_4", default, deserialize_with = "null_as_empty")]
    pub subcategory_4: String,
    #[serde(rename = "Subcategory_5", default, deserialize_with = "null_as_empty")]
    pub subcategory_5: String,
    #[serde(rename = "Subcategory_6", default, deserialize_with = "null_as_empty")]
    pub subcategory_6: String,
    #[serde(rename = "Subcategory_7", default, deserialize_with = "null_as_empty")]
    pub subcategory_7: String,
    #[serde(rename = "Subcategory_8", default, deserialize_with = "null_as_empty")]
    pub subcategory_8: String,
}

impl CompanyRecord {
    /// Non-empty `Subcategory_1..8` labels, in column order
    pub fn subcategories(&self) -> impl Iterator<Item = &str> {
        [
            &self.subcategory_1,
            &self.subcategory_2,
            &self.subcategory_3,
            &self.subcategory_4,
            &self.subcategory_5,
            &self.subcategory_6,
            &self.subcategory_7,
            &self.subcategory_8,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
    }

    /// Subcategory chips shown on a listing row
    pub fn display_subcategories(&self) -> Vec<&str> {
        self.subcategories().take(DISPLAY_SUBCATEGORY_LIMIT).collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
