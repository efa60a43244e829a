//! Stats and category options
//!
//! `top_categories` is the first five distinct categories in dataset order.
//! It is not a frequency ranking; callers wanting "most common" must not
//! rely on it.

use ahash::AHashSet;
use hashlink::LinkedHashSet;

use crate::constants::{CATEGORY_OPTION_MAX_LEN, CATEGORY_OPTION_MAX_WORDS, TOP_CATEGORY_LIMIT};
use crate::domain::company::CompanyRecord;
use crate::domain::summary::DatasetStats;
use crate::helpers::{separator_token_count, utf16_len};

/// Distinct non-empty categories in first-seen order
fn distinct_categories<'a, I>(records: I) -> LinkedHashSet<&'a str>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut categories = LinkedHashSet::new();
    for record in records {
        insert_first_seen(&mut categories, record.category.as_str());
    }
    categories
}

/// `LinkedHashSet::insert` moves an existing value to the back; keep its
/// original position instead
fn insert_first_seen<'a>(set: &mut LinkedHashSet<&'a str>, value: &'a str) {
    if !value.is_empty() && !set.contains(value) {
        set.insert(value);
    }
}

/// Aggregate figures over `records`
pub fn compute_stats<'a, I>(records: I) -> DatasetStats
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut total = 0;
    let mut categories: LinkedHashSet<&str> = LinkedHashSet::new();
    let mut locations: AHashSet<&str> = AHashSet::new();

    for record in records {
        total += 1;
        insert_first_seen(&mut categories, &record.category);
        if !record.location.is_empty() {
            locations.insert(&record.location);
        }
    }

    DatasetStats {
        total,
        distinct_category_count: categories.len(),
        distinct_location_count: locations.len(),
        top_categories: categories
            .iter()
            .take(TOP_CATEGORY_LIMIT)
            .map(|c| c.to_string())
            .collect(),
    }
}

/// Broad category labels offered in the filter menu, sorted ascending
///
/// Labels with more than two tokens or longer than 25 UTF-16 units are hidden.
pub fn derive_category_options<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut options: Vec<String> = distinct_categories(records)
        .into_iter()
        .filter(|c| {
            separator_token_count(c) <= CATEGORY_OPTION_MAX_WORDS
                && utf16_len(c) <= CATEGORY_OPTION_MAX_LEN
        })
        .map(str::to_string)
        .collect();
    options.sort();
    options
}

/// Options not yet selected, compared case-insensitively
pub fn available_category_options<'a, S>(options: &'a [String], selected: S) -> Vec<&'a str>
where
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    let selected: AHashSet<String> = selected
        .into_iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();
    options
        .iter()
        .filter(|option| !selected.contains(&option.to_lowercase()))
        .map(String::as_str)
        .collect()
}
