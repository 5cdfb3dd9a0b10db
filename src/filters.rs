use crate::models::{Property, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Listing status tags offered as quick filters
pub const STATUS_OPTIONS: [&str; 3] = ["For Sale", "For Rent", "Featured"];

/// Inclusive numeric bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Client-side narrowing of fetched listings.
///
/// Empty selections impose no constraint; non-empty ones require membership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    pub price: Range,
    pub area: Range,
    #[serde(default)]
    pub bedrooms: Vec<u32>,
    #[serde(default)]
    pub bathrooms: Vec<u32>,
    /// Matches if the listing carries any of these tags
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default, rename = "type")]
    pub types: Vec<PropertyType>,
    #[serde(default)]
    pub keyword: String,
    #[serde(default, rename = "city")]
    pub cities: Vec<String>,
    #[serde(default, rename = "areaName")]
    pub area_names: Vec<String>,
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self {
            price: Range::new(0.0, 2_000_000.0),
            area: Range::new(0.0, 10_000.0),
            bedrooms: Vec::new(),
            bathrooms: Vec::new(),
            status: Vec::new(),
            types: Vec::new(),
            keyword: String::new(),
            cities: Vec::new(),
            area_names: Vec::new(),
        }
    }
}

fn member_if_set<T: PartialEq>(selected: &[T], value: Option<&T>) -> bool {
    selected.is_empty() || value.map(|v| selected.contains(v)).unwrap_or(false)
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        if !self.price.contains(property.price) || !self.area.contains(property.area) {
            return false;
        }
        if !member_if_set(&self.bedrooms, Some(&property.bedrooms))
            || !member_if_set(&self.bathrooms, Some(&property.bathrooms))
            || !member_if_set(&self.types, Some(&property.property_type))
            || !member_if_set(&self.cities, property.city.as_ref())
            || !member_if_set(&self.area_names, property.area_name.as_ref())
        {
            return false;
        }
        if !self.status.is_empty() && !self.status.iter().any(|s| property.has_tag(s)) {
            return false;
        }

        let keyword = self.keyword.trim().to_lowercase();
        keyword.is_empty()
            || property.title.to_lowercase().contains(&keyword)
            || property.description.to_lowercase().contains(&keyword)
    }

    /// Matching listings in their original order
    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        properties
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Add `value` if absent, remove it if present
pub fn toggle<T: PartialEq>(selected: &mut Vec<T>, value: T) {
    match selected.iter().position(|v| *v == value) {
        Some(index) => {
            selected.remove(index);
        }
        None => selected.push(value),
    }
}

fn unique_sorted<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = Option<&'a String>>,
{
    values
        .flatten()
        .filter(|v| !v.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn unique_cities(properties: &[Property]) -> Vec<String> {
    unique_sorted(properties.iter().map(|p| p.city.as_ref()))
}

pub fn unique_area_names(properties: &[Property]) -> Vec<String> {
    unique_sorted(properties.iter().map(|p| p.area_name.as_ref()))
}
