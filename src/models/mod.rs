use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of property a listing describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Land,
    Commercial,
    Residential,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Land,
        PropertyType::Commercial,
        PropertyType::Residential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
            PropertyType::Residential => "Residential",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown property type: {}", s))
    }
}

/// Whole-number count that also accepts integral floats such as `3.0`
fn whole_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = f64::deserialize(deserializer)?;
    if n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&n) {
        Ok(n as u32)
    } else {
        Err(serde::de::Error::custom(format!(
            "expected a whole non-negative count, got {}",
            n
        )))
    }
}

/// A property listing as shown in search results and detail views
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_name: Option<String>,
    pub price: f64,
    #[serde(deserialize_with = "whole_count")]
    pub bedrooms: u32,
    #[serde(deserialize_with = "whole_count")]
    pub bathrooms: u32,
    /// Floor or plot area in square feet
    pub area: f64,
    pub image_url: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Shown after the price, e.g. "/mo" for rentals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Property {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .map(|tags| tags.iter().any(|t| t == tag))
            .unwrap_or(false)
    }
}

/// Real estate agency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub address: String,
    pub description: String,
    #[serde(deserialize_with = "whole_count")]
    pub properties_count: u32,
}

/// Individual agent, linked to an agency by name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub agency: String,
}

/// Property type constraint in a search; "any" disables it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeCriterion {
    #[default]
    Any,
    Only(PropertyType),
}

impl Serialize for TypeCriterion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypeCriterion::Any => serializer.serialize_str("any"),
            TypeCriterion::Only(t) => t.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TypeCriterion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for TypeCriterion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            Ok(TypeCriterion::Any)
        } else {
            Ok(TypeCriterion::Only(s.parse()?))
        }
    }
}

/// Search parameters embedded in the property generation prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// City or area to search in
    pub location: String,
    pub property_type: TypeCriterion,
    /// Free-form price range, e.g. "50000-200000" or "any"
    pub price_range: String,
    /// Optional category such as "Featured" or "For Rent"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            location: "Mogadishu".to_string(),
            property_type: TypeCriterion::Any,
            price_range: "any".to_string(),
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_uses_wire_field_names() {
        let value = json!({
            "id": "p1",
            "title": "Flat",
            "description": "Nice",
            "address": "Main St",
            "areaName": "Hodan",
            "price": 1200,
            "bedrooms": 2,
            "bathrooms": 1,
            "area": 900.5,
            "imageUrl": "https://picsum.photos/seed/p1/800/600",
            "type": "Apartment",
            "priceSuffix": "/mo"
        });

        let property: Property = serde_json::from_value(value).unwrap();
        assert_eq!(property.property_type, PropertyType::Apartment);
        assert_eq!(property.area_name.as_deref(), Some("Hodan"));
        assert_eq!(property.city, None);
        assert_eq!(property.tags, None);

        let back = serde_json::to_value(&property).unwrap();
        assert_eq!(back["imageUrl"], "https://picsum.photos/seed/p1/800/600");
        assert!(back.get("city").is_none());
        assert!(back.get("latitude").is_none());
    }

    #[test]
    fn counts_accept_integral_floats() {
        let mut value = json!({
            "id": "p2",
            "title": "Villa",
            "description": "Big",
            "address": "KM4",
            "price": 250000,
            "bedrooms": 3.0,
            "bathrooms": 2,
            "area": 2000,
            "imageUrl": "https://picsum.photos/seed/p2/800/600",
            "type": "House"
        });

        let property: Property = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(property.bedrooms, 3);
        assert_eq!(property.bathrooms, 2);

        value["bedrooms"] = json!(2.5);
        assert!(serde_json::from_value::<Property>(value.clone()).is_err());
        value["bedrooms"] = json!(-1);
        assert!(serde_json::from_value::<Property>(value).is_err());

        let agency: Agency = serde_json::from_value(json!({
            "id": "a1",
            "name": "Jubba Realty",
            "logoUrl": "https://picsum.photos/seed/a1/200/200",
            "address": "Kismayo",
            "description": "Coastal homes",
            "propertiesCount": 42.0
        }))
        .unwrap();
        assert_eq!(agency.properties_count, 42);
    }

    #[test]
    fn unknown_property_type_is_rejected() {
        let result = serde_json::from_value::<PropertyType>(json!("Castle"));
        assert!(result.is_err());
        assert!("castle".parse::<PropertyType>().is_err());
        assert_eq!("condo".parse::<PropertyType>().unwrap(), PropertyType::Condo);
    }

    #[test]
    fn search_criteria_serializes_any_type() {
        let criteria = SearchCriteria::default();
        let value = serde_json::to_value(&criteria).unwrap();
        assert_eq!(
            value,
            json!({"location": "Mogadishu", "propertyType": "any", "priceRange": "any"})
        );

        let typed = SearchCriteria {
            property_type: TypeCriterion::Only(PropertyType::Land),
            category: Some("Featured".to_string()),
            ..SearchCriteria::default()
        };
        let value = serde_json::to_value(&typed).unwrap();
        assert_eq!(value["propertyType"], "Land");
        assert_eq!(value["category"], "Featured");

        let parsed: SearchCriteria = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, typed);
    }
}
