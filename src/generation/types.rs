use serde::{Deserialize, Serialize};

/// Primitive and composite types understood by the response schema
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// Structural description of the JSON the model is asked to produce.
///
/// Serializes to the `responseSchema` shape expected by the generation endpoint.
/// Object fields keep their insertion order so the model sees them as declared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "ordered_properties"
    )]
    pub properties: Vec<(String, Schema)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            enum_values: None,
            items: None,
            properties: Vec::new(),
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    pub fn integer() -> Self {
        Self::of(SchemaType::Integer)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaType::Boolean)
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn array_of(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    /// String restricted to a fixed set of values
    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
            ..Self::string()
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a named field to an object schema, replacing any field of the same name
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = schema,
            None => self.properties.push((name, schema)),
        }
        self
    }

    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }
}

mod ordered_properties {
    use super::Schema;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(
        properties: &[(String, Schema)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(properties.len()))?;
        for (name, schema) in properties {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, Schema)>, D::Error> {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = Vec<(String, Schema)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to schemas")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut properties = Vec::new();
                while let Some(entry) = access.next_entry::<String, Schema>()? {
                    properties.push(entry);
                }
                Ok(properties)
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}

/// A single schema-constrained generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub schema: Schema,
    /// Identifies the request in logs, e.g. "agencies"
    pub label: String,
}

impl GenerationRequest {
    pub fn new(label: impl Into<String>, prompt: impl Into<String>, schema: Schema) -> Self {
        Self {
            prompt: prompt.into(),
            schema,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_serializes_to_wire_shape() {
        let schema = Schema::array_of(
            Schema::object()
                .field("id", Schema::string())
                .field("kind", Schema::string_enum(["A", "B"]))
                .field("count", Schema::integer().describe("How many"))
                .required(["id", "kind"]),
        );

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "STRING"},
                        "kind": {"type": "STRING", "enum": ["A", "B"]},
                        "count": {"type": "INTEGER", "description": "How many"}
                    },
                    "required": ["id", "kind"]
                }
            })
        );
    }

    #[test]
    fn fields_keep_declaration_order() {
        let schema = Schema::object()
            .field("zeta", Schema::string())
            .field("alpha", Schema::number())
            .field("mid", Schema::boolean());

        let text = serde_json::to_string(&schema).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        let mid = text.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);

        let back: Schema = serde_json::from_str(&text).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn redeclaring_a_field_replaces_it() {
        let schema = Schema::object()
            .field("price", Schema::integer())
            .field("price", Schema::number());

        assert_eq!(schema.properties.len(), 1);
        assert_eq!(
            schema.property("price").map(|s| s.schema_type),
            Some(SchemaType::Number)
        );
    }
}
