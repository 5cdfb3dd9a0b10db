pub mod mock;

use crate::generation::{fetch_with_fallback, GenerationClient, GenerationRequest, Schema, Sourced};
use crate::models::{Agency, Agent, Property, PropertyType, SearchCriteria};
use std::sync::Arc;
use tracing::info;

/// Fetches listings, agencies and agents through a generation client.
///
/// Every fetch resolves to data: when generation fails the static datasets in
/// [`mock`] are returned instead. Calls share nothing but the client handle.
pub struct Catalog<C: GenerationClient + ?Sized> {
    client: Arc<C>,
}

impl<C: GenerationClient + ?Sized> Clone for Catalog<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: GenerationClient + ?Sized> Catalog<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch property listings matching the search criteria
    pub async fn fetch_properties(&self, criteria: &SearchCriteria) -> Sourced<Vec<Property>> {
        let request = properties_request(criteria);
        let result = fetch_with_fallback(self.client.as_ref(), &request, mock::properties()).await;
        info!(
            "Loaded {} properties for {} ({:?})",
            result.value.len(),
            criteria.location,
            result.source
        );
        result
    }

    pub async fn fetch_agencies(&self) -> Sourced<Vec<Agency>> {
        let result = fetch_with_fallback(self.client.as_ref(), &agencies_request(), mock::agencies()).await;
        info!("Loaded {} agencies ({:?})", result.value.len(), result.source);
        result
    }

    pub async fn fetch_agents(&self) -> Sourced<Vec<Agent>> {
        let result = fetch_with_fallback(self.client.as_ref(), &agents_request(), mock::agents()).await;
        info!("Loaded {} agents ({:?})", result.value.len(), result.source);
        result
    }
}

fn property_schema() -> Schema {
    let coordinate = |axis: &str| {
        Schema::number().describe(format!(
            "The {} of the property, must be a realistic coordinate within Somalia.",
            axis
        ))
    };

    Schema::array_of(
        Schema::object()
            .field("id", Schema::string())
            .field("title", Schema::string())
            .field("description", Schema::string())
            .field("address", Schema::string())
            .field("city", Schema::string())
            .field("areaName", Schema::string())
            .field("price", Schema::number())
            .field("bedrooms", Schema::integer())
            .field("bathrooms", Schema::integer())
            .field("area", Schema::number())
            .field("imageUrl", Schema::string())
            .field(
                "type",
                Schema::string_enum(PropertyType::ALL.iter().map(|t| t.as_str())),
            )
            .field("tags", Schema::array_of(Schema::string()))
            .field("priceSuffix", Schema::string())
            .field("latitude", coordinate("latitude"))
            .field("longitude", coordinate("longitude"))
            .required([
                "id",
                "title",
                "description",
                "address",
                "price",
                "bedrooms",
                "bathrooms",
                "area",
                "imageUrl",
                "type",
                "latitude",
                "longitude",
            ]),
    )
}

fn properties_request(criteria: &SearchCriteria) -> GenerationRequest {
    // Plain strings and enums only; serialization cannot fail
    let criteria_json = serde_json::to_string(criteria).unwrap_or_default();
    let prompt = format!(
        "Generate a realistic list of 10-15 property listings in various cities in Somalia based on these criteria: {}. \
         Ensure each property has realistic latitude and longitude coordinates within Somalia. \
         For image URLs, use picsum.photos with unique seeds. \
         Include relevant tags like 'For Sale' or 'Featured'.",
        criteria_json
    );

    GenerationRequest::new(
        format!("properties_{}", criteria_json),
        prompt,
        property_schema(),
    )
}

fn agencies_request() -> GenerationRequest {
    let schema = Schema::array_of(
        Schema::object()
            .field("id", Schema::string())
            .field("name", Schema::string())
            .field("logoUrl", Schema::string())
            .field("address", Schema::string())
            .field("description", Schema::string())
            .field("propertiesCount", Schema::integer())
            .required(["id", "name", "logoUrl", "address", "description", "propertiesCount"]),
    );

    GenerationRequest::new(
        "agencies",
        "Generate a list of 8 realistic real estate agencies in Somalia. For logo URLs, use picsum.photos with unique seeds.",
        schema,
    )
}

fn agents_request() -> GenerationRequest {
    let schema = Schema::array_of(
        Schema::object()
            .field("id", Schema::string())
            .field("name", Schema::string())
            .field("imageUrl", Schema::string())
            .field("agency", Schema::string())
            .required(["id", "name", "imageUrl", "agency"]),
    );

    GenerationRequest::new(
        "agents",
        "Generate a list of 12 realistic real estate agents in Somalia. For image URLs, use i.pravatar.cc with unique seeds.",
        schema,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::fallback::testing::ScriptedClient;
    use crate::generation::{SchemaType, Source};
    use crate::models::TypeCriterion;
    use serde_json::json;

    fn catalog(client: ScriptedClient) -> Catalog<ScriptedClient> {
        Catalog::new(Arc::new(client))
    }

    fn listing(id: &str, city: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("House {}", id),
            "description": "Generated",
            "address": format!("1 Road, {}", city),
            "city": city,
            "price": 120000,
            "bedrooms": 3,
            "bathrooms": 2,
            "area": 1500,
            "imageUrl": format!("https://picsum.photos/seed/{}/800/600", id),
            "type": "House",
            "latitude": 2.04,
            "longitude": 45.3
        })
    }

    #[tokio::test]
    async fn network_failure_returns_mock_properties() {
        let catalog = catalog(ScriptedClient::failing("network error"));
        let result = catalog
            .fetch_properties(&SearchCriteria::default())
            .await;

        assert_eq!(result.source, Source::Fallback);
        assert_eq!(result.value, mock::properties());
        assert_eq!(result.value.len(), 5);
    }

    #[tokio::test]
    async fn fenced_generated_listings_are_used() {
        let body = json!([listing("g1", "Kismayo"), listing("g2", "Baidoa")]);
        let text = format!("```json\n{}\n```", body);
        let catalog = catalog(ScriptedClient::replying(&text));

        let result = catalog
            .fetch_properties(&SearchCriteria::default())
            .await;

        assert_eq!(result.source, Source::Generated);
        let ids: Vec<_> = result.value.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["g1", "g2"]);
        assert_eq!(result.value[1].city.as_deref(), Some("Baidoa"));
    }

    #[tokio::test]
    async fn float_room_counts_keep_generated_batch() {
        let mut record = listing("f1", "Berbera");
        record["bedrooms"] = json!(3.0);
        record["bathrooms"] = json!(2.0);
        let catalog = catalog(ScriptedClient::replying(&json!([record]).to_string()));

        let result = catalog.fetch_properties(&SearchCriteria::default()).await;

        assert_eq!(result.source, Source::Generated);
        assert_eq!(result.value.len(), 1);
        assert_eq!(result.value[0].bedrooms, 3);
    }

    #[tokio::test]
    async fn non_json_returns_mock_agencies_and_agents() {
        let catalog = catalog(ScriptedClient::new(vec![
            Ok("not json".to_string()),
            Ok("Sorry, I cannot help with that.".to_string()),
        ]));

        let agencies = catalog.fetch_agencies().await;
        assert!(agencies.is_fallback());
        assert_eq!(agencies.value, mock::agencies());

        let agents = catalog.fetch_agents().await;
        assert!(agents.is_fallback());
        assert_eq!(agents.value, mock::agents());
    }

    #[tokio::test]
    async fn generated_agents_are_decoded() {
        let body = json!([
            {"id": "a1", "name": "Hodan Warsame", "imageUrl": "https://i.pravatar.cc/150?u=a1", "agency": "Jubba Realty"}
        ]);
        let catalog = catalog(ScriptedClient::replying(&body.to_string()));

        let agents = catalog.fetch_agents().await;
        assert_eq!(agents.source, Source::Generated);
        assert_eq!(agents.value[0].agency, "Jubba Realty");
    }

    #[tokio::test]
    async fn prompt_embeds_criteria() {
        let catalog = catalog(ScriptedClient::failing("offline"));
        let criteria = SearchCriteria {
            location: "Hargeisa".to_string(),
            property_type: TypeCriterion::Only(PropertyType::Apartment),
            price_range: "500-1000".to_string(),
            category: Some("For Rent".to_string()),
        };

        catalog.fetch_properties(&criteria).await;

        let prompts = catalog.client().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(
            r#"{"location":"Hargeisa","propertyType":"Apartment","priceRange":"500-1000","category":"For Rent"}"#
        ));
    }

    #[tokio::test]
    async fn concurrent_fetches_resolve_independently() {
        let catalog = catalog(ScriptedClient::routed(vec![
            ("Mogadishu", json!([listing("m1", "Mogadishu")]).to_string()),
            (
                "Garowe",
                json!([listing("w1", "Garowe"), listing("w2", "Garowe")]).to_string(),
            ),
        ]));

        let first = SearchCriteria::default();
        let second = SearchCriteria {
            location: "Garowe".to_string(),
            ..SearchCriteria::default()
        };

        let other = catalog.clone();
        let (a, b) = tokio::join!(
            catalog.fetch_properties(&first),
            other.fetch_properties(&second)
        );

        assert_eq!(a.source, Source::Generated);
        assert_eq!(a.value.len(), 1);
        assert_eq!(a.value[0].city.as_deref(), Some("Mogadishu"));
        assert_eq!(b.value.len(), 2);
        assert!(b.value.iter().all(|p| p.city.as_deref() == Some("Garowe")));
    }

    #[test]
    fn property_schema_marks_required_fields() {
        let schema = property_schema();
        let item = schema.items.as_deref().unwrap();

        assert_eq!(schema.schema_type, SchemaType::Array);
        assert_eq!(item.properties.len(), 16);
        assert!(item.required.iter().any(|f| f == "latitude"));
        assert!(!item.required.iter().any(|f| f == "city"));
        assert_eq!(
            item.property("type").and_then(|s| s.enum_values.as_ref()).map(|v| v.len()),
            Some(6)
        );
    }
}
