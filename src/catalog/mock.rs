use crate::models::{Agency, Agent, Property, PropertyType};

fn tags(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|t| t.to_string()).collect())
}

/// Static listings served whenever property generation fails
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop001".to_string(),
            title: "Luxurious 5-Bedroom Villa in Kilometre 4".to_string(),
            description: "Expansive villa with modern amenities, perfect for a large family. Features a spacious garden and secure perimeter.".to_string(),
            address: "KM4, Near Jazeera Road, Mogadishu".to_string(),
            city: Some("Mogadishu".to_string()),
            area_name: Some("Kilometre 4".to_string()),
            price: 380_000.0,
            bedrooms: 5,
            bathrooms: 4,
            area: 3200.0,
            image_url: "https://picsum.photos/seed/prop001/800/600".to_string(),
            property_type: PropertyType::House,
            tags: tags(&["Featured", "For Sale", "Luxury"]),
            price_suffix: None,
            latitude: Some(2.045),
            longitude: Some(45.335),
        },
        Property {
            id: "prop002".to_string(),
            title: "Modern 2-Bedroom Apartment in Hamarweyne".to_string(),
            description: "Comfortable and secure apartment in a vibrant district, close to market and beach. Ideal for small families or professionals.".to_string(),
            address: "Hamarweyne District, Near Lighthouse, Mogadishu".to_string(),
            city: Some("Mogadishu".to_string()),
            area_name: Some("Hamarweyne".to_string()),
            price: 850.0,
            bedrooms: 2,
            bathrooms: 2,
            area: 1000.0,
            image_url: "https://picsum.photos/seed/prop002/800/600".to_string(),
            property_type: PropertyType::Apartment,
            tags: tags(&["For Rent", "Coastal View"]),
            price_suffix: Some("/mo".to_string()),
            latitude: Some(2.049),
            longitude: Some(45.348),
        },
        Property {
            id: "prop003".to_string(),
            title: "Prime Residential Plot in Borama".to_string(),
            description: "Large plot of land suitable for building your dream home. Developing area with good access roads.".to_string(),
            address: "Downtown Area, Borama".to_string(),
            city: Some("Borama".to_string()),
            area_name: Some("Downtown".to_string()),
            price: 75_000.0,
            bedrooms: 0,
            bathrooms: 0,
            area: 6500.0,
            image_url: "https://picsum.photos/seed/prop003/800/600".to_string(),
            property_type: PropertyType::Land,
            tags: tags(&["For Sale", "Investment Opportunity"]),
            price_suffix: None,
            latitude: Some(9.936),
            longitude: Some(43.183),
        },
        Property {
            id: "prop004".to_string(),
            title: "Cozy 3-Bedroom Home in Hargeisa".to_string(),
            description: "A charming family home in a quiet and secure neighborhood. Recently renovated with a small private yard.".to_string(),
            address: "Jigjiga Yar, Hargeisa".to_string(),
            city: Some("Hargeisa".to_string()),
            area_name: Some("Jigjiga Yar".to_string()),
            price: 185_000.0,
            bedrooms: 3,
            bathrooms: 2,
            area: 1800.0,
            image_url: "https://picsum.photos/seed/prop004/800/600".to_string(),
            property_type: PropertyType::House,
            tags: tags(&["For Sale", "Family Friendly"]),
            price_suffix: None,
            latitude: Some(9.560),
            longitude: Some(44.066),
        },
        Property {
            id: "prop005".to_string(),
            title: "Strategic Commercial Building in Bosaso".to_string(),
            description: "Excellent opportunity for commercial development. High-traffic location with great visibility near the port.".to_string(),
            address: "Port Road, Bosaso".to_string(),
            city: Some("Bosaso".to_string()),
            area_name: Some("Port Area".to_string()),
            price: 450_000.0,
            bedrooms: 0,
            bathrooms: 0,
            area: 8500.0,
            image_url: "https://picsum.photos/seed/prop005/800/600".to_string(),
            property_type: PropertyType::Commercial,
            tags: tags(&["For Sale", "Commercial", "Prime Location"]),
            price_suffix: None,
            latitude: Some(11.282),
            longitude: Some(49.179),
        },
    ]
}

fn agency(id: &str, name: &str, address: &str, description: &str, count: u32) -> Agency {
    Agency {
        id: id.to_string(),
        name: name.to_string(),
        logo_url: format!("https://picsum.photos/seed/{}/200/200", id),
        address: address.to_string(),
        description: description.to_string(),
        properties_count: count,
    }
}

pub fn agencies() -> Vec<Agency> {
    vec![
        agency(
            "agency01",
            "Somali Real Estate",
            "Maka Al-Mukarramah Road, Mogadishu",
            "Leading the market with premium properties.",
            78,
        ),
        agency(
            "agency02",
            "Puntland Properties",
            "Main Street, Bosaso",
            "Your trusted partner in Puntland.",
            55,
        ),
        agency(
            "agency03",
            "Hargeisa Homes",
            "Independence Avenue, Hargeisa",
            "Finding you the perfect home in Somaliland.",
            120,
        ),
    ]
}

fn agent(id: &str, name: &str, avatar: &str, agency: &str) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("https://i.pravatar.cc/150?u={}", avatar),
        agency: agency.to_string(),
    }
}

pub fn agents() -> Vec<Agent> {
    vec![
        agent("agent01", "Amina Yusuf", "amina", "Somali Real Estate"),
        agent("agent02", "Omar Hassan", "omar", "Puntland Properties"),
        agent("agent03", "Fatima Ali", "fatima", "Hargeisa Homes"),
        agent("agent04", "Said Ibrahim", "said", "Somali Real Estate"),
    ]
}
