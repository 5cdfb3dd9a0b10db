use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use housing_catalog::filters::STATUS_OPTIONS;
use housing_catalog::models::{PropertyType, TypeCriterion};
use housing_catalog::storage::NewListing;
use std::path::PathBuf;

/// Housing Catalog: property listings, agencies and agents with offline fallback
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Skip the generation service and serve built-in sample data
    #[arg(long, global = true)]
    pub offline: bool,

    /// Write JSON output to this file instead of stdout
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// City or area to search in
    #[arg(long, default_value = "Mogadishu")]
    pub location: String,

    /// Property type (House, Apartment, Condo, Land, Commercial, Residential or any)
    #[arg(long = "type", default_value = "any")]
    pub property_type: TypeCriterion,

    /// Price range passed to the generator, e.g. "50000-200000"
    #[arg(long, default_value = "any")]
    pub price_range: String,

    /// Category such as "Featured" or "For Rent"
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Keep listings whose title or description contains this text
    #[arg(long)]
    pub keyword: Option<String>,

    /// Keep listings in these cities
    #[arg(long = "city")]
    pub cities: Vec<String>,

    /// Keep listings with any of these tags
    #[arg(long, value_parser = PossibleValuesParser::new(STATUS_OPTIONS))]
    pub status: Vec<String>,

    /// Keep listings of these types
    #[arg(long = "only-type")]
    pub types: Vec<PropertyType>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    #[arg(long)]
    pub bedrooms: Vec<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch property listings
    Properties {
        #[command(flatten)]
        search: SearchArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Fetch real estate agencies
    Agencies,

    /// Fetch real estate agents
    Agents,

    /// Manage saved favorite properties
    Favorites {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Manage the property cart
    Cart {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Post and show listings owned by a user
    Listings {
        #[command(subcommand)]
        action: ListingsAction,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ListAction {
    /// Show saved properties
    List,

    /// Save a property from the current listings by id
    Add {
        id: String,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Remove a saved property by id
    Remove { id: String },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ListingsAction {
    /// Show the listings posted by an owner
    List {
        #[arg(long)]
        owner: String,
    },

    /// Post a new listing
    Post {
        /// Owner email the listing is stored under
        #[arg(long)]
        owner: String,

        #[command(flatten)]
        listing: ListingArgs,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ListingArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub price: f64,

    #[arg(long)]
    pub bedrooms: u32,

    #[arg(long)]
    pub bathrooms: u32,

    /// Total area in square feet
    #[arg(long)]
    pub area: f64,

    #[arg(long = "type")]
    pub property_type: PropertyType,
}

impl From<&ListingArgs> for NewListing {
    fn from(args: &ListingArgs) -> Self {
        NewListing {
            name: args.name.clone(),
            address: args.address.clone(),
            city: args.city.clone(),
            price: args.price,
            bedrooms: args.bedrooms,
            bathrooms: args.bathrooms,
            total_area: args.area,
            property_type: args.property_type,
        }
    }
}
