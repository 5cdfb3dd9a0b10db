mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, FilterArgs, ListAction, ListingsAction, SearchArgs};
use housing_catalog::filters::{PropertyFilter, Range};
use housing_catalog::generation::{GeminiClient, GenerationClient, OfflineClient};
use housing_catalog::models::SearchCriteria;
use housing_catalog::storage::{LocalStore, MyListings, SavedList, CART_KEY, FAVORITES_KEY};
use housing_catalog::{AppConfig, Catalog};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(Cli::parse(), AppConfig::from_env()).await
}

async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match &cli.command {
        Commands::Properties { search, filter } => {
            let catalog = build_catalog(&config, cli.offline)?;
            let result = catalog.fetch_properties(&criteria(search)).await;
            let properties = build_filter(filter).apply(&result.value);
            info!(
                "{} of {} listings match ({:?})",
                properties.len(),
                result.value.len(),
                result.source
            );
            emit(&cli, &properties).await?;
        }
        Commands::Agencies => {
            let catalog = build_catalog(&config, cli.offline)?;
            let agencies = catalog.fetch_agencies().await.into_inner();
            emit(&cli, &agencies).await?;
        }
        Commands::Agents => {
            let catalog = build_catalog(&config, cli.offline)?;
            let agents = catalog.fetch_agents().await.into_inner();
            emit(&cli, &agents).await?;
        }
        Commands::Favorites { action } => {
            run_list(&cli, &config, FAVORITES_KEY, action).await?;
        }
        Commands::Cart { action } => {
            run_list(&cli, &config, CART_KEY, action).await?;
        }
        Commands::Listings { action } => {
            run_listings(&cli, &config, action).await?;
        }
    }

    Ok(())
}

fn build_catalog(config: &AppConfig, offline: bool) -> Result<Catalog<dyn GenerationClient>> {
    let client: Arc<dyn GenerationClient> = if offline {
        info!("Offline mode: serving built-in sample data");
        Arc::new(OfflineClient)
    } else if config.api_key.is_none() {
        warn!("No API key configured; serving built-in sample data");
        Arc::new(OfflineClient)
    } else {
        let client = GeminiClient::from_config(config)?;
        info!("Using generation model {}", client.model_name());
        Arc::new(client)
    };
    Ok(Catalog::new(client))
}

fn criteria(search: &SearchArgs) -> SearchCriteria {
    SearchCriteria {
        location: search.location.clone(),
        property_type: search.property_type,
        price_range: search.price_range.clone(),
        category: search.category.clone(),
    }
}

fn build_filter(args: &FilterArgs) -> PropertyFilter {
    let mut filter = PropertyFilter::default();
    if args.min_price.is_some() || args.max_price.is_some() {
        filter.price = Range::new(
            args.min_price.unwrap_or(0.0),
            args.max_price.unwrap_or(f64::MAX),
        );
    }
    filter.keyword = args.keyword.clone().unwrap_or_default();
    filter.cities = args.cities.clone();
    filter.status = args.status.clone();
    filter.types = args.types.clone();
    filter.bedrooms = args.bedrooms.clone();
    filter
}

async fn run_list(cli: &Cli, config: &AppConfig, key: &str, action: &ListAction) -> Result<()> {
    let mut store = LocalStore::open(&config.store_path).await?;
    let mut list = SavedList::load(&mut store, key)?;

    match action {
        ListAction::List => emit(cli, list.items()).await?,
        ListAction::Add { id, search } => {
            if list.contains(id) {
                info!("{} is already saved", id);
                return Ok(());
            }
            let catalog = build_catalog(config, cli.offline)?;
            let listings = catalog.fetch_properties(&criteria(search)).await.into_inner();
            let property = listings
                .into_iter()
                .find(|p| &p.id == id)
                .with_context(|| format!("No listing with id {}", id))?;
            list.add(property).await?;
        }
        ListAction::Remove { id } => {
            if !list.remove(id).await? {
                warn!("{} was not saved", id);
            }
        }
    }

    Ok(())
}

async fn run_listings(cli: &Cli, config: &AppConfig, action: &ListingsAction) -> Result<()> {
    let mut store = LocalStore::open(&config.store_path).await?;

    match action {
        ListingsAction::List { owner } => {
            let listings = MyListings::load(&mut store, owner)?;
            info!("{} has {} listings", owner, listings.items().len());
            emit(cli, listings.items()).await?;
        }
        ListingsAction::Post { owner, listing } => {
            let property = MyListings::load(&mut store, owner)?
                .submit(listing.into())
                .await?;
            info!("🏠 Posted {} to {}", property.id, store.path().display());
            emit(cli, &property).await?;
        }
    }

    Ok(())
}

async fn emit<T: Serialize + ?Sized>(cli: &Cli, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("💾 Saved output to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
