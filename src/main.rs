use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use food_order_client::models::{ExtraId, FoodId};
use food_order_client::navigation::Screen;
use food_order_client::{
    diagnostics, ClientConfig, FoodDetailScreen, HttpFoodApi, LogNavigator, OrderHistoryScreen,
};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = food_order_client::init_logging();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("reading client configuration")?;
    if let Some(url) = cli.api_url {
        config.base_url = url;
    }

    match cli.command {
        Command::Orders => cmd_orders(&config).await,
        Command::Food {
            id,
            quantity,
            extras,
            toggle_favorite,
            submit,
        } => cmd_food(&config, id, quantity, &extras, toggle_favorite, submit).await,
        Command::About => {
            println!("{}", serde_json::to_string_pretty(&diagnostics::get_about_info(&config))?);
            Ok(())
        }
    }
}

async fn cmd_orders(config: &ClientConfig) -> Result<()> {
    let api = Arc::new(HttpFoodApi::new(config)?);
    let mut screen = OrderHistoryScreen::new(api, config.currency.clone());

    let rows = screen.load().await;
    if rows.is_empty() {
        println!("No orders.");
    }
    for row in rows {
        println!("#{:<4} {:<30} {}", row.order.id, row.order.name, row.formatted_price);
    }
    if let Some(e) = screen.last_error() {
        println!("(order history unavailable: {e})");
    }
    Ok(())
}

async fn cmd_food(
    config: &ClientConfig,
    id: FoodId,
    quantity: u32,
    extras: &[ExtraId],
    toggle_favorite: bool,
    submit: bool,
) -> Result<()> {
    let api = Arc::new(HttpFoodApi::new(config)?);
    let mut screen = FoodDetailScreen::new(api, Arc::new(LogNavigator), config.currency.clone());

    tracing::info!(screen = %Screen::FoodDetails { food_id: id }, "opening screen");
    screen.set_food_id(id).await;
    if screen.food().is_none() {
        anyhow::bail!("food {id} could not be loaded");
    }

    for _ in 1..quantity.max(1) {
        screen.increment_food();
    }
    for extra in extras {
        if !screen.extras().iter().any(|e| e.id == *extra) {
            warn!(extra_id = extra, "unknown extra ignored");
        }
        screen.increment_extra(*extra);
    }

    if toggle_favorite {
        let favorite = screen
            .toggle_favorite()
            .await
            .context("toggling favorite")?;
        println!("favorite: {favorite}");
    }

    println!("{}", serde_json::to_string_pretty(&screen.view())?);

    if submit {
        let order = screen.finish_order().await.context("submitting order")?;
        println!(
            "order placed: {} x{} with {} extra(s), total {}",
            order.name,
            order.quantity,
            order.extras.len(),
            screen.display_total()
        );
    }
    Ok(())
}
