use clap::{Parser, Subcommand};

use food_order_client::models::{ExtraId, FoodId};

/// food-order: drive the order history and checkout screens from a terminal.
#[derive(Parser, Debug)]
#[command(name = "food-order")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Food API base URL (overrides FOOD_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List past orders with their display prices.
    Orders,

    /// Open a food, adjust the cart and optionally finish the order.
    Food {
        /// Food identifier.
        id: FoodId,

        /// Food quantity (at least 1).
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Add one unit of an extra; repeat to add more.
        #[arg(short, long = "extra")]
        extras: Vec<ExtraId>,

        /// Toggle the favorite state of the food.
        #[arg(long)]
        toggle_favorite: bool,

        /// Submit the order.
        #[arg(long)]
        submit: bool,
    },

    /// Print version and build information.
    About,
}
