//! Navigation capability handed to screen controllers.

use std::fmt;

use tracing::info;

use crate::models::FoodId;

/// Screens the controllers can route to, with their parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    FoodDetails { food_id: FoodId },
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Dashboard => f.write_str("Dashboard"),
            Screen::FoodDetails { food_id } => write!(f, "FoodDetails({food_id})"),
        }
    }
}

pub trait Navigator: Send + Sync {
    /// Make `screen` the only entry of the navigation history.
    fn reset_to(&self, screen: Screen);
}

/// Navigator for headless hosts: records the reset in the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn reset_to(&self, screen: Screen) {
        info!(screen = %screen, "navigation reset");
    }
}
