//! Wire models for the food API.
//!
//! Field names follow the API's snake_case JSON. Quantities that the API
//! omits (`Extra::quantity`) default to zero on deserialization.

use serde::{Deserialize, Serialize};

pub type FoodId = u64;
pub type ExtraId = u64;

/// An optional add-on for a food, priced per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub quantity: u32,
}

impl Extra {
    pub fn new(id: ExtraId, name: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            quantity: 0,
        }
    }
}

/// A food as served by `GET /foods/{id}`, with its extras catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<u64>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

impl Food {
    /// Snapshot of the display fields posted to `/favorites`.
    pub fn favorite_snapshot(&self) -> FavoriteFood {
        FavoriteFood {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category,
            image_url: self.image_url.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }
}

/// Entry of the favorites collection. Also the body of `POST /favorites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteFood {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<u64>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

/// A past order as listed by `GET /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub thumbnail_url: String,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub product_id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Option<u64>,
    pub thumbnail_url: String,
    pub quantity: u32,
    pub extras: Vec<Extra>,
}
