//! In-memory collaborators for screen controller tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::FoodApi;
use crate::error::ApiError;
use crate::models::{Extra, FavoriteFood, Food, FoodId, Order, OrderSubmission};
use crate::navigation::{Navigator, Screen};

fn offline() -> ApiError {
    ApiError::Transport {
        url: "http://fake".into(),
        message: "Cannot reach food API at http://fake".into(),
    }
}

pub fn sample_food(id: FoodId, price: f64) -> Food {
    Food {
        id,
        name: "Ao molho".into(),
        description: "Macarrão ao molho branco, fughi e cheiro verde".into(),
        price,
        category: Some(1),
        image_url: format!("https://img/{id}.png"),
        thumbnail_url: format!("https://img/{id}-thumb.png"),
        extras: vec![Extra::new(1, "Bacon", 3.5), Extra::new(2, "Frango", 2.0)],
    }
}

pub fn sample_order(id: u64, price: f64) -> Order {
    Order {
        id,
        name: format!("Order {id}"),
        description: String::new(),
        price,
        thumbnail_url: String::new(),
    }
}

#[derive(Default)]
pub struct FakeFoodApi {
    pub orders: Vec<Order>,
    pub foods: HashMap<FoodId, Food>,
    pub favorites: Mutex<Vec<FavoriteFood>>,
    pub fail_orders: bool,
    pub fail_foods: bool,
    pub fail_favorites: bool,
    pub fail_mutations: bool,
    /// Mutations never resolve, as if the server hung.
    pub stall_mutations: bool,
    pub calls: Mutex<Vec<String>>,
    pub created_orders: Mutex<Vec<OrderSubmission>>,
}

impl FakeFoodApi {
    pub fn with_food(food: Food) -> Self {
        let mut api = Self::default();
        api.foods.insert(food.id, food);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn stall_if_configured(&self) {
        if self.stall_mutations {
            std::future::pending::<()>().await;
        }
    }
}

impl FoodApi for FakeFoodApi {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.record("GET /orders".into());
        if self.fail_orders {
            return Err(offline());
        }
        Ok(self.orders.clone())
    }

    async fn get_food(&self, id: FoodId) -> Result<Food, ApiError> {
        self.record(format!("GET /foods/{id}"));
        if self.fail_foods {
            return Err(offline());
        }
        self.foods.get(&id).cloned().ok_or(ApiError::Status {
            status: 404,
            message: "Resource not found".into(),
        })
    }

    async fn list_favorites(&self) -> Result<Vec<FavoriteFood>, ApiError> {
        self.record("GET /favorites".into());
        if self.fail_favorites {
            return Err(offline());
        }
        Ok(self.favorites.lock().unwrap().clone())
    }

    async fn add_favorite(&self, food: &FavoriteFood) -> Result<(), ApiError> {
        self.record("POST /favorites".into());
        self.stall_if_configured().await;
        if self.fail_mutations {
            return Err(offline());
        }
        self.favorites.lock().unwrap().push(food.clone());
        Ok(())
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), ApiError> {
        self.record(format!("DELETE /favorites/{id}"));
        self.stall_if_configured().await;
        if self.fail_mutations {
            return Err(offline());
        }
        self.favorites.lock().unwrap().retain(|f| f.id != id);
        Ok(())
    }

    async fn create_order(&self, order: &OrderSubmission) -> Result<(), ApiError> {
        self.record("POST /orders".into());
        self.stall_if_configured().await;
        if self.fail_mutations {
            return Err(offline());
        }
        self.created_orders.lock().unwrap().push(order.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub resets: Mutex<Vec<Screen>>,
}

impl RecordingNavigator {
    pub fn resets(&self) -> Vec<Screen> {
        self.resets.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn reset_to(&self, screen: Screen) {
        self.resets.lock().unwrap().push(screen);
    }
}
