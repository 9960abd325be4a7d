//! Cart arithmetic for a single food-ordering session.
//!
//! [`Selection`] is a value: every adjustment returns the next state and
//! leaves the receiver untouched, so a screen can swap states atomically.

use crate::models::{Extra, ExtraId, Food, OrderSubmission};

/// Food quantity never goes below this.
pub const MIN_FOOD_QUANTITY: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    extras: Vec<Extra>,
    food_quantity: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            extras: Vec::new(),
            food_quantity: MIN_FOOD_QUANTITY,
        }
    }
}

impl Selection {
    /// Start a session from a freshly loaded extras catalog. Quantities
    /// coming from the API are ignored and reset to zero.
    pub fn with_extras(extras: Vec<Extra>) -> Self {
        let extras = extras
            .into_iter()
            .map(|extra| Extra {
                quantity: 0,
                ..extra
            })
            .collect();
        Self {
            extras,
            food_quantity: MIN_FOOD_QUANTITY,
        }
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    pub fn food_quantity(&self) -> u32 {
        self.food_quantity
    }

    pub fn increment_extra(&self, id: ExtraId) -> Self {
        self.map_extra(id, |q| q.checked_add(1))
    }

    /// Decrement clamps at zero: an extra already at zero stays unchanged.
    pub fn decrement_extra(&self, id: ExtraId) -> Self {
        self.map_extra(id, |q| q.checked_sub(1))
    }

    pub fn increment_food(&self) -> Self {
        Self {
            extras: self.extras.clone(),
            food_quantity: self.food_quantity.saturating_add(1),
        }
    }

    pub fn decrement_food(&self) -> Self {
        let food_quantity = if self.food_quantity > MIN_FOOD_QUANTITY {
            self.food_quantity - 1
        } else {
            self.food_quantity
        };
        Self {
            extras: self.extras.clone(),
            food_quantity,
        }
    }

    pub fn food_subtotal(&self, price: f64) -> f64 {
        price * f64::from(self.food_quantity)
    }

    pub fn extras_subtotal(&self) -> f64 {
        self.extras
            .iter()
            .map(|extra| extra.value * f64::from(extra.quantity))
            .sum()
    }

    /// `price * food_quantity + sum(extra.value * extra.quantity)`.
    pub fn total(&self, price: f64) -> f64 {
        self.food_subtotal(price) + self.extras_subtotal()
    }

    /// Extras with a strictly positive quantity, in catalog order.
    pub fn selected_extras(&self) -> Vec<Extra> {
        self.extras
            .iter()
            .filter(|extra| extra.quantity > 0)
            .cloned()
            .collect()
    }

    /// Build the `POST /orders` body for `food` with the current quantities.
    pub fn submission(&self, food: &Food) -> OrderSubmission {
        OrderSubmission {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            category: food.category,
            thumbnail_url: food.thumbnail_url.clone(),
            quantity: self.food_quantity,
            extras: self.selected_extras(),
        }
    }

    fn map_extra(&self, id: ExtraId, step: impl Fn(u32) -> Option<u32>) -> Self {
        let extras = self
            .extras
            .iter()
            .map(|extra| {
                if extra.id != id {
                    return extra.clone();
                }
                match step(extra.quantity) {
                    Some(quantity) => Extra {
                        quantity,
                        ..extra.clone()
                    },
                    None => extra.clone(),
                }
            })
            .collect();
        Self {
            extras,
            food_quantity: self.food_quantity,
        }
    }
}
