use serde::{Deserialize, Serialize};
use std::fmt;

/// Sections of the canteen menu, in the order they are displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Meals,
    Snacks,
    Drinks,
    Desserts,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Meals => write!(f, "Meals"),
            Category::Snacks => write!(f, "Snacks"),
            Category::Drinks => write!(f, "Drinks"),
            Category::Desserts => write!(f, "Desserts"),
        }
    }
}

/// One entry of the canteen menu. Reference data: built once at server start
/// and never mutated afterwards. Cart entries are plain copies of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique ID within the catalog.
    pub id: u32,
    /// Display name of the dish.
    pub name: String,
    /// Short description shown on the menu card.
    pub description: String,
    /// Price in the canteen's currency. Never negative.
    pub price: f64,
    /// Menu section this item belongs to.
    pub category: Category,
    /// Reference to the picture shown on the menu card.
    pub image_ref: String,
}
