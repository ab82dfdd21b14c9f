use crate::types::menu_item::MenuItem;
use crate::types::order_status::OrderStatus;
use serde::{Deserialize, Serialize};

/// A confirmed cart with a delivery location and a mutable status.
///
/// Orders are append-only: once placed they are never removed from the
/// board, only their status changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDTO {
    /// 1-based ID, equal to the order's position in placement order.
    pub order_id: u64,
    /// Where the order should be delivered. Never empty.
    pub location: String,
    /// Current status, overwritten freely by the admin.
    pub status: OrderStatus,
    /// Cart contents captured at confirmation time, in insertion order.
    pub items: Vec<MenuItem>,
    /// When the order was placed.
    pub placed_at: std::time::SystemTime,
}

impl OrderDTO {
    /// Sum of the item prices, as shown on the admin panel.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::menu_item::Category;

    fn item(id: u32, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
            category: Category::Meals,
            image_ref: String::new(),
        }
    }

    #[test]
    fn total_price_sums_every_entry() {
        let order = OrderDTO {
            order_id: 1,
            location: "Table 5".to_string(),
            status: OrderStatus::OrderPlaced,
            items: vec![
                item(1, "Burger", 5.99),
                item(1, "Burger", 5.99),
                item(2, "Pizza", 8.99),
            ],
            placed_at: std::time::SystemTime::now(),
        };
        assert!((order.total_price() - 20.97).abs() < 1e-9);
    }
}
