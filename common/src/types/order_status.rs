use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a placed order. Every order starts as `OrderPlaced`; the
/// admin may set any status at any time, there is no enforced progression
/// and no terminal state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    OrderPlaced,
    Cooking,
    Packing,
    OnTheWay,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::OrderPlaced => write!(f, "Order Placed"),
            OrderStatus::Cooking => write!(f, "Cooking"),
            OrderStatus::Packing => write!(f, "Packing"),
            OrderStatus::OnTheWay => write!(f, "On the Way"),
            OrderStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_panel_labels() {
        assert_eq!(OrderStatus::OrderPlaced.to_string(), "Order Placed");
        assert_eq!(OrderStatus::Cooking.to_string(), "Cooking");
        assert_eq!(OrderStatus::Packing.to_string(), "Packing");
        assert_eq!(OrderStatus::OnTheWay.to_string(), "On the Way");
        assert_eq!(OrderStatus::Delivered.to_string(), "Delivered");
    }
}
