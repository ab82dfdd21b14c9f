use common::types::menu_item::{Category, MenuItem};

/// The static canteen menu. Built once at server start, shared read-only
/// with every session, never mutated.
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// The standard campus menu.
    pub fn standard() -> Self {
        let entries = [
            (
                1,
                "Burger",
                "Juicy beef burger with fresh veggies.",
                5.99,
                Category::Meals,
            ),
            (
                2,
                "Pizza",
                "Cheesy pizza with your favorite toppings.",
                8.99,
                Category::Meals,
            ),
            (
                3,
                "Veggie Wrap",
                "Grilled vegetables wrapped in a warm tortilla.",
                4.49,
                Category::Meals,
            ),
            (
                4,
                "Fries",
                "Crispy golden fries with a pinch of salt.",
                3.99,
                Category::Snacks,
            ),
            (
                5,
                "Nachos",
                "Corn nachos with melted cheese dip.",
                4.99,
                Category::Snacks,
            ),
            (
                6,
                "Coffee",
                "Freshly brewed house blend.",
                1.99,
                Category::Drinks,
            ),
            (
                7,
                "Lemonade",
                "Iced lemonade squeezed to order.",
                2.49,
                Category::Drinks,
            ),
            (
                8,
                "Brownie",
                "Warm chocolate brownie.",
                3.49,
                Category::Desserts,
            ),
        ];

        let items = entries
            .into_iter()
            .map(|(id, name, description, price, category)| MenuItem {
                id,
                name: name.to_string(),
                description: description.to_string(),
                price,
                category,
                image_ref: format!("https://via.placeholder.com/300?text={}", id),
            })
            .collect();

        Self { items }
    }

    /// Looks up a menu item by id.
    pub fn find(&self, item_id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// The whole menu, in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}
