use common::types::menu_item::MenuItem;

/// Session-local list of items chosen but not yet confirmed as an order.
///
/// Entries are plain copies of catalog items, kept in insertion order.
/// Picking the same dish twice yields two entries; there is no quantity
/// field and no deduplication. Cart entries never carry a status, only
/// placed orders do.
#[derive(Debug)]
pub struct Cart {
    entries: Vec<MenuItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a copy of `item`. Always succeeds.
    pub fn add(&mut self, item: MenuItem) {
        self.entries.push(item);
    }

    /// Read-only snapshot in insertion order.
    pub fn items(&self) -> Vec<MenuItem> {
        self.entries.clone()
    }

    /// Drains the cart for order placement, leaving it empty.
    pub fn take(&mut self) -> Vec<MenuItem> {
        std::mem::take(&mut self.entries)
    }

    /// Puts previously taken entries back in front of anything added since.
    pub fn restore(&mut self, mut taken: Vec<MenuItem>) {
        taken.extend(self.entries.drain(..));
        self.entries = taken;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
