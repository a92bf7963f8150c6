use crate::entities::Item;

/// Ordered collection of [`Item`]s together with their running weight sum.
/// Bins only grow: items are appended, never removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bin {
    items: Vec<Item>,
    weight: f64,
}

impl Bin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the item and adds its weight to the bin's sum.
    pub fn insert(&mut self, item: Item) {
        self.weight += item.weight();
        self.items.push(item);
    }

    /// Items in order of insertion
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of the weights of all items in the bin
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|i| i.id())
    }

    pub fn item_weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(|i| i.weight())
    }
}
