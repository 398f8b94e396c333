//! Stock map: item name to quantity, in insertion order.

use std::collections::HashMap;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockledger_core::Quantity;

/// Mapping from item name to quantity on hand.
///
/// Invariant: no entry holds zero. Setting an item to zero removes it.
/// Iteration follows the order items were first inserted (or the order they
/// appeared in the deserialized document).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockMap {
    quantities: HashMap<String, Quantity>,
    order: Vec<String>,
}

impl StockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity on hand; absent items read as zero.
    pub fn get(&self, item: &str) -> Quantity {
        self.quantities.get(item).copied().unwrap_or(Quantity::ZERO)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.quantities.contains_key(item)
    }

    /// Store `qty` for `item`, removing the entry when `qty` is zero.
    ///
    /// Returns the previous quantity.
    pub fn set(&mut self, item: &str, qty: Quantity) -> Quantity {
        if qty.is_zero() {
            return self.remove(item).unwrap_or(Quantity::ZERO);
        }
        match self.quantities.insert(item.to_string(), qty) {
            Some(prev) => prev,
            None => {
                self.order.push(item.to_string());
                Quantity::ZERO
            }
        }
    }

    pub fn remove(&mut self, item: &str) -> Option<Quantity> {
        let prev = self.quantities.remove(item)?;
        self.order.retain(|name| name != item);
        Some(prev)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.quantities[name]))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, u64)> for StockMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut map = StockMap::new();
        for (item, qty) in iter {
            map.set(item, Quantity::new(qty));
        }
        map
    }
}

impl Serialize for StockMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (item, qty) in self.iter() {
            map.serialize_entry(item, &qty)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StockMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StockMapVisitor)
    }
}

struct StockMapVisitor;

impl<'de> Visitor<'de> for StockMapVisitor {
    type Value = StockMap;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("an object mapping item names to non-negative integer quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut stock = StockMap::new();
        // Repeated keys: last one wins. Zero entries are dropped by `set`.
        while let Some((item, qty)) = access.next_entry::<String, Quantity>()? {
            stock.set(&item, qty);
        }
        Ok(stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_items_read_as_zero() {
        let stock = StockMap::new();
        assert_eq!(stock.get("apple"), Quantity::ZERO);
        assert!(!stock.contains("apple"));
    }

    #[test]
    fn setting_zero_removes_the_entry() {
        let mut stock: StockMap = [("apple", 3)].into_iter().collect();
        let prev = stock.set("apple", Quantity::ZERO);
        assert_eq!(prev, Quantity::new(3));
        assert!(stock.is_empty());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut stock = StockMap::new();
        stock.set("pear", Quantity::new(1));
        stock.set("apple", Quantity::new(2));
        stock.set("fig", Quantity::new(3));
        stock.set("pear", Quantity::new(9));

        let names: Vec<_> = stock.names().collect();
        assert_eq!(names, vec!["pear", "apple", "fig"]);
    }

    #[test]
    fn serializes_in_order() {
        let stock: StockMap = [("banana", 15), ("apple", 7)].into_iter().collect();
        let json = serde_json::to_string(&stock).unwrap();
        assert_eq!(json, r#"{"banana":15,"apple":7}"#);
    }

    #[test]
    fn deserializes_preserving_document_order() {
        let stock: StockMap = serde_json::from_str(r#"{"zucchini": 2, "apple": 7}"#).unwrap();
        let names: Vec<_> = stock.names().collect();
        assert_eq!(names, vec!["zucchini", "apple"]);
        assert_eq!(stock.get("apple"), Quantity::new(7));
    }

    #[test]
    fn deserialize_drops_zero_entries() {
        let stock: StockMap = serde_json::from_str(r#"{"apple": 0, "pear": 1}"#).unwrap();
        assert!(!stock.contains("apple"));
        assert_eq!(stock.len(), 1);
    }

    #[test]
    fn deserialize_rejects_negative_and_fractional_quantities() {
        assert!(serde_json::from_str::<StockMap>(r#"{"apple": -1}"#).is_err());
        assert!(serde_json::from_str::<StockMap>(r#"{"apple": 1.5}"#).is_err());
        assert!(serde_json::from_str::<StockMap>(r#"["apple"]"#).is_err());
    }
}
