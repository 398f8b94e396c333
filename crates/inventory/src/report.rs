use crate::stock::StockMap;

/// Plain-text stock report: an `Items Report` header, then one
/// `<item> -> <qty>` line per entry in stock order.
#[derive(Debug, Clone, Copy)]
pub struct ItemsReport<'a> {
    stock: &'a StockMap,
}

impl<'a> ItemsReport<'a> {
    pub fn new(stock: &'a StockMap) -> Self {
        Self { stock }
    }
}

impl core::fmt::Display for ItemsReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report")?;
        for (item, qty) in self.stock.iter() {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}
