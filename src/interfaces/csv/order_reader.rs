use crate::domain::order::Order;
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of an orders CSV file: `id,amount,contact`.
#[derive(Debug, Deserialize)]
struct OrderRecord {
    id: u32,
    amount: Decimal,
    contact: String,
}

impl OrderRecord {
    fn into_order(self) -> Result<Order> {
        Order::new(self.id, self.amount, self.contact)
    }
}

/// Reads pending orders from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming. Each row becomes either an
/// `Order` or the error that prevented building it, so a bad row never
/// stops the rest of the file.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes and validates each row.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize::<OrderRecord>()
            .map(|result| result.map_err(OrderError::from).and_then(OrderRecord::into_order))
    }
}
