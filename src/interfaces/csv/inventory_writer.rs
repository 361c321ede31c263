use crate::domain::machine::VendingMachine;
use crate::domain::selection::Selection;
use crate::error::Result;
use std::io::Write;

/// Writes a machine's final state as CSV.
///
/// One `selection,price,quantity` row per stocked selection in menu order,
/// followed by a `balance,<amount>` record.
pub struct InventoryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> InventoryWriter<W> {
    pub fn new(destination: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(destination);
        Self { writer }
    }

    pub fn write_machine(&mut self, machine: &VendingMachine) -> Result<()> {
        self.writer.write_record(["selection", "price", "quantity"])?;
        for selection in Selection::ALL {
            if let Some(item) = machine.item(selection) {
                self.writer.write_record([
                    selection.as_str().to_string(),
                    item.price.normalize().to_string(),
                    item.quantity.to_string(),
                ])?;
            }
        }
        self.writer.write_record([
            "balance".to_string(),
            machine.amount_deposited().value().normalize().to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}
