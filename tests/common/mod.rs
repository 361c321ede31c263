use serde_json::{Map, Value, json};
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use vendsim::domain::selection::Selection;

/// A seed document stocking every selection with `quantity` units priced
/// from 0.25 upwards in menu order.
pub fn full_seed(quantity: u32) -> Map<String, Value> {
    Selection::ALL
        .iter()
        .enumerate()
        .map(|(i, selection)| {
            let price = 0.25 * (i as f64 + 1.0);
            (
                selection.as_str().to_string(),
                json!({ "price": price, "quantity": quantity }),
            )
        })
        .collect()
}

pub fn write_seed(path: &Path, seed: &Map<String, Value>) -> Result<(), Error> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, seed)?;
    file.flush()
}

pub fn write_script(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "selection", "quantity", "amount"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
