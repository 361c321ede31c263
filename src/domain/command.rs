use super::selection::Selection;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Deposit,
    Vend,
}

/// One step of a scripted session against a machine.
///
/// Deposits need `amount`; vends need `selection` and default to a quantity
/// of one.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub r#type: CommandType,
    pub selection: Option<Selection>,
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<Decimal>,
}

/// Parses the amount from its text so large or scaled values are kept exact.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            Decimal::from_str(&raw)
                .or_else(|_| Decimal::from_scientific(&raw))
                .map_err(serde::de::Error::custom)
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_vend_deserialization() {
        let csv = "type, selection, quantity, amount\nvend, candyBar, 2, ";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: Command = iter
            .next()
            .unwrap()
            .expect("Failed to deserialize command");
        assert_eq!(result.r#type, CommandType::Vend);
        assert_eq!(result.selection, Some(Selection::CandyBar));
        assert_eq!(result.quantity, Some(2));
        assert_eq!(result.amount, None);
    }

    #[test]
    fn test_deposit_deserialization() {
        let csv = "type, selection, quantity, amount\ndeposit, , , 2.50";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: Command = iter.next().unwrap().unwrap();
        assert_eq!(result.r#type, CommandType::Deposit);
        assert_eq!(result.selection, None);
        assert_eq!(result.amount, Some(dec!(2.50)));
    }

    #[test]
    fn test_amount_keeps_full_precision() {
        let csv = "type, selection, quantity, amount\ndeposit, , , 79228162514264337593543950335\ndeposit, , , -2.00\ndeposit, , , lots";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let results: Vec<Result<Command, csv::Error>> = reader.deserialize().collect();

        assert_eq!(results[0].as_ref().unwrap().amount, Some(Decimal::MAX));
        assert_eq!(
            results[1].as_ref().unwrap().amount.unwrap().to_string(),
            "-2.00"
        );
        assert!(results[2].is_err());
    }
}
