use crate::error::InventoryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Asset shown for a selection that has no artwork of its own.
pub const DEFAULT_ICON: &str = "default";

/// The closed set of products a machine can stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    Soda,
    DietSoda,
    Chips,
    Cookie,
    Sandwich,
    Wrap,
    CandyBar,
    PopTart,
    Water,
    FruitJuice,
    SportsDrink,
    Gum,
}

impl Selection {
    /// Every selection, in menu order.
    pub const ALL: [Selection; 12] = [
        Selection::Soda,
        Selection::DietSoda,
        Selection::Chips,
        Selection::Cookie,
        Selection::Sandwich,
        Selection::Wrap,
        Selection::CandyBar,
        Selection::PopTart,
        Selection::Water,
        Selection::FruitJuice,
        Selection::SportsDrink,
        Selection::Gum,
    ];

    /// The key used for this selection in seed documents and scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Soda => "soda",
            Selection::DietSoda => "dietSoda",
            Selection::Chips => "chips",
            Selection::Cookie => "cookie",
            Selection::Sandwich => "sandwich",
            Selection::Wrap => "wrap",
            Selection::CandyBar => "candyBar",
            Selection::PopTart => "popTart",
            Selection::Water => "water",
            Selection::FruitJuice => "fruitJuice",
            Selection::SportsDrink => "sportsDrink",
            Selection::Gum => "gum",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        self.as_str()
    }

    /// Picks the icon asset for this selection out of `available`, falling
    /// back to [`DEFAULT_ICON`].
    pub fn resolve_icon(&self, available: &HashSet<String>) -> &'static str {
        if available.contains(self.icon_name()) {
            self.icon_name()
        } else {
            DEFAULT_ICON
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Selection {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selection::ALL
            .into_iter()
            .find(|selection| selection.as_str() == s)
            .ok_or_else(|| InventoryError::InvalidSelection(s.to_string()))
    }
}
