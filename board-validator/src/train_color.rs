use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The nine colors a connection on the board can have.
///
/// `Gray` marks a connection claimable with cards of any single color.
///
/// # JSON
/// Colors are serialized in lowercase.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrainColor {
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
}

impl TrainColor {
    /// Every color name, lowercase, in declaration order.
    ///
    /// Used to spell out the permitted values when a connection carries an
    /// unknown color.
    pub fn all_names() -> String {
        Self::iter()
            .map(|color| color.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
