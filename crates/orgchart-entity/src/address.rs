//! Postal address value object shared by companies and locations.

use serde::{Deserialize, Serialize};

/// A postal address. Every line is optional; virtual locations have none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street and number.
    #[serde(default)]
    pub address_line: Option<String>,
    /// City name.
    #[serde(default)]
    pub city: Option<String>,
    /// State or province name.
    #[serde(default)]
    pub state: Option<String>,
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
    /// Postal or ZIP code.
    #[serde(default)]
    pub postal_code: Option<String>,
}
