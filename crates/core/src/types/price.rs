//! Prices and stock counts with lenient form coercion.
//!
//! Page inputs and data attributes are free text. Anything that does not
//! read as a non-negative number becomes zero instead of an error, so a
//! mistyped field never blocks a cart or catalog update.

use core::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// Decimal places a price keeps.
const PRICE_SCALE: u32 = 4;

/// A non-negative price in the storefront currency.
///
/// Stored as a JSON number so persisted records keep the
/// `{ "price": 20 }` shape the pages have always written.
///
/// ```
/// use handloom_core::Price;
///
/// assert_eq!(Price::coerce("12.5").display(), "$12.50");
/// assert_eq!(Price::coerce("twelve").display(), "$0.00");
/// assert_eq!(Price::from_display_text("$1,299.00").display(), "$1299.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// The zero price, used whenever input fails to coerce.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest price a single product can carry: `99999999999.9999`.
    ///
    /// Fifteen significant digits at most, so a stored price reads back
    /// from its JSON number unchanged.
    pub const MAX: Self = Self(Decimal::from_parts(
        2_764_472_319,
        232_830,
        0,
        false,
        PRICE_SCALE,
    ));

    /// Create a price, rejecting negative amounts. The amount is rounded to
    /// four decimal places and capped at [`Price::MAX`].
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount < Decimal::ZERO {
            return None;
        }
        let amount =
            amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        Some(Self(amount.min(Self::MAX.0)))
    }

    /// Coerce free-form input (a form field or a `data-product-price`
    /// attribute) into a price. Empty, non-numeric and negative input
    /// all become [`Price::ZERO`].
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        parse_number(raw).and_then(Self::new).unwrap_or(Self::ZERO)
    }

    /// Read a price back from displayed text such as `"$1,299.00"`.
    ///
    /// Every character other than ASCII digits and `.` is dropped before
    /// coercing, so currency symbols and grouping separators are ignored.
    #[must_use]
    pub fn from_display_text(text: &str) -> Self {
        let digits: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        Self::coerce(&digits)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with two decimals (e.g., `"$19.99"`).
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${rounded:.2}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    /// Saturates at `Decimal::MAX`.
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    /// Saturates at `Decimal::MAX`.
    fn mul(self, quantity: u32) -> Self::Output {
        Self(
            self.0
                .checked_mul(Decimal::from(quantity))
                .unwrap_or(Decimal::MAX),
        )
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).ok_or_else(|| D::Error::custom("price cannot be negative"))
    }
}

/// Number of units an artisan has in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock(u32);

impl Stock {
    /// Create a stock count.
    #[must_use]
    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    /// Coerce a form field into a stock count. Fractions are truncated;
    /// empty, non-numeric, negative and out-of-range input become zero.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        let units = parse_number(raw)
            .filter(|n| *n >= Decimal::ZERO)
            .and_then(|n| n.trunc().to_u32())
            .unwrap_or(0);
        Self(units)
    }

    /// Returns the number of units.
    #[must_use]
    pub const fn units(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse trimmed numeric text, tolerating a bare leading or trailing dot
/// (`".5"`, `"5."`) and scientific notation.
fn parse_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_owned()
    };
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}
