//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues when line totals are accumulated.

use serde::{Deserialize, Serialize};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Honduran lempira, the storefront currency.
    #[default]
    HNL,
}

impl Currency {
    /// Get the display marker placed before the amount.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::HNL => "L ",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (centavos for HNL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use partes_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(1499.99, Currency::HNL);
    /// assert_eq!(price.amount_cents, 149999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a lempira amount from a decimal value.
    pub fn lempiras(amount: f64) -> Self {
        Self::from_decimal(amount, Currency::HNL)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "L 49.99").
    ///
    /// Fixed two decimals, no thousands grouping.
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Try to add another Money value, returning None if currencies don't match
    /// or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }
}

/// Format a decimal amount the way the storefront displays prices.
///
/// ```
/// assert_eq!(partes_commerce::money::format_currency(19.5), "L 19.50");
/// ```
pub fn format_currency(value: f64) -> String {
    Money::lempiras(value).display()
}

/// Serde adapter for amounts written as decimal numbers in page data.
pub mod decimal {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Whole amounts are written as integers (`3450`), others as decimals
    /// (`999.5`).
    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        let unit = 10_i64.pow(money.currency.decimal_places());
        if money.amount_cents % unit == 0 {
            serializer.serialize_i64(money.amount_cents / unit)
        } else {
            serializer.serialize_f64(money.to_decimal())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        f64::deserialize(deserializer).map(Money::lempiras)
    }

    /// Optional decimal amounts; `null` and absent both map to `None`.
    pub mod option {
        use super::Money;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            money: &Option<Money>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match money {
                Some(m) => serializer.serialize_some(&Decimal(m)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Money>, D::Error> {
            Option::<f64>::deserialize(deserializer).map(|v| v.map(Money::lempiras))
        }

        struct Decimal<'a>(&'a Money);

        impl serde::Serialize for Decimal<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                super::serialize(self.0, serializer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::HNL);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::lempiras(0.1 + 0.2);
        assert_eq!(m.amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(16000, Currency::HNL).display(), "L 160.00");
    }

    #[test]
    fn test_display_has_no_grouping() {
        assert_eq!(Money::lempiras(1234567.8).display(), "L 1234567.80");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "L 0.00");
        assert_eq!(format_currency(19.5), "L 19.50");
    }

    #[test]
    fn test_try_multiply_detects_overflow() {
        let m = Money::lempiras(80.0);
        assert_eq!(m.try_multiply(2).map(|m| m.display()), Some("L 160.00".to_string()));
        assert_eq!(Money::new(i64::MAX, Currency::HNL).try_multiply(2), None);
    }

    #[test]
    fn test_try_add_detects_overflow() {
        let a = Money::lempiras(10.0);
        assert_eq!(a.try_add(&Money::lempiras(5.0)).map(|m| m.amount_cents), Some(1500));
        assert_eq!(Money::new(i64::MAX, Currency::HNL).try_add(&a), None);
    }

    #[derive(Serialize)]
    struct Priced {
        #[serde(with = "decimal")]
        price: Money,
        #[serde(with = "decimal::option")]
        discount: Option<Money>,
    }

    #[test]
    fn test_decimal_serializes_whole_amounts_as_integers() {
        let priced = Priced {
            price: Money::lempiras(3450.0),
            discount: Some(Money::lempiras(999.5)),
        };
        assert_eq!(
            serde_json::to_string(&priced).unwrap(),
            r#"{"price":3450,"discount":999.5}"#
        );
    }
}
