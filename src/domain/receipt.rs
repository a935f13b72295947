use crate::error::{ReceiptError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A currency value carried on the wire as a decimal string, e.g. `"35.35"`.
///
/// Backed by `rust_decimal::Decimal` so the rule checks operate on the exact
/// value that was submitted rather than its nearest binary float. Only plain
/// notation is accepted (`-`, digits, optional `.digits`), and a value that
/// cannot be held without rounding is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(
    #[serde(
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "deserialize_plain_decimal"
    )]
    Decimal,
);

fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

fn deserialize_plain_decimal<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if !is_plain_decimal(&value) {
        return Err(serde::de::Error::custom(format!(
            "invalid amount {value:?}: expected digits with an optional fraction"
        )));
    }
    Decimal::from_str_exact(&value).map_err(|e| {
        serde::de::Error::custom(format!("amount {value:?} cannot be represented exactly: {e}"))
    })
}

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A single purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

/// A submitted purchase receipt.
///
/// Date and time stay in their wire form. The scoring rules parse them on
/// demand so that a malformed value only affects the rule that reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24h
    pub purchase_time: String,
    pub total: Amount,
    pub items: Vec<Item>,
}

impl Receipt {
    /// Decodes a receipt from a JSON document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(ReceiptError::InvalidReceipt)
    }
}

/// Opaque identifier under which a receipt's points are stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rust_decimal_macros::dec;

    const TARGET: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"}
        ],
        "total": "18.74"
    }"#;

    #[test]
    fn test_receipt_deserialization() {
        let receipt = Receipt::from_slice(TARGET.as_bytes()).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.total, Amount::new(dec!(18.74)));
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[1].price.value(), dec!(12.25));
    }

    #[test]
    fn test_amount_keeps_wire_precision() {
        let item: Item =
            serde_json::from_str(r#"{"shortDescription": "Gum", "price": "35.10"}"#).unwrap();
        assert_eq!(item.price.value(), dec!(35.10));
        assert_eq!(serde_json::to_string(&item.price).unwrap(), r#""35.10""#);
    }

    #[test]
    fn test_amount_rejects_bare_number() {
        let result = serde_json::from_str::<Item>(r#"{"shortDescription": "Gum", "price": 1.25}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_amount_rejects_non_plain_notation() {
        for price in ["1_000.00", "1e3", "+1.00", ".50", "1.", "1.2.3", "", " 1.00", "-", "NaN"] {
            let body = format!(r#"{{"shortDescription": "Gum", "price": "{price}"}}"#);
            assert!(serde_json::from_str::<Item>(&body).is_err(), "price {price:?}");
        }
    }

    #[test]
    fn test_amount_rejects_values_that_would_round() {
        let body = r#"{
            "retailer": "Target", "purchaseDate": "2022-01-01", "purchaseTime": "13:01",
            "items": [], "total": "0.000000000000000000000000000001"
        }"#;
        let err = Receipt::from_slice(body.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_amount_accepts_negative_and_whole_values() {
        for (price, expected) in [("-1.25", dec!(-1.25)), ("12", dec!(12)), ("0.0", dec!(0.0))] {
            let body = format!(r#"{{"shortDescription": "Gum", "price": "{price}"}}"#);
            let item: Item = serde_json::from_str(&body).unwrap();
            assert_eq!(item.price.value(), expected);
        }
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let body = r#"{"retailer": "Target", "purchaseDate": "2022-01-01", "items": [], "total": "1.00"}"#;
        let err = Receipt::from_slice(body.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_non_numeric_price_is_invalid() {
        let body = r#"{
            "retailer": "Target", "purchaseDate": "2022-01-01", "purchaseTime": "13:01",
            "items": [{"shortDescription": "Gum", "price": "cheap"}], "total": "1.00"
        }"#;
        let err = Receipt::from_slice(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ReceiptError::InvalidReceipt(_)));
    }

    #[test]
    fn test_receipt_id_is_transparent() {
        let id = ReceiptId::new("7fb1377b-b223-49d9-a31a-5a02701dd310");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#""7fb1377b-b223-49d9-a31a-5a02701dd310""#
        );
        assert_eq!(id.to_string(), id.as_str());
    }
}
