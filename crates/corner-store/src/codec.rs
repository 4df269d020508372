//! Persisted snapshot codec.
//!
//! The wire format is a bare JSON array of line records with decimal
//! dollar prices, and carries no schema version:
//!
//! ```json
//! [{"name":"Arabian Coffee Beans","image":"p1.png","price":15,"quantity":2}]
//! ```
//!
//! Decoding is tolerant: malformed content or a mismatched shape decodes
//! to an empty list rather than an error, so a poisoned snapshot can
//! never brick the cart.

use corner_commerce::cart::LineItem;
use corner_commerce::money::Money;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Wire shape of one persisted line.
#[derive(Debug, Serialize, Deserialize)]
struct StoredLine {
    name: String,
    image: String,
    price: f64,
    quantity: i64,
}

/// Serialize lines into the wire format.
pub fn encode(items: &[LineItem]) -> Result<String, StoreError> {
    let lines: Vec<StoredLine> = items
        .iter()
        .map(|item| StoredLine {
            name: item.name.clone(),
            image: item.image.clone(),
            price: item.unit_price.to_decimal(),
            quantity: item.quantity,
        })
        .collect();
    Ok(serde_json::to_string(&lines)?)
}

/// Deserialize a raw snapshot, defaulting to empty on any mismatch.
///
/// Each decoded line is rebuilt through [`LineItem::new`], which clamps
/// quantities into range and floors negative prices at zero.
pub fn decode(raw: &str) -> Vec<LineItem> {
    let lines: Vec<StoredLine> = match serde_json::from_str(raw) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::debug!(%err, "discarding unreadable cart snapshot");
            return Vec::new();
        }
    };

    lines
        .into_iter()
        .map(|line| {
            LineItem::new(
                line.name,
                line.image,
                Money::from_decimal(line.price),
                line.quantity,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let items = vec![
            LineItem::new("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 2),
            LineItem::new("French Coffee Beans", "p4.png", Money::from_cents(2200), 1),
        ];

        let raw = encode(&items).unwrap();
        let decoded = decode(&raw);
        assert_eq!(decoded, items);
    }

    #[test]
    fn test_decode_accepts_browser_written_snapshot() {
        // The shape an earlier localStorage-based client wrote.
        let raw = r#"[{"name":"Arabian Coffee Beans","image":"p1.png","price":15,"quantity":2}]"#;
        let items = decode(raw);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unit_price, Money::from_cents(1500));
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_decode_garbage_yields_empty() {
        assert!(decode("not json at all").is_empty());
        assert!(decode("").is_empty());
        assert!(decode("null").is_empty());
    }

    #[test]
    fn test_decode_wrong_shape_yields_empty() {
        assert!(decode(r#"{"name":"not an array"}"#).is_empty());
        assert!(decode(r#"[{"unexpected":true}]"#).is_empty());
        assert!(decode(r#"[{"name":"A","image":"x","price":"15","quantity":1}]"#).is_empty());
    }

    #[test]
    fn test_decode_clamps_out_of_range_values() {
        let raw = r#"[{"name":"A","image":"x.png","price":-4,"quantity":5000}]"#;
        let items = decode(raw);

        assert_eq!(items[0].unit_price, Money::zero());
        assert_eq!(items[0].quantity, 999);
    }

    #[test]
    fn test_encode_writes_decimal_prices() {
        let items = vec![LineItem::new(
            "Arabian Coffee Beans",
            "p1.png",
            Money::from_cents(1550),
            1,
        )];
        let raw = encode(&items).unwrap();
        assert!(raw.contains("15.5"));
    }
}
