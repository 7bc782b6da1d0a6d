//! Request decoding shared by the handlers.
//!
//! Neither helper ever rejects a request on its own: an unreadable body becomes an
//! empty payload (which then fails validation) and an unreadable id becomes a 404.

use super::error::{ApiError, Resource};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// Decodes a JSON object body, treating anything else as a body with every field absent.
///
/// Fields are decoded one by one, so a value serde_json cannot represent (such as
/// `1e400`) only drops its own field.
pub fn payload<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    let fields = match serde_json::from_slice::<HashMap<String, Box<RawValue>>>(body) {
        Ok(fields) => fields,
        Err(e) => {
            debug!(error = %e, "Body is not a JSON object");
            return T::default();
        }
    };

    let object: Map<String, Value> = fields
        .into_iter()
        .filter_map(|(name, raw)| match serde_json::from_str::<Value>(raw.get()) {
            Ok(value) => Some((name, value)),
            Err(e) => {
                debug!(field = %name, error = %e, "Unreadable field");
                None
            }
        })
        .collect();

    serde_json::from_value(Value::Object(object)).unwrap_or_else(|e| {
        debug!(error = %e, "Unreadable fields");
        T::default()
    })
}

/// Resolves a path id; an id with no leading integer matches no record.
pub fn path_id<I: From<u32>>(raw: &str, resource: Resource) -> Result<I, ApiError> {
    leading_integer(raw).map(I::from).ok_or_else(|| {
        debug!(%resource, id = raw, "Unparseable id");
        ApiError::NotFound(resource)
    })
}

/// Reads the integer an id segment starts with, ignoring whatever follows it.
///
/// Leading whitespace and a sign are skipped, and a `0x` prefix switches to hexadecimal,
/// so `"1.5"`, `"1abc"` and `" +01"` all read as 1. Negative and out-of-range values
/// can never name a record and read as `None`.
fn leading_integer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductPayload, UserId, UserPayload};

    #[test]
    fn test_object_body_is_decoded() {
        let payload: ProductPayload = payload(br#"{"name":"Widget","price":9.99}"#);
        assert_eq!(payload, ProductPayload::new("Widget", 9.99));
    }

    #[test]
    fn test_non_object_bodies_read_as_empty() {
        let bodies: [&[u8]; 5] = [
            b"",
            b"not json",
            b"null",
            b"42",
            br#"["Maria","12345678901","maria@example.com"]"#,
        ];
        for body in bodies {
            let decoded: UserPayload = payload(body);
            assert_eq!(decoded, UserPayload::default());
        }
    }

    #[test]
    fn test_out_of_range_number_only_drops_its_field() {
        let user: UserPayload = payload(
            br#"{"name":"Maria","cpf":"12345678901","email":"a@b.c","age":1e400}"#,
        );
        assert_eq!(user, UserPayload::new("Maria", "12345678901", "a@b.c"));

        let product: ProductPayload = payload(br#"{"name":"Widget","price":1e400}"#);
        assert_eq!(product.name.as_deref(), Some("Widget"));
        assert_eq!(product.price, None);
    }

    #[test]
    fn test_path_id() {
        assert_eq!(path_id::<UserId>("3", Resource::User).unwrap(), UserId(3));
        assert!(matches!(
            path_id::<UserId>("abc", Resource::User),
            Err(ApiError::NotFound(Resource::User))
        ));
        assert!(path_id::<UserId>("-1", Resource::User).is_err());
    }

    #[test]
    fn test_leading_integer() {
        for (raw, expected) in [
            ("1", Some(1)),
            ("01", Some(1)),
            ("1.5", Some(1)),
            ("1abc", Some(1)),
            (" +12", Some(12)),
            ("0x1A", Some(26)),
            ("-0", None),
            ("-3", None),
            ("abc", None),
            ("", None),
            ("0x", None),
            ("99999999999", None),
        ] {
            assert_eq!(leading_integer(raw), expected, "id {raw:?}");
        }
    }
}
