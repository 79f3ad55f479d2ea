//! Core types for the `eventbus` dispatcher.
//!
//! All types use smart constructors to ensure validity at construction time,
//! following the "parse, don't validate" principle.

use nutype::nutype;

/// The name of an event, used as the key of the subscription registry.
///
/// `EventName` values are guaranteed to be non-empty and at most 255
/// characters. Once constructed, an `EventName` is always valid - no further
/// validation needed.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 255),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct EventName(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_is_accepted() {
        let name = EventName::try_new("event").unwrap();
        assert_eq!(name.as_ref(), "event");
    }

    #[test]
    fn name_is_trimmed() {
        let name = EventName::try_new("  order.placed  ").unwrap();
        assert_eq!(name.as_ref(), "order.placed");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(EventName::try_new("").is_err());
        assert!(EventName::try_new("   ").is_err());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let long = "x".repeat(256);
        assert!(EventName::try_new(long.as_str()).is_err());
        assert!(EventName::try_new("x".repeat(255)).is_ok());
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = EventName::try_new("event").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"event\"");
        let back: EventName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
