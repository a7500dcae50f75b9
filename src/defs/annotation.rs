use std::collections::BTreeMap;

use lazy_static::lazy_static;

/// String-keyed, string-valued annotation storage.
///
/// Well-known annotations live in the same map as vendor ones, under their
/// canonical keys. `AnnotationName` is the type-safe handle for the
/// well-known set.
pub type Annotations = BTreeMap<String, String>;

/// The closed set of well-known annotations recognized by the binding layer.
///
/// Any IDL or annotation front end populating definitions must emit these
/// exact keys for the flag predicates on the definition types to function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnnotationName {
    Deprecated,
    DocString,
    Sessionless,
    Sessioncast,
    Unicast,
    GlobalBroadcast,
    NoReply,
    EmitsChanged,
}

impl AnnotationName {
    /// The canonical reversed-domain key stored in the annotation map.
    pub fn as_key(self) -> &'static str {
        match self {
            AnnotationName::Deprecated => "org.freedesktop.DBus.Deprecated",
            AnnotationName::DocString => "org.mbus.DocString",
            AnnotationName::Sessionless => "org.mbus.Signal.Sessionless",
            AnnotationName::Sessioncast => "org.mbus.Signal.Sessioncast",
            AnnotationName::Unicast => "org.mbus.Signal.Unicast",
            AnnotationName::GlobalBroadcast => "org.mbus.Signal.GlobalBroadcast",
            AnnotationName::NoReply => "org.freedesktop.DBus.Method.NoReply",
            AnnotationName::EmitsChanged => "org.freedesktop.DBus.Property.EmitsChangedSignal",
        }
    }

    /// Reverse lookup from a stored key. `None` for vendor/unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        WELL_KNOWN.get(key).copied()
    }
}

lazy_static! {
    static ref WELL_KNOWN: BTreeMap<&'static str, AnnotationName> = {
        let names = [
            AnnotationName::Deprecated,
            AnnotationName::DocString,
            AnnotationName::Sessionless,
            AnnotationName::Sessioncast,
            AnnotationName::Unicast,
            AnnotationName::GlobalBroadcast,
            AnnotationName::NoReply,
            AnnotationName::EmitsChanged,
        ];

        let mut table = BTreeMap::new();
        for name in names.iter() {
            table.insert(name.as_key(), *name);
        }
        table
    };
}

// A flag is set only by the literal value "true", any case. Absence or any
// other value reads as unset, never as an error.
pub(crate) fn is_flag_set(value: Option<&str>) -> bool {
    match value {
        Some(val) => val.eq_ignore_ascii_case("true"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_flag_set, AnnotationName};

    #[test]
    fn test_key_round_trip() {
        let names = [
            AnnotationName::Deprecated,
            AnnotationName::DocString,
            AnnotationName::Sessionless,
            AnnotationName::Sessioncast,
            AnnotationName::Unicast,
            AnnotationName::GlobalBroadcast,
            AnnotationName::NoReply,
            AnnotationName::EmitsChanged,
        ];

        for name in names.iter() {
            assert_eq!(AnnotationName::from_key(name.as_key()), Some(*name));
        }
        assert_eq!(AnnotationName::from_key("com.vendor.Custom"), None);
    }

    #[test]
    fn test_flag_interpretation() {
        assert!(is_flag_set(Some("true")));
        assert!(is_flag_set(Some("TRUE")));
        assert!(is_flag_set(Some("True")));

        assert!(!is_flag_set(Some("false")));
        assert!(!is_flag_set(Some("1")));
        assert!(!is_flag_set(Some("yes")));
        assert!(!is_flag_set(Some("")));
        assert!(!is_flag_set(None));
    }
}
