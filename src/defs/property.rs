use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::defs::annotation::{AnnotationName, Annotations};
use crate::defs::{BaseDef, DefsError};
use crate::traits::Annotated;
use crate::ProtocolResult;

/// Access mode of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
    ReadWrite,
}

impl Access {
    pub fn as_str(self) -> &'static str {
        match self {
            Access::Read => "read",
            Access::Write => "write",
            Access::ReadWrite => "readwrite",
        }
    }

    pub fn can_read(self) -> bool {
        match self {
            Access::Read | Access::ReadWrite => true,
            Access::Write => false,
        }
    }

    pub fn can_write(self) -> bool {
        match self {
            Access::Write | Access::ReadWrite => true,
            Access::Read => false,
        }
    }
}

/// Describes one property member of a bus interface: a single typed value
/// exposed for get/set access rather than a callable.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyDef {
    #[serde(flatten)]
    base:           BaseDef,
    interface_name: String,
    type_signature: String,
    access:         Access,
}

impl PropertyDef {
    /// Fails if `name` or `interface_name` is empty. The type signature is
    /// one complete type token, treated as opaque.
    pub fn new(
        name: String,
        type_signature: String,
        access: Access,
        interface_name: String,
    ) -> ProtocolResult<Self> {
        let base = BaseDef::new(name)?;
        if interface_name.is_empty() {
            return Err(DefsError::EmptyInterfaceName {
                def: base.name().to_owned(),
            }
            .into());
        }

        Ok(PropertyDef {
            base,
            interface_name,
            type_signature,
            access,
        })
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    pub fn type_signature(&self) -> &str {
        &self.type_signature
    }

    pub fn access(&self) -> Access {
        self.access
    }

    /// Raw value of the EmitsChanged annotation ("true", "invalidates",
    /// "false", ...). `None` when the annotation is absent; defaulting
    /// policy belongs to the introspection consumer.
    pub fn emits_changed(&self) -> Option<&str> {
        self.annotation(AnnotationName::EmitsChanged.as_key())
    }
}

impl Annotated for PropertyDef {
    fn annotations(&self) -> &Annotations {
        self.base.annotations()
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        self.base.annotations_mut()
    }
}

impl fmt::Display for PropertyDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "property {}.{} type={:?} access={}",
            self.interface_name,
            self.name(),
            self.type_signature,
            self.access.as_str()
        )
    }
}

// Identity is (interface_name, name, type_signature).
impl PartialEq for PropertyDef {
    fn eq(&self, other: &Self) -> bool {
        self.interface_name == other.interface_name
            && self.name() == other.name()
            && self.type_signature == other.type_signature
    }
}

impl Eq for PropertyDef {}

impl Hash for PropertyDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.interface_name.hash(state);
        self.name().hash(state);
        self.type_signature.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::{Access, PropertyDef};
    use crate::defs::AnnotationName;
    use crate::traits::Annotated;

    fn volume() -> PropertyDef {
        PropertyDef::new(
            "Volume".to_owned(),
            "u".to_owned(),
            Access::ReadWrite,
            "com.example.Iface".to_owned(),
        )
        .unwrap()
    }

    #[test]
    fn test_construction() {
        assert!(PropertyDef::new(
            "".to_owned(),
            "u".to_owned(),
            Access::Read,
            "com.example.Iface".to_owned()
        )
        .is_err());
        assert!(PropertyDef::new(
            "Volume".to_owned(),
            "u".to_owned(),
            Access::Read,
            "".to_owned()
        )
        .is_err());
    }

    #[test]
    fn test_access_modes() {
        assert!(Access::Read.can_read());
        assert!(!Access::Read.can_write());
        assert!(!Access::Write.can_read());
        assert!(Access::Write.can_write());
        assert!(Access::ReadWrite.can_read());
        assert!(Access::ReadWrite.can_write());

        assert_eq!(volume().access().as_str(), "readwrite");
    }

    #[test]
    fn test_emits_changed() {
        let mut property = volume();
        assert_eq!(property.emits_changed(), None);

        property.annotate(AnnotationName::EmitsChanged, "invalidates".to_owned());
        assert_eq!(property.emits_changed(), Some("invalidates"));
    }

    #[test]
    fn test_identity_includes_type() {
        let left = volume();
        let right = volume();
        assert_eq!(left, right);

        let other_type = PropertyDef::new(
            "Volume".to_owned(),
            "d".to_owned(),
            Access::ReadWrite,
            "com.example.Iface".to_owned(),
        )
        .unwrap();
        assert_ne!(left, other_type);

        // access and annotations are not identity
        let read_only = PropertyDef::new(
            "Volume".to_owned(),
            "u".to_owned(),
            Access::Read,
            "com.example.Iface".to_owned(),
        )
        .unwrap();
        assert_eq!(left, read_only);
    }
}
