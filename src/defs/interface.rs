use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::defs::annotation::Annotations;
use crate::defs::{BaseDef, MethodDef, PropertyDef, SignalDef};
use crate::traits::Annotated;
use crate::ProtocolResult;

/// Describes one bus interface: a named collection of method, signal and
/// property members, plus interface-level annotations.
///
/// Members are kept in declaration order, which is also introspection
/// output order.
#[derive(Debug, Clone, Serialize)]
pub struct InterfaceDef {
    #[serde(flatten)]
    base:       BaseDef,
    announced:  bool,
    methods:    Vec<MethodDef>,
    signals:    Vec<SignalDef>,
    properties: Vec<PropertyDef>,
}

impl InterfaceDef {
    /// Fails if `name` (the fully-qualified interface name) is empty.
    pub fn new(name: String) -> ProtocolResult<Self> {
        let base = BaseDef::new(name)?;

        Ok(InterfaceDef {
            base,
            announced: false,
            methods: Vec::new(),
            signals: Vec::new(),
            properties: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// Whether the interface is included in announcements to peers.
    pub fn is_announced(&self) -> bool {
        self.announced
    }

    pub fn set_announced(&mut self, announced: bool) {
        self.announced = announced;
    }

    pub fn methods(&self) -> &[MethodDef] {
        &self.methods
    }

    pub fn signals(&self) -> &[SignalDef] {
        &self.signals
    }

    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    pub fn set_methods(&mut self, methods: Vec<MethodDef>) {
        self.methods = methods;
    }

    pub fn set_signals(&mut self, signals: Vec<SignalDef>) {
        self.signals = signals;
    }

    pub fn set_properties(&mut self, properties: Vec<PropertyDef>) {
        self.properties = properties;
    }

    pub fn add_method(&mut self, method: MethodDef) {
        self.check_owner(method.interface_name(), method.name());
        self.methods.push(method);
    }

    pub fn add_signal(&mut self, signal: SignalDef) {
        self.check_owner(signal.interface_name(), signal.name());
        self.signals.push(signal);
    }

    pub fn add_property(&mut self, property: PropertyDef) {
        self.check_owner(property.interface_name(), property.name());
        self.properties.push(property);
    }

    /// The first method whose name matches. `None` if not found.
    pub fn method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|method| method.name() == name)
    }

    /// The first signal whose name matches. `None` if not found.
    pub fn signal(&self, name: &str) -> Option<&SignalDef> {
        self.signals.iter().find(|signal| signal.name() == name)
    }

    /// The first property whose name matches. `None` if not found.
    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|property| property.name() == name)
    }

    // Members declaring a different owning interface are accepted, the
    // builder may be assembling from partial sources.
    fn check_owner(&self, interface_name: &str, member_name: &str) {
        if interface_name != self.name() {
            log::warn!(
                "member {} declares interface {}, added to {}",
                member_name,
                interface_name,
                self.name()
            );
        }
    }
}

impl Annotated for InterfaceDef {
    fn annotations(&self) -> &Annotations {
        self.base.annotations()
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        self.base.annotations_mut()
    }
}

impl fmt::Display for InterfaceDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "interface {} ({} methods, {} signals, {} properties)",
            self.name(),
            self.methods.len(),
            self.signals.len(),
            self.properties.len()
        )
    }
}

// Identity is the interface name alone: two independently parsed
// descriptions of the same interface compare equal even when their member
// lists or annotations differ.
impl PartialEq for InterfaceDef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for InterfaceDef {}

impl Hash for InterfaceDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::InterfaceDef;
    use crate::defs::{Access, ArgDef, MethodDef, PropertyDef, SignalDef};

    const IFACE: &str = "com.example.Iface";

    fn iface() -> InterfaceDef {
        let mut iface = InterfaceDef::new(IFACE.to_owned()).unwrap();

        let mut notify =
            SignalDef::new("Notify".to_owned(), "s".to_owned(), IFACE.to_owned()).unwrap();
        notify.add_arg(ArgDef::new("message".to_owned(), "s".to_owned()));
        iface.add_signal(notify);

        iface.add_method(
            MethodDef::new(
                "Concat".to_owned(),
                "ss".to_owned(),
                "s".to_owned(),
                IFACE.to_owned(),
            )
            .unwrap(),
        );
        iface.add_property(
            PropertyDef::new(
                "Volume".to_owned(),
                "u".to_owned(),
                Access::ReadWrite,
                IFACE.to_owned(),
            )
            .unwrap(),
        );
        iface
    }

    #[test]
    fn test_construction() {
        assert!(InterfaceDef::new("".to_owned()).is_err());

        let iface = iface();
        assert_eq!(iface.name(), IFACE);
        assert!(!iface.is_announced());
    }

    #[test]
    fn test_member_lookup() {
        let iface = iface();
        assert_eq!(iface.signal("Notify").unwrap().signature(), "s");
        assert_eq!(iface.method("Concat").unwrap().reply_signature(), "s");
        assert_eq!(iface.property("Volume").unwrap().type_signature(), "u");

        assert!(iface.signal("Concat").is_none());
        assert!(iface.method("Notify").is_none());
        assert!(iface.property("Missing").is_none());
    }

    #[test]
    fn test_identity_by_name() {
        let full = iface();
        let empty = InterfaceDef::new(IFACE.to_owned()).unwrap();
        assert_eq!(full, empty);

        let other = InterfaceDef::new("com.example.Other".to_owned()).unwrap();
        assert_ne!(full, other);
    }
}
