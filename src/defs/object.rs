use serde::Serialize;

use crate::defs::{DefsError, InterfaceDef, MethodDef, PropertyDef, SignalDef};
use crate::ProtocolResult;

/// Describes one remote object: its path and the interfaces it exposes.
/// This is the root of the definition graph handed to the introspection
/// serializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BusObjectInfo {
    path:       String,
    interfaces: Vec<InterfaceDef>,
}

impl BusObjectInfo {
    /// Fails if `path` is empty. The interface list starts empty.
    pub fn new(path: String) -> ProtocolResult<Self> {
        if path.is_empty() {
            return Err(DefsError::EmptyObjectPath.into());
        }

        Ok(BusObjectInfo {
            path,
            interfaces: Vec::new(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn interfaces(&self) -> &[InterfaceDef] {
        &self.interfaces
    }

    pub fn set_interfaces(&mut self, interfaces: Vec<InterfaceDef>) {
        self.interfaces = interfaces;
    }

    pub fn add_interface(&mut self, interface: InterfaceDef) {
        self.interfaces.push(interface);
    }

    /// The first interface whose name matches. `None` if not found.
    pub fn interface(&self, name: &str) -> Option<&InterfaceDef> {
        self.interfaces.iter().find(|iface| iface.name() == name)
    }

    /// Looks up a method through its owning interface.
    pub fn method(&self, interface_name: &str, name: &str) -> Option<&MethodDef> {
        self.interface(interface_name)?.method(name)
    }

    /// Looks up a signal through its owning interface.
    pub fn signal(&self, interface_name: &str, name: &str) -> Option<&SignalDef> {
        self.interface(interface_name)?.signal(name)
    }

    /// Looks up a property through its owning interface.
    pub fn property(&self, interface_name: &str, name: &str) -> Option<&PropertyDef> {
        self.interface(interface_name)?.property(name)
    }
}
