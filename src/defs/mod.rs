mod annotation;
mod arg;
mod base;
mod interface;
mod method;
mod object;
mod property;
mod signal;

use std::error::Error;

use derive_more::Display;

use crate::{ProtocolError, ProtocolErrorKind};

pub use annotation::{AnnotationName, Annotations};
pub use arg::{ArgDef, Direction};
pub use base::BaseDef;
pub use interface::InterfaceDef;
pub use method::MethodDef;
pub use object::BusObjectInfo;
pub use property::{Access, PropertyDef};
pub use signal::SignalDef;

pub(crate) use annotation::is_flag_set;

/// Construction-time failures. Every other operation on the definition
/// types is total: lookups return `Option`, flag predicates degrade to
/// false, list mutators cannot fail.
#[derive(Debug, Display)]
pub enum DefsError {
    #[display(fmt = "empty definition name")]
    EmptyName,

    #[display(fmt = "empty interface name on definition {}", def)]
    EmptyInterfaceName { def: String },

    #[display(fmt = "empty object path")]
    EmptyObjectPath,
}

impl Error for DefsError {}

impl From<DefsError> for ProtocolError {
    fn from(err: DefsError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::Defs, Box::new(err))
    }
}
