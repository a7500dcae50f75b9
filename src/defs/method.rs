use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::defs::annotation::{AnnotationName, Annotations};
use crate::defs::{ArgDef, BaseDef, DefsError, Direction};
use crate::traits::{Annotated, Member};
use crate::ProtocolResult;

/// Describes one method member of a bus interface.
///
/// Unlike signals, methods carry both an input signature and a reply
/// signature; the argument list holds both directions, distinguished by
/// each arg's `Direction`.
#[derive(Debug, Clone, Serialize)]
pub struct MethodDef {
    #[serde(flatten)]
    base:            BaseDef,
    interface_name:  String,
    signature:       String,
    reply_signature: String,
    args:            Vec<ArgDef>,
}

impl MethodDef {
    /// Fails if `name` or `interface_name` is empty. Either signature may
    /// be empty (no inputs, or a void reply).
    pub fn new(
        name: String,
        signature: String,
        reply_signature: String,
        interface_name: String,
    ) -> ProtocolResult<Self> {
        let base = BaseDef::new(name)?;
        if interface_name.is_empty() {
            return Err(DefsError::EmptyInterfaceName {
                def: base.name().to_owned(),
            }
            .into());
        }

        Ok(MethodDef {
            base,
            interface_name,
            signature,
            reply_signature,
            args: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn reply_signature(&self) -> &str {
        &self.reply_signature
    }

    pub fn args(&self) -> &[ArgDef] {
        &self.args
    }

    /// Args of one direction, in declaration order.
    pub fn args_in_direction(&self, direction: Direction) -> impl Iterator<Item = &ArgDef> {
        self.args
            .iter()
            .filter(move |arg| arg.direction() == Some(direction))
    }

    /// Replaces the whole argument list, preserving the order of `args`.
    pub fn set_args(&mut self, args: Vec<ArgDef>) {
        self.args = args;
    }

    /// Appends `arg` to the end of the argument list. Duplicate names are
    /// permitted; lookup returns the first match.
    pub fn add_arg(&mut self, arg: ArgDef) {
        if self.arg(arg.name()).is_some() {
            log::warn!(
                "duplicate arg {:?} on method {}.{}",
                arg.name(),
                self.interface_name,
                self.name()
            );
        }
        self.args.push(arg);
    }

    /// The first arg whose name matches `name`. `None` if not found.
    pub fn arg(&self, name: &str) -> Option<&ArgDef> {
        self.args.iter().find(|arg| arg.name() == name)
    }

    /// Whether callers should expect no method reply.
    pub fn is_no_reply(&self) -> bool {
        self.flag(AnnotationName::NoReply)
    }
}

impl Annotated for MethodDef {
    fn annotations(&self) -> &Annotations {
        self.base.annotations()
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        self.base.annotations_mut()
    }
}

impl Member for MethodDef {
    fn name(&self) -> &str {
        MethodDef::name(self)
    }

    fn interface_name(&self) -> &str {
        MethodDef::interface_name(self)
    }

    fn signature(&self) -> &str {
        MethodDef::signature(self)
    }

    fn reply_signature(&self) -> &str {
        MethodDef::reply_signature(self)
    }
}

impl fmt::Display for MethodDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "method {}.{} signature={:?} reply={:?}",
            self.interface_name,
            self.name(),
            self.signature,
            self.reply_signature
        )
    }
}

// Identity is (interface_name, name, signature, reply_signature).
impl PartialEq for MethodDef {
    fn eq(&self, other: &Self) -> bool {
        self.interface_name == other.interface_name
            && self.name() == other.name()
            && self.signature == other.signature
            && self.reply_signature == other.reply_signature
    }
}

impl Eq for MethodDef {}

impl Hash for MethodDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.interface_name.hash(state);
        self.name().hash(state);
        self.signature.hash(state);
        self.reply_signature.hash(state);
    }
}
