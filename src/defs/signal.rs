use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::defs::annotation::{AnnotationName, Annotations};
use crate::defs::{ArgDef, BaseDef, DefsError};
use crate::traits::{Annotated, Member};
use crate::ProtocolResult;

/// Describes one signal member of a bus interface.
///
/// Signals are fire-and-forget: they carry input parameters and never a
/// reply. Annotations commonly used: DocString, Deprecated, Sessionless,
/// Sessioncast, Unicast, GlobalBroadcast.
#[derive(Debug, Clone, Serialize)]
pub struct SignalDef {
    #[serde(flatten)]
    base:           BaseDef,
    interface_name: String,
    signature:      String,
    args:           Vec<ArgDef>,
}

impl SignalDef {
    /// Fails if `name` or `interface_name` is empty. An empty `signature`
    /// is valid and describes a zero-argument signal. The argument list
    /// starts empty.
    pub fn new(name: String, signature: String, interface_name: String) -> ProtocolResult<Self> {
        let base = BaseDef::new(name)?;
        if interface_name.is_empty() {
            return Err(DefsError::EmptyInterfaceName {
                def: base.name().to_owned(),
            }
            .into());
        }

        Ok(SignalDef {
            base,
            interface_name,
            signature,
            args: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// The name of the owning bus interface.
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// The input parameter signature: the concatenated type tokens of the
    /// arguments, in wire order. Consistency with the argument list is the
    /// builder's responsibility; it is not cross-checked here.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// A signal has no return value, which on the wire is an empty reply
    /// signature. Provided as a convenience so that callers need not
    /// special-case signals against method replies.
    pub fn reply_signature(&self) -> &str {
        ""
    }

    /// The contained arg definitions, in declaration order.
    pub fn args(&self) -> &[ArgDef] {
        &self.args
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
                "duplicate arg {:?} on signal {}.{}",
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

    /// Whether emission is sessionless.
    pub fn is_sessionless(&self) -> bool {
        self.flag(AnnotationName::Sessionless)
    }

    /// Whether emission is sessioncast.
    pub fn is_sessioncast(&self) -> bool {
        self.flag(AnnotationName::Sessioncast)
    }

    /// Whether emission is unicast.
    pub fn is_unicast(&self) -> bool {
        self.flag(AnnotationName::Unicast)
    }

    /// Whether emission is global broadcast.
    pub fn is_global_broadcast(&self) -> bool {
        self.flag(AnnotationName::GlobalBroadcast)
    }
}

impl Annotated for SignalDef {
    fn annotations(&self) -> &Annotations {
        self.base.annotations()
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        self.base.annotations_mut()
    }
}

impl Member for SignalDef {
    fn name(&self) -> &str {
        SignalDef::name(self)
    }

    fn interface_name(&self) -> &str {
        SignalDef::interface_name(self)
    }

    fn signature(&self) -> &str {
        SignalDef::signature(self)
    }

    fn reply_signature(&self) -> &str {
        SignalDef::reply_signature(self)
    }
}

impl fmt::Display for SignalDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "signal {}.{} signature={:?}",
            self.interface_name,
            self.name(),
            self.signature
        )
    }
}

// Identity is (interface_name, name, signature). Args and annotations are
// excluded so that independently parsed copies of the same logical signal
// compare equal even when one is re-annotated.
impl PartialEq for SignalDef {
    fn eq(&self, other: &Self) -> bool {
        self.interface_name == other.interface_name
            && self.name() == other.name()
            && self.signature == other.signature
    }
}

impl Eq for SignalDef {}

impl Hash for SignalDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.interface_name.hash(state);
        self.name().hash(state);
        self.signature.hash(state);
    }
}
