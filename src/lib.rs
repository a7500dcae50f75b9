pub mod defs;
pub mod registry;
pub mod traits;

use std::error::Error;

use derive_more::{Constructor, Display};

#[derive(Debug, Clone)]
pub enum ProtocolErrorKind {
    // defs
    Defs,

    // registry
    Registry,

    // downstream binding layers
    Introspection,
    Marshal,
}

#[derive(Debug, Constructor, Display)]
#[display(fmt = "[ProtocolError] Kind: {:?} Error: {:?}", kind, error)]
pub struct ProtocolError {
    kind:  ProtocolErrorKind,
    error: Box<dyn Error + Send>,
}

impl From<ProtocolError> for Box<dyn Error + Send> {
    fn from(error: ProtocolError) -> Self {
        Box::new(error) as Box<dyn Error + Send>
    }
}

impl Error for ProtocolError {}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
