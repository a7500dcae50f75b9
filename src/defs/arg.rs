use serde::Serialize;

/// Direction of a method argument. Signal arguments carry no direction,
/// signals are input-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

/// One positional parameter of an interface member.
///
/// The type signature is an opaque token of the bus type alphabet ("s", "i",
/// "a{sv}", ...); no validation of the alphabet happens here. Owned by
/// exactly one member definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgDef {
    name:           String,
    type_signature: String,
    direction:      Option<Direction>,
}

impl ArgDef {
    pub fn new(name: String, type_signature: String) -> Self {
        ArgDef {
            name,
            type_signature,
            direction: None,
        }
    }

    pub fn with_direction(name: String, type_signature: String, direction: Direction) -> Self {
        ArgDef {
            name,
            type_signature,
            direction: Some(direction),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_signature(&self) -> &str {
        &self.type_signature
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}
