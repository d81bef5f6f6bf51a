/// The scalar value types an option may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 32 bit signed integer.
    Int,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Text, taken verbatim.
    String,
    /// Boolean, where only `true` and `1` are truthy.
    Bool,
}

/// The value type of an option, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A single value.
    Scalar(ScalarKind),
    /// A comma delimited list of values, all of the same scalar kind.
    List(ScalarKind),
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Scalar(scalar) => write!(f, "{scalar}"),
            ValueKind::List(scalar) => write!(f, "list<{scalar}>"),
        }
    }
}
