/// Identifies which numeric payload a [`Value`] carries.
///
/// Every runtime value has exactly one kind. Arithmetic only ever combines
/// values of the same kind; there is no implicit promotion between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 32-bit IEEE-754 floating point.
    F32,
    /// 64-bit IEEE-754 floating point.
    F64,
    /// 32-bit signed integer.
    Int32,
}

impl ValueKind {
    /// Returns the stable diagnostic name of the kind.
    ///
    /// # Example
    /// ```
    /// use iodine::interpreter::value::ValueKind;
    ///
    /// assert_eq!(ValueKind::Int32.name(), "Int32");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::Int32 => "Int32",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a runtime value in the interpreter.
///
/// The tag selects the payload, so reading a payload of the wrong kind is
/// impossible by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A single precision floating-point value.
    F32(f32),
    /// A double precision floating-point value.
    F64(f64),
    /// A 32 bit signed integer value.
    Int32(i32),
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl Value {
    /// Returns the kind tag of the value.
    ///
    /// # Example
    /// ```
    /// use iodine::interpreter::value::{Value, ValueKind};
    ///
    /// assert_eq!(Value::F64(1.5).kind(), ValueKind::F64);
    /// assert_eq!(Value::Int32(3).kind(), ValueKind::Int32);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Int32(_) => ValueKind::Int32,
        }
    }
}

/// Renders the selected payload in decimal notation.
///
/// Floats use fixed notation with six fractional digits, integers are printed
/// as-is. Non-finite floats render as `inf`, `-inf` and `NaN`.
///
/// # Example
/// ```
/// use iodine::interpreter::value::Value;
///
/// assert_eq!(Value::Int32(-7).to_string(), "-7");
/// assert_eq!(Value::F64(2.5).to_string(), "2.500000");
/// assert_eq!(Value::F32(f32::INFINITY).to_string(), "inf");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::F32(v) => write!(f, "{v:.6}"),
            Self::F64(v) => write!(f, "{v:.6}"),
            Self::Int32(n) => write!(f, "{n}"),
        }
    }
}
