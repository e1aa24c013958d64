/// Represents a runtime value in the interpreter.
///
/// Values are produced by literals and operators, stored by `set` and
/// rendered by `print`. Every operation creates a new value; existing values
/// are never changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// The value of something that has no meaningful result.
    ///
    /// Every operator rejects it. It is never printed by a program that runs
    /// to completion.
    #[default]
    Error,
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A string value.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Returns the integer if this is an integer value.
    ///
    /// # Example
    /// ```
    /// use plank::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_integer(), Some(3));
    /// assert_eq!(Value::from("3").as_integer(), None);
    /// ```
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if the value counts as true for an `if` guard.
    ///
    /// Only the integer `1` is true. Other integers, strings and the error
    /// value are all false.
    ///
    /// # Example
    /// ```
    /// use plank::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(1).is_true());
    /// assert!(!Value::Integer(2).is_true());
    /// assert!(!Value::from("1").is_true());
    /// ```
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self.as_integer(), Some(1))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "RUNTIME ERROR: "),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_without_decoration() {
        assert_eq!(Value::Integer(-12).to_string(), "-12");
        assert_eq!(Value::from("a \"b\"").to_string(), "a \"b\"");
        assert_eq!(Value::from("").to_string(), "");
    }

    #[test]
    fn error_is_the_default_and_renders_a_marker() {
        let value = Value::default();
        assert_eq!(value, Value::Error);
        assert_eq!(value.to_string(), "RUNTIME ERROR: ");
    }

    #[test]
    fn accessors_check_the_kind() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Integer(1).as_str(), None);
        assert_eq!(Value::Error.as_integer(), None);
    }
}
