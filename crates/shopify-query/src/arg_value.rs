use crate::ArgumentMap;
use crate::QueryBuildError;
use crate::names;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// A value passed to a field or entity argument.
///
/// Values are checked when they are inserted into an [`ArgumentMap`], so an
/// `ArgValue` that the renderer cannot express as a GraphQL literal (a
/// non-finite float, a variable whose name is not a valid GraphQL name, ...)
/// never makes it into a built request.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Bool(bool),

    /// A bare enum value such as `ORDERS_CREATE`.
    Enum(String),

    Float(f64),
    Int(i64),
    List(Vec<ArgValue>),

    /// A string that the caller has already quoted and escaped. Rendered
    /// verbatim, e.g. `"\"status:open\""` becomes `"status:open"`.
    Literal(String),

    /// A nested input object, rendered between braces.
    Object(ArgumentMap),

    /// A raw string. Rendered as a quoted, escaped GraphQL string.
    String(String),

    /// A reference to an operation variable, rendered as `$name`.
    Variable(String),
}
impl ArgValue {
    pub fn enum_value(value: impl Into<String>) -> Self {
        Self::Enum(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Convert a JSON value into an `ArgValue`.
    ///
    /// Strings follow the description-file conventions: a string that is
    /// already wrapped in double quotes is a pre-quoted [`ArgValue::Literal`],
    /// `$name` is an [`ArgValue::Variable`], anything else is a raw
    /// [`ArgValue::String`]. `null` has no counterpart and is rejected.
    pub fn from_json(
        argument_name: &str,
        json: &serde_json::Value,
    ) -> Result<Self> {
        let value = match json {
            serde_json::Value::Null => return Err(QueryBuildError::unsupported_value(
                argument_name,
                "`null` argument values are not supported",
            )),

            serde_json::Value::Bool(b) => Self::Bool(*b),

            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if n.is_u64() {
                    return Err(QueryBuildError::unsupported_value(
                        argument_name,
                        format!("integer `{n}` does not fit in 64 signed bits"),
                    ));
                } else {
                    match n.as_f64() {
                        Some(f) => Self::Float(f),
                        None => return Err(QueryBuildError::unsupported_value(
                            argument_name,
                            format!("number `{n}` is not representable"),
                        )),
                    }
                }
            },

            serde_json::Value::String(s) => {
                if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                    Self::Literal(s.clone())
                } else if let Some(var_name) = s.strip_prefix('$')
                    && names::is_valid_name(var_name) {
                    Self::Variable(var_name.to_string())
                } else {
                    Self::String(s.clone())
                }
            },

            serde_json::Value::Array(items) => Self::List(
                items.iter()
                    .map(|item| Self::from_json(argument_name, item))
                    .collect::<Result<Vec<_>>>()?,
            ),

            serde_json::Value::Object(entries) => {
                let mut map = ArgumentMap::new();
                for (key, entry) in entries {
                    map.insert(key.as_str(), Self::from_json(key, entry)?)?;
                }
                Self::Object(map)
            },
        };

        value.validate(argument_name)?;
        Ok(value)
    }

    /// Check that this value (and anything nested inside it) can be rendered
    /// as a GraphQL literal.
    pub(crate) fn validate(&self, argument_name: &str) -> Result<()> {
        match self {
            Self::Bool(_)
                | Self::Int(_)
                | Self::Object(_)
                | Self::String(_) => Ok(()),

            Self::Enum(value) if names::is_valid_enum_value(value) => Ok(()),
            Self::Enum(value) => Err(QueryBuildError::unsupported_value(
                argument_name,
                format!("`{value}` is not a valid enum value"),
            )),

            Self::Float(f) if f.is_finite() => Ok(()),
            Self::Float(f) => Err(QueryBuildError::unsupported_value(
                argument_name,
                format!("`{f}` has no GraphQL float literal"),
            )),

            // Emitted verbatim on the argument's own line, so it must hold
            // a single non-blank token.
            Self::Literal(literal) if literal.trim().is_empty() => Err(
                QueryBuildError::unsupported_value(
                    argument_name,
                    "pre-quoted literals must not be empty",
                ),
            ),
            Self::Literal(literal) if literal.contains(['\n', '\r']) => Err(
                QueryBuildError::unsupported_value(
                    argument_name,
                    "pre-quoted literals must not contain line breaks",
                ),
            ),
            Self::Literal(_) => Ok(()),

            Self::List(items) => items.iter()
                .try_for_each(|item| item.validate(argument_name)),

            Self::Variable(name) if names::is_valid_name(name) => Ok(()),
            Self::Variable(name) => Err(QueryBuildError::unsupported_value(
                argument_name,
                format!("`${name}` is not a valid variable reference"),
            )),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ArgumentMap> for ArgValue {
    fn from(value: ArgumentMap) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<ArgValue>> for ArgValue {
    fn from(value: Vec<ArgValue>) -> Self {
        Self::List(value)
    }
}
