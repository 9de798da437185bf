use crate::ArgValue;
use crate::MalformedArgumentReason;
use crate::QueryBuildError;
use crate::names;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// An insertion-ordered mapping of argument names to [`ArgValue`]s.
///
/// Arguments render in exactly the order they were inserted. Some vendor APIs
/// (and snapshot tests against them) are sensitive to argument order, so that
/// order is part of this type's contract.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgumentMap(IndexMap<String, ArgValue>);
impl ArgumentMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Chaining form of [`ArgumentMap::insert()`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<ArgValue>,
    ) -> Result<Self> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Append an argument after all previously inserted arguments.
    ///
    /// Fails if `name` is not a valid GraphQL name, if it was already
    /// inserted, or if `value` cannot be rendered as a GraphQL literal.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ArgValue>,
    ) -> Result<()> {
        let name = name.into();
        if !names::is_valid_name(&name) {
            return Err(QueryBuildError::MalformedArgument {
                argument_name: name,
                reason: MalformedArgumentReason::InvalidName,
            });
        }
        if self.0.contains_key(&name) {
            return Err(QueryBuildError::MalformedArgument {
                argument_name: name,
                reason: MalformedArgumentReason::DuplicateName,
            });
        }

        let value = value.into();
        value.validate(&name)?;
        self.0.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ArgValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a ArgumentMap {
    type Item = (&'a String, &'a ArgValue);
    type IntoIter = indexmap::map::Iter<'a, String, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
