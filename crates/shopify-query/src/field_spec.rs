use crate::ArgumentMap;
use crate::FieldGroup;
use crate::InlineFragment;
use crate::MalformedFieldReason;
use crate::QueryBuildError;
use crate::names;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// A single node in the tree of fields requested from an entity.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSpec {
    Group(Box<FieldGroup>),
    InlineFragment(Box<InlineFragment>),
    Scalar(ScalarField),
}
impl FieldSpec {
    /// A leaf field selected by name alone, e.g. `id`.
    pub fn scalar(name: impl Into<String>) -> Result<Self> {
        Ok(Self::Scalar(ScalarField::new(name)?))
    }

    /// A nested field group without arguments, rendered as a plain object.
    pub fn group(
        name: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self> {
        Self::group_with_args(name, ArgumentMap::new(), fields)
    }

    /// A nested field group. A non-empty `arguments` map makes the group
    /// render as a connection.
    pub fn group_with_args(
        name: impl Into<String>,
        arguments: ArgumentMap,
        fields: Vec<FieldSpec>,
    ) -> Result<Self> {
        Ok(Self::Group(Box::new(FieldGroup::new(name, arguments, fields)?)))
    }

    /// A `... on TypeName { ... }` selection.
    pub fn inline_fragment(
        type_condition: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self> {
        Ok(Self::InlineFragment(Box::new(InlineFragment::new(type_condition, fields)?)))
    }

    /// Build a list of scalar fields from their names.
    pub fn scalars<I, S>(names: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Self::scalar).collect()
    }

    /// The selected field name, or the type condition of an inline fragment.
    pub fn name(&self) -> &str {
        match self {
            Self::Group(group) => group.name(),
            Self::InlineFragment(fragment) => fragment.type_condition(),
            Self::Scalar(scalar) => scalar.name(),
        }
    }
}

impl From<FieldGroup> for FieldSpec {
    fn from(group: FieldGroup) -> Self {
        Self::Group(Box::new(group))
    }
}

impl From<InlineFragment> for FieldSpec {
    fn from(fragment: InlineFragment) -> Self {
        Self::InlineFragment(Box::new(fragment))
    }
}

/// A leaf field with no sub-selection.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ScalarField {
    name: String,
}
impl ScalarField {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_field_name(&name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

pub(crate) fn validate_field_name(name: &str) -> Result<()> {
    if name.is_empty() {
        Err(QueryBuildError::malformed_field(name, MalformedFieldReason::EmptyName))
    } else if !names::is_valid_name(name) {
        Err(QueryBuildError::malformed_field(name, MalformedFieldReason::InvalidName))
    } else {
        Ok(())
    }
}
