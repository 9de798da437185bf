use crate::ArgumentMap;
use crate::FieldGroupBuilder;
use crate::FieldSpec;
use crate::MalformedFieldReason;
use crate::QueryBuildError;
use crate::field_spec;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// How the sub-fields of a [`FieldGroup`] are wrapped when rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldShape {
    /// Sub-fields are nested inside `edges { node { ... } }`.
    Connection,

    /// Sub-fields appear directly inside the group's braces.
    Plain,
}

/// A named field with a non-empty sub-selection and optional arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldGroup {
    pub(crate) arguments: ArgumentMap,
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) name: String,
}
impl FieldGroup {
    pub fn new(
        name: impl Into<String>,
        arguments: ArgumentMap,
        fields: Vec<FieldSpec>,
    ) -> Result<Self> {
        let name = name.into();
        field_spec::validate_field_name(&name)?;
        if fields.is_empty() {
            return Err(QueryBuildError::malformed_field(
                &name,
                MalformedFieldReason::NoChildFields,
            ));
        }

        Ok(Self {
            arguments,
            fields,
            name,
        })
    }

    /// Convenience wrapper around [`FieldGroupBuilder::new()`].
    pub fn builder(name: impl Into<String>) -> FieldGroupBuilder {
        FieldGroupBuilder::new(name)
    }

    pub fn arguments(&self) -> &ArgumentMap {
        &self.arguments
    }

    pub fn fields(&self) -> &[FieldSpec] {
        self.fields.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Groups that take arguments are assumed to be paginated connections;
    /// groups without arguments are assumed to be plain objects.
    ///
    /// This is a heuristic rather than schema knowledge: a singular field
    /// that happens to take arguments (a filtered lookup, say) will still be
    /// wrapped in `edges { node { ... } }`.
    pub fn shape(&self) -> FieldShape {
        if self.arguments.is_empty() {
            FieldShape::Plain
        } else {
            FieldShape::Connection
        }
    }
}
