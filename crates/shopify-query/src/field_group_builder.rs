use crate::ArgValue;
use crate::ArgumentMap;
use crate::FieldGroup;
use crate::FieldSpec;
use crate::QueryBuildError;

type Result<T> = std::result::Result<T, QueryBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldGroupBuilder {
    arguments: ArgumentMap,
    fields: Vec<FieldSpec>,
    name: String,
}
impl FieldGroupBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: ArgumentMap::new(),
            fields: vec![],
            name: name.into(),
        }
    }

    /// Add an argument after any previously added arguments.
    pub fn add_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<ArgValue>,
    ) -> Result<Self> {
        self.arguments.insert(name, value)?;
        Ok(self)
    }

    /// Add a [`FieldSpec`] after any previously added fields.
    pub fn add_field(mut self, field: impl Into<FieldSpec>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Add a scalar field by name after any previously added fields.
    pub fn add_scalar(self, name: impl Into<String>) -> Result<Self> {
        Ok(self.add_field(FieldSpec::scalar(name)?))
    }

    /// Consume this [`FieldGroupBuilder`] to produce a [`FieldGroup`].
    pub fn build(self) -> Result<FieldGroup> {
        FieldGroup::new(self.name, self.arguments, self.fields)
    }
}
