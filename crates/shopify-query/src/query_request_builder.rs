use crate::ArgValue;
use crate::ArgumentMap;
use crate::FieldGroup;
use crate::FieldSpec;
use crate::OperationKind;
use crate::QueryBuildError;
use crate::QueryRequest;
use crate::VariableDefinition;
use crate::field_spec;
use crate::names;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, QueryBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub struct QueryRequestBuilder {
    arguments: ArgumentMap,
    entity: String,
    fields: Vec<FieldSpec>,
    kind: OperationKind,
    operation_name: Option<String>,
    variables: IndexMap<String, VariableDefinition>,
}
impl QueryRequestBuilder {
    pub fn new(kind: OperationKind, entity: impl Into<String>) -> Self {
        Self {
            arguments: ArgumentMap::new(),
            entity: entity.into(),
            fields: vec![],
            kind,
            operation_name: None,
            variables: IndexMap::new(),
        }
    }

    /// Add an argument to the root entity after any previously added
    /// arguments.
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

    /// Add a [`VariableDefinition`] after any previously added variables.
    pub fn add_variable(mut self, variable: VariableDefinition) -> Result<Self> {
        if self.variables.contains_key(variable.name()) {
            return Err(QueryBuildError::MalformedVariableDefinition {
                variable_name: variable.name().to_string(),
                reason: "variable was defined more than once".to_string(),
            });
        }
        self.variables.insert(variable.name().to_string(), variable);
        Ok(self)
    }

    /// Replace all root entity arguments added so far.
    pub fn set_arguments(mut self, arguments: ArgumentMap) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn set_operation_name(
        mut self,
        operation_name: impl Into<String>,
    ) -> Result<Self> {
        let operation_name = operation_name.into();
        if !names::is_valid_name(&operation_name) {
            return Err(QueryBuildError::MalformedOperationName {
                operation_name,
            });
        }
        self.operation_name = Some(operation_name);
        Ok(self)
    }

    /// Consume this [`QueryRequestBuilder`] to produce a [`QueryRequest`].
    pub fn build(self) -> Result<QueryRequest> {
        field_spec::validate_field_name(&self.entity)?;
        if self.fields.is_empty() {
            return Err(QueryBuildError::EmptyQuery {
                entity: self.entity,
            });
        }

        Ok(QueryRequest {
            kind: self.kind,
            operation_name: self.operation_name,
            root: FieldGroup::new(self.entity, self.arguments, self.fields)?,
            variables: self.variables,
        })
    }
}
