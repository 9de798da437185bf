use crate::ArgumentMap;
use crate::FieldGroup;
use crate::FieldSpec;
use crate::OperationKind;
use crate::QueryBuildError;
use crate::QueryRequestBuilder;
use crate::VariableDefinition;
use indexmap::IndexMap;

/// A complete, validated request for a single root entity.
///
/// The root entity follows the same rules as any nested [`FieldGroup`]:
/// if it carries arguments its fields are rendered as a connection.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryRequest {
    pub(crate) kind: OperationKind,
    pub(crate) operation_name: Option<String>,
    pub(crate) root: FieldGroup,
    pub(crate) variables: IndexMap<String, VariableDefinition>,
}
impl QueryRequest {
    /// Convenience wrapper around [`QueryRequestBuilder::new()`].
    pub fn builder(
        kind: OperationKind,
        entity: impl Into<String>,
    ) -> QueryRequestBuilder {
        QueryRequestBuilder::new(kind, entity)
    }

    /// Build an anonymous operation with no variables in one step.
    pub fn new(
        kind: OperationKind,
        entity: impl Into<String>,
        arguments: ArgumentMap,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, QueryBuildError> {
        let builder =
            QueryRequestBuilder::new(kind, entity).set_arguments(arguments);

        fields.into_iter()
            .fold(builder, |builder, field| builder.add_field(field))
            .build()
    }

    pub fn arguments(&self) -> &ArgumentMap {
        self.root.arguments()
    }

    pub fn entity(&self) -> &str {
        self.root.name()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        self.root.fields()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    /// The root entity viewed as a [`FieldGroup`].
    pub fn root(&self) -> &FieldGroup {
        &self.root
    }

    pub fn variables(&self) -> &IndexMap<String, VariableDefinition> {
        &self.variables
    }
}

impl std::fmt::Display for QueryRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render(self))
    }
}
