use crate::QueryBuildError;
use crate::names;

/// A variable declared on an operation, e.g. `$topic: WebhookSubscriptionTopic!`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct VariableDefinition {
    name: String,
    type_annotation: String,
}
impl VariableDefinition {
    /// `name` is given without its leading `$`.
    pub fn new(
        name: impl Into<String>,
        type_annotation: impl Into<String>,
    ) -> Result<Self, QueryBuildError> {
        let name = name.into();
        let type_annotation = type_annotation.into();
        if !names::is_valid_name(&name) {
            return Err(QueryBuildError::MalformedVariableDefinition {
                variable_name: name,
                reason: "not a valid GraphQL name".to_string(),
            });
        }
        if !names::is_valid_type_annotation(&type_annotation) {
            return Err(QueryBuildError::MalformedVariableDefinition {
                variable_name: name,
                reason: format!("`{type_annotation}` is not a valid type annotation"),
            });
        }

        Ok(Self {
            name,
            type_annotation,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }
}
