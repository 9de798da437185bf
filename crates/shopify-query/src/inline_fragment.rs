use crate::FieldSpec;
use crate::MalformedFieldReason;
use crate::QueryBuildError;
use crate::names;

/// A type-conditioned selection such as `... on WebhookHttpEndpoint { callbackUrl }`,
/// used to select fields of a concrete type behind an interface or union.
///
/// Fragments never carry arguments, so they are never wrapped as connections.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) type_condition: String,
}
impl InlineFragment {
    pub fn new(
        type_condition: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, QueryBuildError> {
        let type_condition = type_condition.into();
        if !names::is_valid_name(&type_condition) {
            return Err(QueryBuildError::malformed_field(
                &type_condition,
                MalformedFieldReason::InvalidTypeCondition,
            ));
        }
        if fields.is_empty() {
            return Err(QueryBuildError::malformed_field(
                &type_condition,
                MalformedFieldReason::NoChildFields,
            ));
        }

        Ok(Self {
            fields,
            type_condition,
        })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        self.fields.as_slice()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
