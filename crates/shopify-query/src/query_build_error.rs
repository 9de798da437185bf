/// Errors raised while constructing the pieces of a
/// [`QueryRequest`](crate::QueryRequest).
///
/// Every structural problem is reported at the point the offending node is
/// built, so a successfully built request always renders to well-formed
/// GraphQL.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum QueryBuildError {
    #[error("No fields were requested for `{entity}`.")]
    EmptyQuery {
        entity: String,
    },

    #[error("Malformed argument `{argument_name}`: {reason}.")]
    MalformedArgument {
        argument_name: String,
        reason: MalformedArgumentReason,
    },

    #[error("Malformed field `{field_name}`: {reason}.")]
    MalformedField {
        field_name: String,
        reason: MalformedFieldReason,
    },

    #[error("Operation name `{operation_name}` is not a valid GraphQL name.")]
    MalformedOperationName {
        operation_name: String,
    },

    #[error("Malformed variable definition `${variable_name}`: {reason}.")]
    MalformedVariableDefinition {
        variable_name: String,
        reason: String,
    },

    #[error("Unsupported value for argument `{argument_name}`: {reason}.")]
    UnsupportedArgumentValue {
        argument_name: String,
        reason: String,
    },
}
impl QueryBuildError {
    pub(crate) fn malformed_field(
        field_name: &str,
        reason: MalformedFieldReason,
    ) -> Self {
        Self::MalformedField {
            field_name: field_name.to_string(),
            reason,
        }
    }

    pub(crate) fn unsupported_value(
        argument_name: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedArgumentValue {
            argument_name: argument_name.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MalformedFieldReason {
    #[error("field names must not be empty")]
    EmptyName,

    #[error("not a valid GraphQL name")]
    InvalidName,

    #[error("inline fragment type conditions must be a valid GraphQL type name")]
    InvalidTypeCondition,

    #[error("a field group must select at least one sub-field")]
    NoChildFields,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MalformedArgumentReason {
    #[error("argument was specified more than once")]
    DuplicateName,

    #[error("not a valid GraphQL name")]
    InvalidName,
}
