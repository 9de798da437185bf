//! Declarative, deserializable descriptions of a [`QueryRequest`].
//!
//! A field is described either by its bare name, by an object with `name`,
//! `fields` and optional `args`, or by an inline fragment object with `on`
//! (the type condition) and `fields`:
//!
//! ```json
//! {
//!   "entity": "order",
//!   "args": { "id": "$id" },
//!   "variables": { "id": { "type": "ID!" } },
//!   "fields": [
//!     "id",
//!     { "name": "customer", "fields": ["email", "displayName"] },
//!     { "name": "lineItems", "args": { "first": 5 }, "fields": ["id", "quantity"] },
//!     { "name": "endpoint", "fields": [{ "on": "WebhookHttpEndpoint", "fields": ["callbackUrl"] }] }
//!   ]
//! }
//! ```
//!
//! See [`ArgValue::from_json()`] for how JSON argument values are
//! interpreted.

use crate::ArgValue;
use crate::ArgumentMap;
use crate::FieldSpec;
use crate::OperationKind;
use crate::QueryBuildError;
use crate::QueryRequest;
use crate::QueryRequestBuilder;
use crate::VariableDefinition;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, QueryBuildError>;

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum FieldDescription {
    Name(String),
    InlineFragment {
        on: String,
        #[serde(default)]
        fields: Vec<FieldDescription>,
    },
    Group {
        name: String,
        #[serde(default)]
        args: IndexMap<String, serde_json::Value>,
        #[serde(default)]
        fields: Vec<FieldDescription>,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct QueryDescription {
    #[serde(default)]
    pub args: IndexMap<String, serde_json::Value>,
    pub entity: String,
    pub fields: Vec<FieldDescription>,
    #[serde(default)]
    pub kind: OperationKind,
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: IndexMap<String, VariableDescription>,
}
impl QueryDescription {
    /// Values supplied for the described variables, keyed by variable name.
    /// Variables declared without a value are omitted.
    pub fn variable_values(&self) -> serde_json::Map<String, serde_json::Value> {
        self.variables.iter()
            .filter_map(|(name, var)| {
                var.value.as_ref().map(|value| (name.clone(), value.clone()))
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct VariableDescription {
    #[serde(rename = "type")]
    pub type_annotation: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

fn arguments_from_json(
    args: &IndexMap<String, serde_json::Value>,
) -> Result<ArgumentMap> {
    let mut arguments = ArgumentMap::new();
    for (name, value) in args {
        arguments.insert(name.as_str(), ArgValue::from_json(name, value)?)?;
    }
    Ok(arguments)
}

impl TryFrom<&FieldDescription> for FieldSpec {
    type Error = QueryBuildError;

    fn try_from(description: &FieldDescription) -> Result<Self> {
        match description {
            FieldDescription::Name(name) => FieldSpec::scalar(name.as_str()),
            FieldDescription::InlineFragment { on, fields } => {
                FieldSpec::inline_fragment(
                    on.as_str(),
                    fields.iter()
                        .map(FieldSpec::try_from)
                        .collect::<Result<Vec<_>>>()?,
                )
            },
            FieldDescription::Group { name, args, fields } => {
                FieldSpec::group_with_args(
                    name.as_str(),
                    arguments_from_json(args)?,
                    fields.iter()
                        .map(FieldSpec::try_from)
                        .collect::<Result<Vec<_>>>()?,
                )
            },
        }
    }
}

impl TryFrom<&QueryDescription> for QueryRequest {
    type Error = QueryBuildError;

    fn try_from(description: &QueryDescription) -> Result<Self> {
        let mut builder =
            QueryRequestBuilder::new(description.kind, description.entity.as_str())
                .set_arguments(arguments_from_json(&description.args)?);

        if let Some(operation_name) = &description.operation_name {
            builder = builder.set_operation_name(operation_name.as_str())?;
        }
        for (name, var) in &description.variables {
            builder = builder.add_variable(VariableDefinition::new(
                name.as_str(),
                var.type_annotation.as_str(),
            )?)?;
        }
        for field in &description.fields {
            builder = builder.add_field(FieldSpec::try_from(field)?);
        }

        builder.build()
    }
}

impl TryFrom<QueryDescription> for QueryRequest {
    type Error = QueryBuildError;

    fn try_from(description: QueryDescription) -> Result<Self> {
        QueryRequest::try_from(&description)
    }
}
