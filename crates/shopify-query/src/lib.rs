//! Builds and renders Shopify-style GraphQL queries and mutations.
//!
//! Callers describe the shape of a request as a tree of [`FieldSpec`]s (bare
//! scalar fields and nested [`FieldGroup`]s) hanging off a root entity, then
//! render it to an indented GraphQL document with [`render()`]. Any field
//! group that carries arguments is treated as a paginated connection and its
//! sub-fields are wrapped in `edges { node { ... } }`.
//!
//! ```
//! use shopify_query::ArgValue;
//! use shopify_query::FieldSpec;
//! use shopify_query::OperationKind;
//! use shopify_query::QueryRequest;
//!
//! let request = QueryRequest::builder(OperationKind::Query, "orders")
//!     .add_argument("first", 100)?
//!     .add_argument("query", ArgValue::literal("\"status:open\""))?
//!     .add_field(FieldSpec::scalar("id")?)
//!     .add_field(FieldSpec::scalar("totalPrice")?)
//!     .build()?;
//!
//! assert!(shopify_query::render(&request).starts_with("query {\n  orders(\n"));
//! # Ok::<(), shopify_query::QueryBuildError>(())
//! ```

mod arg_value;
mod argument_map;
pub mod description;
mod field_group;
mod field_group_builder;
mod field_spec;
mod inline_fragment;
mod names;
mod operation_kind;
mod query_build_error;
mod query_request;
mod query_request_builder;
mod renderer;
mod variable_definition;

pub use arg_value::ArgValue;
pub use argument_map::ArgumentMap;
pub use field_group::FieldGroup;
pub use field_group::FieldShape;
pub use field_group_builder::FieldGroupBuilder;
pub use field_spec::FieldSpec;
pub use field_spec::ScalarField;
pub use inline_fragment::InlineFragment;
pub use names::is_valid_name;
pub use operation_kind::OperationKind;
pub use query_build_error::MalformedArgumentReason;
pub use query_build_error::MalformedFieldReason;
pub use query_build_error::QueryBuildError;
pub use query_request::QueryRequest;
pub use query_request_builder::QueryRequestBuilder;
pub use renderer::render;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
