use crate::ArgumentMap;
use crate::MalformedFieldReason;
use crate::OperationKind;
use crate::QueryBuildError;
use crate::QueryRequest;
use crate::VariableDefinition;
use crate::tests::utils::scalars;

#[test]
fn empty_field_list_is_an_empty_query() {
    let result = QueryRequest::builder(OperationKind::Query, "product").build();
    assert_eq!(result, Err(QueryBuildError::EmptyQuery {
        entity: "product".to_string(),
    }));

    let result = QueryRequest::new(
        OperationKind::Query,
        "orders",
        ArgumentMap::new().with("first", 10).unwrap(),
        vec![],
    );
    assert_eq!(result, Err(QueryBuildError::EmptyQuery {
        entity: "orders".to_string(),
    }));
}

#[test]
fn invalid_entity_name_is_malformed() {
    let result = QueryRequest::new(
        OperationKind::Query,
        "",
        ArgumentMap::new(),
        scalars(&["id"]),
    );
    assert_eq!(result, Err(QueryBuildError::MalformedField {
        field_name: String::new(),
        reason: MalformedFieldReason::EmptyName,
    }));

    let result = QueryRequest::builder(OperationKind::Query, "2orders")
        .add_scalar("id").unwrap()
        .build();
    assert!(matches!(
        result,
        Err(QueryBuildError::MalformedField {
            reason: MalformedFieldReason::InvalidName,
            ..
        }),
    ));
}

#[test]
fn accessors_reflect_builder_input() {
    let request = QueryRequest::builder(OperationKind::Mutation, "webhookSubscriptionCreate")
        .set_operation_name("createWebhook").unwrap()
        .add_variable(VariableDefinition::new("topic", "WebhookSubscriptionTopic!").unwrap()).unwrap()
        .add_argument("topic", crate::ArgValue::variable("topic")).unwrap()
        .add_scalar("id").unwrap()
        .build()
        .unwrap();

    assert_eq!(request.kind(), OperationKind::Mutation);
    assert_eq!(request.entity(), "webhookSubscriptionCreate");
    assert_eq!(request.operation_name(), Some("createWebhook"));
    assert_eq!(request.variables().len(), 1);
    assert_eq!(request.arguments().len(), 1);
    assert_eq!(request.fields().len(), 1);
}

#[test]
fn invalid_operation_name() {
    let result = QueryRequest::builder(OperationKind::Query, "shop")
        .set_operation_name("get shop");
    assert_eq!(result, Err(QueryBuildError::MalformedOperationName {
        operation_name: "get shop".to_string(),
    }));
}

#[test]
fn duplicate_variable_definitions() {
    let result = QueryRequest::builder(OperationKind::Query, "order")
        .add_variable(VariableDefinition::new("id", "ID!").unwrap()).unwrap()
        .add_variable(VariableDefinition::new("id", "ID").unwrap());
    assert!(matches!(
        result,
        Err(QueryBuildError::MalformedVariableDefinition { ref variable_name, .. })
            if variable_name == "id",
    ));
}

#[test]
fn malformed_variable_definitions() {
    assert!(matches!(
        VariableDefinition::new("$id", "ID!"),
        Err(QueryBuildError::MalformedVariableDefinition { .. }),
    ));
    assert!(matches!(
        VariableDefinition::new("id", "[ID!"),
        Err(QueryBuildError::MalformedVariableDefinition { .. }),
    ));

    let var = VariableDefinition::new("ids", "[ID!]!").unwrap();
    assert_eq!(var.name(), "ids");
    assert_eq!(var.type_annotation(), "[ID!]!");
}

#[test]
fn set_arguments_replaces_previous_arguments() {
    let request = QueryRequest::builder(OperationKind::Query, "orders")
        .add_argument("first", 10).unwrap()
        .set_arguments(ArgumentMap::new())
        .add_scalar("id").unwrap()
        .build()
        .unwrap();
    assert!(request.arguments().is_empty());
}
