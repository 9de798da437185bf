use crate::ArgValue;
use crate::ArgumentMap;
use crate::FieldGroup;
use crate::FieldSpec;
use crate::OperationKind;
use crate::QueryRequest;
use crate::VariableDefinition;
use crate::render;
use crate::tests::utils::assert_parses;
use crate::tests::utils::scalar;
use crate::tests::utils::scalars;

#[test]
fn simple_entity_query() {
    let request = QueryRequest::new(
        OperationKind::Query,
        "product",
        ArgumentMap::new(),
        scalars(&["id", "title", "handle"]),
    ).unwrap();

    let rendered = render(&request);
    assert_eq!(
        rendered,
        "query {\n  product {\n    id\n    title\n    handle\n  }\n}",
    );
    assert_parses(&rendered);
}

#[test]
fn root_arguments_make_a_connection() {
    let args = ArgumentMap::new()
        .with("first", 100).unwrap()
        .with("query", ArgValue::literal("\"status:open\"")).unwrap();
    let request = QueryRequest::new(
        OperationKind::Query,
        "orders",
        args,
        scalars(&["id", "totalPrice"]),
    ).unwrap();

    let rendered = render(&request);
    assert_eq!(
        rendered,
        "query {\n  orders(\n    first: 100\n    query: \"status:open\"\n  ) {\n    edges {\n      node {\n        id\n        totalPrice\n      }\n    }\n  }\n}",
    );
    assert_parses(&rendered);
}

#[test]
fn group_without_arguments_is_a_plain_object() {
    let request = QueryRequest::builder(OperationKind::Query, "order")
        .add_scalar("id").unwrap()
        .add_field(FieldSpec::group("customer", scalars(&["email", "displayName"])).unwrap())
        .build()
        .unwrap();

    let rendered = render(&request);
    assert_eq!(rendered, concat!(
        "query {\n",
        "  order {\n",
        "    id\n",
        "    customer {\n",
        "      email\n",
        "      displayName\n",
        "    }\n",
        "  }\n",
        "}",
    ));
    assert!(!rendered.contains("edges"));
    assert_parses(&rendered);
}

#[test]
fn group_with_arguments_is_a_connection() {
    let line_items = FieldGroup::builder("lineItems")
        .add_argument("first", 5).unwrap()
        .add_scalar("id").unwrap()
        .add_scalar("quantity").unwrap()
        .build()
        .unwrap();
    let request = QueryRequest::builder(OperationKind::Query, "order")
        .add_scalar("id").unwrap()
        .add_field(line_items)
        .build()
        .unwrap();

    let rendered = render(&request);
    assert_eq!(rendered, concat!(
        "query {\n",
        "  order {\n",
        "    id\n",
        "    lineItems(\n",
        "      first: 5\n",
        "    ) {\n",
        "      edges {\n",
        "        node {\n",
        "          id\n",
        "          quantity\n",
        "        }\n",
        "      }\n",
        "    }\n",
        "  }\n",
        "}",
    ));
    assert_parses(&rendered);
}

#[test]
fn nested_connections_inside_connections() {
    let variants = FieldSpec::group_with_args(
        "variants",
        ArgumentMap::new().with("first", 10).unwrap(),
        vec![
            scalar("sku"),
            FieldSpec::group("price", scalars(&["amount", "currencyCode"])).unwrap(),
        ],
    ).unwrap();
    let request = QueryRequest::new(
        OperationKind::Query,
        "products",
        ArgumentMap::new().with("first", 2).unwrap(),
        vec![scalar("id"), variants],
    ).unwrap();

    let rendered = render(&request);
    assert_eq!(rendered, concat!(
        "query {\n",
        "  products(\n",
        "    first: 2\n",
        "  ) {\n",
        "    edges {\n",
        "      node {\n",
        "        id\n",
        "        variants(\n",
        "          first: 10\n",
        "        ) {\n",
        "          edges {\n",
        "            node {\n",
        "              sku\n",
        "              price {\n",
        "                amount\n",
        "                currencyCode\n",
        "              }\n",
        "            }\n",
        "          }\n",
        "        }\n",
        "      }\n",
        "    }\n",
        "  }\n",
        "}",
    ));
    assert_parses(&rendered);
}

#[test]
fn named_mutation_with_variables_and_input_object() {
    let request = QueryRequest::builder(OperationKind::Mutation, "webhookSubscriptionCreate")
        .set_operation_name("webhookSubscriptionCreate").unwrap()
        .add_variable(VariableDefinition::new("topic", "WebhookSubscriptionTopic!").unwrap()).unwrap()
        .add_argument("topic", ArgValue::variable("topic")).unwrap()
        .add_argument(
            "webhookSubscription",
            ArgumentMap::new()
                .with("callbackUrl", "https://example.com/hooks").unwrap()
                .with("format", ArgValue::enum_value("JSON")).unwrap(),
        ).unwrap()
        .add_field(FieldSpec::group("webhookSubscription", scalars(&["id", "topic"])).unwrap())
        .add_field(FieldSpec::group("userErrors", scalars(&["field", "message"])).unwrap())
        .build()
        .unwrap();

    let rendered = render(&request);
    // The root takes arguments, so its selection is wrapped as a connection.
    assert_eq!(rendered, concat!(
        "mutation webhookSubscriptionCreate($topic: WebhookSubscriptionTopic!) {\n",
        "  webhookSubscriptionCreate(\n",
        "    topic: $topic\n",
        "    webhookSubscription: {\n",
        "      callbackUrl: \"https://example.com/hooks\"\n",
        "      format: JSON\n",
        "    }\n",
        "  ) {\n",
        "    edges {\n",
        "      node {\n",
        "        webhookSubscription {\n",
        "          id\n",
        "          topic\n",
        "        }\n",
        "        userErrors {\n",
        "          field\n",
        "          message\n",
        "        }\n",
        "      }\n",
        "    }\n",
        "  }\n",
        "}",
    ));
    assert_parses(&rendered);
}

#[test]
fn multiple_variable_definitions_are_comma_separated() {
    let request = QueryRequest::builder(OperationKind::Query, "shop")
        .add_variable(VariableDefinition::new("a", "Int").unwrap()).unwrap()
        .add_variable(VariableDefinition::new("b", "[String!]!").unwrap()).unwrap()
        .add_scalar("name").unwrap()
        .build()
        .unwrap();

    let rendered = render(&request);
    assert!(rendered.starts_with("query($a: Int, $b: [String!]!) {\n  shop {\n"));
    assert_parses(&rendered);
}

#[test]
fn display_matches_render() {
    let request = QueryRequest::new(
        OperationKind::Query,
        "shop",
        ArgumentMap::new(),
        scalars(&["name"]),
    ).unwrap();
    assert_eq!(request.to_string(), render(&request));
}

#[test]
fn render_does_not_mutate_request() {
    let request = QueryRequest::new(
        OperationKind::Query,
        "orders",
        ArgumentMap::new().with("first", 3).unwrap(),
        scalars(&["id"]),
    ).unwrap();
    let before = request.clone();
    let first = render(&request);
    let second = render(&request);
    assert_eq!(first, second);
    assert_eq!(request, before);
}

#[test]
fn inline_fragments_select_concrete_types() {
    let endpoint = FieldSpec::group("endpoint", vec![
        scalar("__typename"),
        FieldSpec::inline_fragment("WebhookHttpEndpoint", scalars(&["callbackUrl"])).unwrap(),
        FieldSpec::inline_fragment("WebhookEventBridgeEndpoint", scalars(&["arn"])).unwrap(),
    ]).unwrap();
    let request = QueryRequest::new(
        OperationKind::Query,
        "webhookSubscriptions",
        ArgumentMap::new().with("first", 10).unwrap(),
        vec![scalar("id"), scalar("topic"), endpoint],
    ).unwrap();

    let rendered = render(&request);
    assert_eq!(rendered, concat!(
        "query {\n",
        "  webhookSubscriptions(\n",
        "    first: 10\n",
        "  ) {\n",
        "    edges {\n",
        "      node {\n",
        "        id\n",
        "        topic\n",
        "        endpoint {\n",
        "          __typename\n",
        "          ... on WebhookHttpEndpoint {\n",
        "            callbackUrl\n",
        "          }\n",
        "          ... on WebhookEventBridgeEndpoint {\n",
        "            arn\n",
        "          }\n",
        "        }\n",
        "      }\n",
        "    }\n",
        "  }\n",
        "}",
    ));
    assert_parses(&rendered);
}

#[test]
fn connections_inside_inline_fragments() {
    let fragment = FieldSpec::inline_fragment("Product", vec![
        scalar("title"),
        FieldSpec::group_with_args(
            "variants",
            ArgumentMap::new().with("first", 3).unwrap(),
            scalars(&["sku"]),
        ).unwrap(),
    ]).unwrap();
    let request = QueryRequest::builder(OperationKind::Query, "node")
        .add_scalar("id").unwrap()
        .add_field(fragment)
        .build()
        .unwrap();

    let rendered = render(&request);
    assert_eq!(rendered, concat!(
        "query {\n",
        "  node {\n",
        "    id\n",
        "    ... on Product {\n",
        "      title\n",
        "      variants(\n",
        "        first: 3\n",
        "      ) {\n",
        "        edges {\n",
        "          node {\n",
        "            sku\n",
        "          }\n",
        "        }\n",
        "      }\n",
        "    }\n",
        "  }\n",
        "}",
    ));
    assert_parses(&rendered);
}
