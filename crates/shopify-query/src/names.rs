/// Returns `true` if `name` is a valid GraphQL
/// [Name](https://spec.graphql.org/October2021/#Name): one or more ASCII
/// letters, digits, or underscores that does not start with a digit.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' =>
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// Returns `true` if `type_annotation` is a syntactically valid GraphQL type
/// reference such as `ID`, `String!`, `[Int!]` or `[[Money!]!]!`.
pub(crate) fn is_valid_type_annotation(type_annotation: &str) -> bool {
    let nullable = type_annotation.strip_suffix('!').unwrap_or(type_annotation);
    match nullable.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => is_valid_type_annotation(inner),
        None => is_valid_name(nullable),
    }
}

/// Enum values share the Name grammar but may not collide with the other
/// bare literals.
pub(crate) fn is_valid_enum_value(name: &str) -> bool {
    is_valid_name(name) && !matches!(name, "true" | "false" | "null")
}
