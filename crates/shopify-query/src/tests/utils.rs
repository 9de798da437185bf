use crate::FieldSpec;

pub fn scalar(name: &str) -> FieldSpec {
    FieldSpec::scalar(name).unwrap()
}

pub fn scalars(names: &[&str]) -> Vec<FieldSpec> {
    FieldSpec::scalars(names.iter().copied()).unwrap()
}

/// Asserts that `text` parses as an executable GraphQL document.
pub fn assert_parses(text: &str) {
    if let Err(e) = graphql_parser::parse_query::<String>(text) {
        panic!("Rendered text failed to parse ({e}):\n{text}");
    }
}
