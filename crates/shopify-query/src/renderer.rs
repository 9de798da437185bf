use crate::ArgValue;
use crate::ArgumentMap;
use crate::FieldGroup;
use crate::FieldShape;
use crate::FieldSpec;
use crate::InlineFragment;
use crate::QueryRequest;
use crate::VariableDefinition;
use indexmap::IndexMap;

const INDENT: &str = "  ";

/// Render a [`QueryRequest`] as an indented GraphQL document.
///
/// Rendering is a pure function of the request: equal requests always
/// produce byte-identical text. The result has no trailing newline.
pub fn render(request: &QueryRequest) -> String {
    log::trace!(
        "Rendering {} for `{}` ({} top-level fields).",
        request.kind(),
        request.entity(),
        request.fields().len(),
    );

    let mut sink = String::new();
    sink.push_str(request.kind().keyword());
    if let Some(operation_name) = request.operation_name() {
        sink.push(' ');
        sink.push_str(operation_name);
    }
    append_variable_definitions(&mut sink, request.variables());
    sink.push_str(" {\n");
    append_group(&mut sink, request.root(), 1);
    sink.push('}');
    sink
}

fn append_indent(sink: &mut String, depth: usize) {
    for _ in 0..depth {
        sink.push_str(INDENT);
    }
}

fn append_variable_definitions(
    sink: &mut String,
    variables: &IndexMap<String, VariableDefinition>,
) {
    if variables.is_empty() {
        return;
    }

    sink.push('(');
    for (idx, variable) in variables.values().enumerate() {
        if idx > 0 {
            sink.push_str(", ");
        }
        sink.push('$');
        sink.push_str(variable.name());
        sink.push_str(": ");
        sink.push_str(variable.type_annotation());
    }
    sink.push(')');
}

fn append_field(sink: &mut String, field: &FieldSpec, depth: usize) {
    match field {
        FieldSpec::Group(group) => append_group(sink, group, depth),
        FieldSpec::InlineFragment(fragment) => append_inline_fragment(sink, fragment, depth),
        FieldSpec::Scalar(scalar) => {
            append_indent(sink, depth);
            sink.push_str(scalar.name());
            sink.push('\n');
        },
    }
}

fn append_group(sink: &mut String, group: &FieldGroup, depth: usize) {
    append_indent(sink, depth);
    sink.push_str(group.name());
    append_arguments(sink, group.arguments(), depth);
    sink.push_str(" {\n");

    match group.shape() {
        FieldShape::Connection => {
            append_indent(sink, depth + 1);
            sink.push_str("edges {\n");
            append_indent(sink, depth + 2);
            sink.push_str("node {\n");
            for field in group.fields() {
                append_field(sink, field, depth + 3);
            }
            append_indent(sink, depth + 2);
            sink.push_str("}\n");
            append_indent(sink, depth + 1);
            sink.push_str("}\n");
        },

        FieldShape::Plain => {
            for field in group.fields() {
                append_field(sink, field, depth + 1);
            }
        },
    }

    append_indent(sink, depth);
    sink.push_str("}\n");
}

fn append_inline_fragment(
    sink: &mut String,
    fragment: &InlineFragment,
    depth: usize,
) {
    append_indent(sink, depth);
    sink.push_str("... on ");
    sink.push_str(fragment.type_condition());
    sink.push_str(" {\n");
    for field in fragment.fields() {
        append_field(sink, field, depth + 1);
    }
    append_indent(sink, depth);
    sink.push_str("}\n");
}

/// Append a parenthesized argument list for a field whose name sits at
/// `depth`. Each argument gets its own line one level deeper and the closing
/// paren lines up with the field name. Nothing is appended for an empty map.
pub(crate) fn append_arguments(
    sink: &mut String,
    arguments: &ArgumentMap,
    depth: usize,
) {
    if arguments.is_empty() {
        return;
    }

    sink.push_str("(\n");
    append_entries(sink, arguments, depth + 1);
    append_indent(sink, depth);
    sink.push(')');
}

fn append_entries(sink: &mut String, entries: &ArgumentMap, depth: usize) {
    for (name, value) in entries {
        append_indent(sink, depth);
        sink.push_str(name);
        sink.push_str(": ");
        append_value(sink, value, depth);
        sink.push('\n');
    }
}

/// `depth` is the indentation of the line the value starts on; input objects
/// indent their entries relative to it.
pub(crate) fn append_value(sink: &mut String, value: &ArgValue, depth: usize) {
    match value {
        ArgValue::Bool(true) => sink.push_str("true"),
        ArgValue::Bool(false) => sink.push_str("false"),
        ArgValue::Enum(value) => sink.push_str(value),

        // `Debug` always keeps a fractional part or exponent (`100.0`,
        // `1e20`) and never consults the locale.
        ArgValue::Float(value) => sink.push_str(&format!("{value:?}")),

        ArgValue::Int(value) => sink.push_str(&value.to_string()),

        ArgValue::List(items) => {
            sink.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    sink.push_str(", ");
                }
                append_value(sink, item, depth);
            }
            sink.push(']');
        },

        ArgValue::Literal(literal) => sink.push_str(literal),

        ArgValue::Object(entries) if entries.is_empty() => sink.push_str("{}"),
        ArgValue::Object(entries) => {
            sink.push_str("{\n");
            append_entries(sink, entries, depth + 1);
            append_indent(sink, depth);
            sink.push('}');
        },

        ArgValue::String(value) => append_quoted_string(sink, value),

        ArgValue::Variable(name) => {
            sink.push('$');
            sink.push_str(name);
        },
    }
}

fn append_quoted_string(sink: &mut String, value: &str) {
    sink.push('"');
    for c in value.chars() {
        match c {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{08}' => sink.push_str("\\b"),
            '\u{0C}' => sink.push_str("\\f"),
            c if c.is_control() => sink.push_str(&format!("\\u{:04X}", c as u32)),
            c => sink.push(c),
        }
    }
    sink.push('"');
}
