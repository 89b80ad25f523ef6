use crate::components::*;
use crate::error::{MicronError, MicronResult};
use regex::Regex;
use std::sync::OnceLock;

const MAX_NESTING_DEPTH: usize = 32;
const MAX_INPUT_SIZE: u32 = 1024;

/// Validate a list of top-level nodes
pub fn validate_nodes(nodes: &[Node]) -> MicronResult<()> {
    for node in nodes {
        validate_node_recursive(node, 0)?;
    }
    log::debug!("validated {} top-level nodes", nodes.len());
    Ok(())
}

/// Validate a single node and its subtree
pub fn validate_node(node: &Node) -> MicronResult<()> {
    validate_node_recursive(node, 0)
}

fn validate_node_recursive(node: &Node, depth: usize) -> MicronResult<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(MicronError::MaxNestingDepthExceeded {
            max_depth: MAX_NESTING_DEPTH,
        });
    }

    match node {
        Node::Heading(_) | Node::Container(_) => {}
        Node::Span(s) => validate_span(s)?,
        Node::Input(i) => validate_input(i)?,
        Node::Checkbox(c) => validate_checkbox(c)?,
        Node::Radio(r) => validate_radio(r)?,
        Node::Link(l) => validate_link(l)?,
        Node::Paragraph(_) | Node::Br(_) | Node::Hr(_) => {}
    }

    for child in node.children() {
        validate_node_recursive(child, depth + 1)?;
    }
    Ok(())
}

/// Spans render on one physical line, so block-level nodes are rejected.
fn validate_span(span: &Span) -> MicronResult<()> {
    for child in &span.children {
        if matches!(child, Node::Heading(_) | Node::Container(_) | Node::Hr(_)) {
            return Err(MicronError::InvalidChild {
                parent: "Span".to_string(),
                child: child.kind().to_string(),
            });
        }
    }
    Ok(())
}

fn validate_input(input: &Input) -> MicronResult<()> {
    validate_field_name("Input", &input.name)?;

    if let Some(size) = input.size {
        if size == 0 || size > MAX_INPUT_SIZE {
            return Err(MicronError::ValueOutOfRange {
                property: "size".to_string(),
                value: size.to_string(),
                range: format!("1 to {}", MAX_INPUT_SIZE),
            });
        }
    }

    validate_no_delimiters("Input", "default", &input.default, &['`', '>'])
}

fn validate_checkbox(checkbox: &Checkbox) -> MicronResult<()> {
    validate_field_name("Checkbox", &checkbox.name)?;
    validate_no_delimiters("Checkbox", "value", &checkbox.value, &['`', '|'])
}

fn validate_radio(radio: &Radio) -> MicronResult<()> {
    validate_field_name("Radio", &radio.name)?;
    validate_no_delimiters("Radio", "value", &radio.value, &['`', '|'])
}

fn validate_link(link: &Link) -> MicronResult<()> {
    validate_no_delimiters("Link", "text", &link.text, &['`', ']'])?;
    validate_no_delimiters("Link", "href", &link.href, &['`', ']'])
}

pub fn validate_field_name(component: &str, name: &str) -> MicronResult<()> {
    static FIELD_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = FIELD_NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_\-.]+$").expect("field name pattern is valid")
    });

    if re.is_match(name) {
        Ok(())
    } else {
        Err(MicronError::InvalidFieldName {
            component: component.to_string(),
            name: name.to_string(),
        })
    }
}

fn validate_no_delimiters(
    component: &str,
    property: &str,
    value: &str,
    delimiters: &[char],
) -> MicronResult<()> {
    match value.chars().find(|c| delimiters.contains(c)) {
        Some(found) => Err(MicronError::InvalidProperty {
            component: component.to_string(),
            property: property.to_string(),
            reason: format!("must not contain '{}'", found),
        }),
        None => Ok(()),
    }
}
