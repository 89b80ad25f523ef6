use serde::{Deserialize, Serialize};

use crate::style::StyleSet;

/// A node of a Micron page. The set of kinds is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Heading(Heading),
    Container(Container),
    Paragraph(Paragraph),
    Span(Span),
    Input(Input),
    Checkbox(Checkbox),
    Radio(Radio),
    Link(Link),
    Br(LineBreak),
    Hr(Rule),
}

impl Node {
    /// Name used in error messages and YAML pages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Heading(_) => "Heading",
            Node::Container(_) => "Container",
            Node::Paragraph(_) => "Paragraph",
            Node::Span(_) => "Span",
            Node::Input(_) => "Input",
            Node::Checkbox(_) => "Checkbox",
            Node::Radio(_) => "Radio",
            Node::Link(_) => "Link",
            Node::Br(_) => "Br",
            Node::Hr(_) => "Hr",
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Heading(h) => &h.children,
            Node::Container(c) => &c.children,
            Node::Span(s) => &s.children,
            _ => &[],
        }
    }

    /// Headings and rules are structural and never indented inside containers.
    pub fn is_structural(&self) -> bool {
        matches!(self, Node::Heading(_) | Node::Hr(_))
    }
}

/// Heading line; its children render one level deeper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Heading {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Heading {
    pub fn new(text: impl Into<String>) -> Self {
        Heading {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I: IntoIterator<Item = Node>>(mut self, nodes: I) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn style(mut self, style: impl Into<StyleSet>) -> Self {
        self.style = style.into();
        self
    }
}

/// Groups children under a shared style (e.g. a background block)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Container {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I: IntoIterator<Item = Node>>(mut self, nodes: I) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn style(mut self, style: impl Into<StyleSet>) -> Self {
        self.style = style.into();
        self
    }
}

/// Self-terminating run of styled text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Paragraph {
    pub text: String,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Paragraph {
            text: text.into(),
            style: StyleSet::empty(),
        }
    }

    pub fn style(mut self, style: impl Into<StyleSet>) -> Self {
        self.style = style.into();
        self
    }
}

/// Inline group rendered on a single physical line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Span {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Span {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I: IntoIterator<Item = Node>>(mut self, nodes: I) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn style(mut self, style: impl Into<StyleSet>) -> Self {
        self.style = style.into();
        self
    }
}

/// Text entry field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Input {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default)]
    pub masked: bool,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Input {
    pub fn new(name: impl Into<String>) -> Self {
        Input {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn style(mut self, style: impl Into<StyleSet>) -> Self {
        self.style = style.into();
        self
    }
}

/// Checkbox field. Micron cannot style individual checkboxes, so there is no style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Checkbox {
    #[serde(default = "default_checkbox_name")]
    pub name: String,
    #[serde(default = "default_checkbox_value")]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

fn default_checkbox_name() -> String {
    "checkbox".to_string()
}

fn default_checkbox_value() -> String {
    "1".to_string()
}

impl Default for Checkbox {
    fn default() -> Self {
        Checkbox {
            name: default_checkbox_name(),
            value: default_checkbox_value(),
            checked: false,
        }
    }
}

impl Checkbox {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Checkbox {
            name: name.into(),
            value: value.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Radio button; buttons sharing a name form a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Radio {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Radio {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Radio {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn style(mut self, style: impl Into<StyleSet>) -> Self {
        self.style = style.into();
        self
    }
}

/// Link to another page or request path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub text: String,
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Link {
            text: text.into(),
            href: href.into(),
            style: StyleSet::empty(),
        }
    }

    pub fn style(mut self, style: impl Into<StyleSet>) -> Self {
        self.style = style.into();
        self
    }
}

/// Empty line; its only effect is the newline added by the parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineBreak {
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl LineBreak {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Horizontal divider, optionally drawn with a custom character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<char>,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: char) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn style(mut self, style: impl Into<StyleSet>) -> Self {
        self.style = style.into();
        self
    }
}

macro_rules! impl_into_node {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_into_node! {
    Heading => Heading,
    Container => Container,
    Paragraph => Paragraph,
    Span => Span,
    Input => Input,
    Checkbox => Checkbox,
    Radio => Radio,
    Link => Link,
    LineBreak => Br,
    Rule => Hr,
}
