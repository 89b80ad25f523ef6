use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::Node;
use crate::error::MicronResult;
use crate::render::render_lines;
use crate::style::StyleSet;
use crate::validator::validate_nodes;

/// Comment appended as the last line of every built page
pub const PROVENANCE: &str = "# Made using LXMKit";

/// Root of a Micron page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Micron {
    pub children: Vec<Node>,
}

impl Micron {
    pub fn new<I: IntoIterator<Item = Node>>(children: I) -> Self {
        Micron {
            children: children.into_iter().collect(),
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Render the top-level children, one per line, without the provenance line.
    pub fn render(&self) -> String {
        render_lines(&self.children, 0, &StyleSet::EMPTY)
    }

    /// Render the page and append the provenance line, as UTF-8 bytes.
    pub fn build(&self) -> Vec<u8> {
        let body = self.render();
        log::debug!(
            "built micron page: {} top-level nodes, {} bytes of markup",
            self.children.len(),
            body.len()
        );

        let page = if self.children.is_empty() {
            PROVENANCE.to_string()
        } else {
            format!("{}\n{}", body, PROVENANCE)
        };
        page.into_bytes()
    }

    /// Check the tree against the markup's structural rules.
    pub fn validate(&self) -> MicronResult<()> {
        validate_nodes(&self.children)
    }
}

impl fmt::Display for Micron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Container, Heading, LineBreak, Paragraph};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_build_is_provenance_only() {
        assert_eq!(Micron::default().build(), PROVENANCE.as_bytes().to_vec());
    }

    #[test]
    fn test_render_joins_top_level_nodes() {
        let page = Micron::default()
            .child(Heading::new("One"))
            .child(Paragraph::new("two"));
        assert_eq!(page.render(), "> One\ntwo`f`b");
        assert_eq!(page.to_string(), page.render());
    }

    #[test]
    fn test_build_appends_provenance() {
        let page = Micron::new([Heading::new("Hello").into()]);
        let built = String::from_utf8(page.build()).unwrap();
        assert_eq!(built, "> Hello\n# Made using LXMKit");
    }

    #[test]
    fn test_build_keeps_blank_body_lines() {
        let page = Micron::default().child(LineBreak::new());
        assert_eq!(page.build(), b"\n# Made using LXMKit".to_vec());

        let page = Micron::default().child(Container::new());
        assert_eq!(page.build(), b"\n# Made using LXMKit".to_vec());
    }

    #[test]
    fn test_build_keeps_utf8() {
        let page = Micron::default().child(Paragraph::new("naïve ∿"));
        let built = page.build();
        assert_eq!(std::str::from_utf8(&built).unwrap(), "naïve ∿`f`b\n# Made using LXMKit");
    }
}
