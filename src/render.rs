//! Top-down rendering of a node tree to Micron markup.
//!
//! Every node receives the current indent depth and the style inherited from
//! its ancestors, renders its own content, then folds in its children.
//! Rendering never mutates the tree.

use crate::components::*;
use crate::style::{apply_style, restore_ambient, StyleSet};

const INDENT: &str = "  ";

/// Render a single node at `indent` with the ambient style `inherited`.
pub fn render_node(node: &Node, indent: usize, inherited: &StyleSet) -> String {
    log::trace!("rendering {} at indent {}", node.kind(), indent);

    match node {
        Node::Heading(h) => render_heading(h, indent, inherited),
        Node::Container(c) => render_container(c, indent, inherited),
        Node::Paragraph(p) => apply_style(&p.text, &p.style, true),
        Node::Span(s) => render_span(s, indent, inherited),
        Node::Input(i) => render_input(i, inherited),
        Node::Checkbox(c) => render_checkbox(c),
        Node::Radio(r) => render_radio(r, inherited),
        Node::Link(l) => render_link(l, inherited),
        Node::Br(_) => String::new(),
        Node::Hr(r) => render_rule(r),
    }
}

/// Render `nodes` one per line.
pub fn render_lines(nodes: &[Node], indent: usize, inherited: &StyleSet) -> String {
    nodes
        .iter()
        .map(|node| render_node(node, indent, inherited))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Restoration fragment, empty when the node keeps the ambient style.
fn restoration(own: &StyleSet, inherited: &StyleSet) -> String {
    if own == inherited {
        String::new()
    } else {
        restore_ambient(own, inherited)
    }
}

fn render_heading(heading: &Heading, indent: usize, inherited: &StyleSet) -> String {
    let level = indent + 1;
    let mut out = format!(
        "{} {}",
        ">".repeat(level),
        apply_style(&heading.text, &heading.style, false)
    );

    if !heading.children.is_empty() {
        let child_style = heading.style.or_inherited(inherited);
        out.push('\n');
        out.push_str(&render_lines(&heading.children, level, child_style));
    }

    out
}

fn render_container(container: &Container, indent: usize, inherited: &StyleSet) -> String {
    let child_style = container.style.or_inherited(inherited);

    let mut content = String::new();
    for child in &container.children {
        content.push('\n');
        if !child.is_structural() {
            content.push_str(&INDENT.repeat(indent));
        }
        content.push_str(&render_node(child, indent, child_style));
    }

    let mut out = apply_style(&content, &container.style, false);
    out.push_str(&restoration(&container.style, inherited));
    out
}

/// Alignment comes from the ambient style, emphasis and color from the span.
fn render_span(span: &Span, indent: usize, inherited: &StyleSet) -> String {
    let composed: StyleSet = inherited
        .line_styles()
        .chain(span.style.inline_styles())
        .collect();

    span.children
        .iter()
        .map(|child| render_node(child, indent, &composed))
        .collect()
}

fn render_input(input: &Input, inherited: &StyleSet) -> String {
    let mut flags = String::new();
    if input.masked {
        flags.push('!');
    }
    // a zero size means no width limit
    if let Some(size) = input.size.filter(|size| *size > 0) {
        flags.push_str(&format!("{}|", size));
    }

    let token = format!("`<{}{}`{}>", flags, input.name, input.default);
    let mut out = apply_style(&token, &input.style, true);
    out.push_str(&restoration(&input.style, inherited));
    out
}

fn render_checkbox(checkbox: &Checkbox) -> String {
    let checked = if checkbox.checked { "|*" } else { "" };
    format!("`< ?|{}|{}{}`>", checkbox.name, checkbox.value, checked)
}

fn render_radio(radio: &Radio, inherited: &StyleSet) -> String {
    let checked = if radio.checked { "|*" } else { "" };
    let token = format!("`<^|{}|{}{}`>", radio.name, radio.value, checked);
    let mut out = apply_style(&token, &radio.style, true);
    out.push_str(&restoration(&radio.style, inherited));
    out
}

fn render_link(link: &Link, inherited: &StyleSet) -> String {
    let token = format!("`[{}`{}]", link.text, link.href);
    let mut out = apply_style(&token, &link.style, true);
    out.push_str(&restoration(&link.style, inherited));
    out
}

fn render_rule(rule: &Rule) -> String {
    let mut token = String::from("-");
    if let Some(kind) = rule.kind {
        token.push(kind);
    }
    apply_style(&token, &rule.style, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Style};
    use pretty_assertions::assert_eq;

    fn root(node: impl Into<Node>) -> String {
        render_node(&node.into(), 0, &StyleSet::EMPTY)
    }

    #[test]
    fn test_paragraph_without_style() {
        assert_eq!(root(Paragraph::new("Hi")), "Hi`f`b");
    }

    #[test]
    fn test_paragraph_with_style() {
        let p = Paragraph::new("Hi").style([Style::Bold, Style::Foreground(Color::Red)]);
        assert_eq!(root(p), "`Ff00`!Hi`!`f");
    }

    #[test]
    fn test_heading_without_children() {
        assert_eq!(root(Heading::new("Title")), "> Title");
    }

    #[test]
    fn test_heading_style_does_not_reset() {
        let h = Heading::new("Title").style([Style::Foreground(Color::Green)]);
        assert_eq!(root(h), "> `F0f0Title");
    }

    #[test]
    fn test_nested_headings_increase_level() {
        let h = Heading::new("A").child(Heading::new("B").child(Heading::new("C")));
        assert_eq!(root(h), "> A\n>> B\n>>> C");
    }

    #[test]
    fn test_heading_children_joined_by_newline() {
        let h = Heading::new("A")
            .child(Paragraph::new("one"))
            .child(Paragraph::new("two"));
        assert_eq!(root(h), "> A\none`f`b\ntwo`f`b");
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(root(Checkbox::new("opt", "1").checked(true)), "`< ?|opt|1|*`>");
        assert_eq!(root(Checkbox::new("opt", "1")), "`< ?|opt|1`>");
        assert_eq!(root(Checkbox::default()), "`< ?|checkbox|1`>");
    }

    #[test]
    fn test_radio() {
        assert_eq!(root(Radio::new("color", "red")), "`<^|color|red`>`f`b");
        let styled = Radio::new("color", "red")
            .checked(true)
            .style([Style::Foreground(Color::Red)]);
        assert_eq!(root(styled), "`Ff00`<^|color|red|*`>`f`f`b");
    }

    #[test]
    fn test_input_flags() {
        assert_eq!(root(Input::new("name")), "`<name`>`f`b");
        assert_eq!(
            root(Input::new("name").default_value("Anonymous").size(16)),
            "`<16|name`Anonymous>`f`b"
        );
        assert_eq!(root(Input::new("pin").masked(true)), "`<!pin`>`f`b");
        assert_eq!(
            root(Input::new("pass").size(8).masked(true)),
            "`<!8|pass`>`f`b"
        );
    }

    #[test]
    fn test_input_zero_size_is_omitted() {
        assert_eq!(root(Input::new("q").size(0)), "`<q`>`f`b");
    }

    #[test]
    fn test_input_restores_ambient() {
        let input = Node::from(Input::new("q").style([Style::Background(Color::DarkGrey)]));
        let ambient = StyleSet::from([Style::Background(Color::DarkerGrey)]);
        assert_eq!(
            render_node(&input, 0, &ambient),
            "`B555`<q`>`b`f`b`B333"
        );
    }

    #[test]
    fn test_input_same_style_as_ambient_skips_restore() {
        let style = StyleSet::from([Style::Background(Color::DarkGrey)]);
        let input = Node::from(Input::new("q").style(style.clone()));
        assert_eq!(render_node(&input, 0, &style), "`B555`<q`>`b");
    }

    #[test]
    fn test_link() {
        assert_eq!(root(Link::new("Home", "/page/index.mu")), "`[Home`/page/index.mu]`f`b");
        let styled = Link::new("Go", ":/page/x.mu").style([Style::Underline]);
        assert_eq!(root(styled), "`_`[Go`:/page/x.mu]`_`f`b");
    }

    #[test]
    fn test_line_break_is_empty() {
        assert_eq!(root(LineBreak::new()), "");
        let styled = Node::Br(LineBreak {
            style: StyleSet::from([Style::Bold]),
        });
        assert_eq!(root(styled), "");
    }

    #[test]
    fn test_rule() {
        assert_eq!(root(Rule::new()), "-");
        assert_eq!(root(Rule::new().kind('=')), "-=");
        assert_eq!(
            root(Rule::new().style([Style::Foreground(Color::Grey)])),
            "`F888-"
        );
    }

    #[test]
    fn test_container_same_style_as_ambient_has_no_restore() {
        let style = StyleSet::from([Style::Background(Color::Blue)]);
        let container = Node::from(
            Container::new()
                .style(style.clone())
                .child(Paragraph::new("x").style(style.clone())),
        );
        assert_eq!(render_node(&container, 0, &style), "`B00f\n`B00fx`b");
    }

    #[test]
    fn test_container_indents_flat_content_only() {
        let container = Container::new()
            .child(Paragraph::new("flat"))
            .child(Rule::new())
            .child(Heading::new("Sub"));
        let node = Node::from(container);
        assert_eq!(
            render_node(&node, 1, &StyleSet::EMPTY),
            "\n  flat`f`b\n-\n>> Sub"
        );
    }

    #[test]
    fn test_container_in_heading_restores_empty_ambient() {
        let tree = Heading::new("Login").child(
            Container::new()
                .style([Style::Background(Color::DarkGrey)])
                .child(LineBreak::new())
                .child(
                    Span::new()
                        .child(Paragraph::new("Username: "))
                        .child(Paragraph::new("guest")),
                ),
        );
        assert_eq!(
            root(tree),
            "> Login\n`B555\n  \n  Username: `f`bguest`f`b`f`b"
        );
    }

    #[test]
    fn test_container_alignment_is_reset_on_close() {
        let tree = Container::new()
            .style([Style::Center])
            .child(Paragraph::new("mid"));
        assert_eq!(root(tree), "`c\nmid`f`b`f`b`a");
    }

    #[test]
    fn test_span_takes_alignment_from_ambient_and_emphasis_from_itself() {
        let ambient = StyleSet::from([Style::Center, Style::Background(Color::DarkerGrey)]);
        let span = Node::from(
            Span::new()
                .style([Style::Left, Style::Bold])
                .child(Link::new("x", "/y").style([Style::Center, Style::Bold])),
        );
        // the link's own style equals the composed style, so nothing is restored
        assert_eq!(render_node(&span, 0, &ambient), "`c`!`[x`/y]`!");
    }

    #[test]
    fn test_span_concatenates_on_one_line() {
        let span = Span::new()
            .child(Paragraph::new("a"))
            .child(Checkbox::new("b", "1"))
            .child(LineBreak::new());
        assert_eq!(root(span), "a`f`b`< ?|b|1`>");
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let tree = Node::from(
            Heading::new("T")
                .style([Style::Underline])
                .child(Container::new().style([Style::Right]).child(Input::new("a"))),
        );
        let first = render_node(&tree, 0, &StyleSet::EMPTY);
        let second = render_node(&tree, 0, &StyleSet::EMPTY);
        assert_eq!(first, second);
    }
}
