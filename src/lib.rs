//! # LXMKit Micron compositor
//!
//! Builds pages in Micron, the backtick-escaped markup rendered by NomadNet
//! style browsers on Reticulum, from a declarative tree of styled nodes.
//!
//! ## Features
//! - Closed node set (`Heading`, `Container`, `Paragraph`, `Span`, form fields, links, rules)
//! - Style inheritance with automatic restoration of the ambient style
//! - Deterministic, side-effect free rendering
//! - YAML page descriptions with reusable theme presets
//! - Construction-time validation of field names and token delimiters
//!
//! ## Example: building a tree
//! ```
//! use lxmkit_micron::{Color, Container, Heading, Input, Micron, Paragraph, Span, Style};
//!
//! let page = Micron::default().child(
//!     Heading::new("Login").child(
//!         Container::new()
//!             .style([Style::Background(Color::DarkerGrey), Style::Center])
//!             .child(
//!                 Span::new()
//!                     .child(Paragraph::new("Username: "))
//!                     .child(Input::new("name").size(16)),
//!             ),
//!     ),
//! );
//!
//! let bytes = page.build();
//! assert!(bytes.ends_with(b"# Made using LXMKit"));
//! ```
//!
//! ## Example: YAML page
//! ```
//! use lxmkit_micron::parse_page;
//!
//! let yaml = r#"
//! theme:
//!   styles:
//!     title: [bold, fg-orange]
//! body:
//!   - Heading:
//!       text: "News"
//!       style: [$theme.title]
//! "#;
//!
//! let page = parse_page(yaml).expect("valid page");
//! assert_eq!(page.render(), "> `Ffa5`!News`!");
//! ```

pub mod components;
pub mod document;
pub mod error;
pub mod parser;
pub mod render;
pub mod style;
pub mod theme;
pub mod validator;

// --- Core types ---
pub use components::{
    Checkbox, Container, Heading, Input, LineBreak, Link, Node, Paragraph, Radio, Rule, Span,
};
pub use document::{Micron, PROVENANCE};
pub use error::{MicronError, MicronResult};
pub use style::{apply_style, Color, Style, StyleSet};
pub use theme::Theme;

/// Parse a YAML page into a validated tree
pub fn parse_page(yaml: &str) -> MicronResult<Micron> {
    parser::parse_page(yaml)
}

/// Parse a YAML page with base theme presets
pub fn parse_page_with_theme(yaml: &str, theme: Theme) -> MicronResult<Micron> {
    parser::parse_page_with_theme(yaml, theme)
}
