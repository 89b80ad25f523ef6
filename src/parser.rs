use serde_yaml::{Mapping, Value};

use crate::components::Node;
use crate::document::Micron;
use crate::error::{MicronError, MicronResult};
use crate::style::StyleSet;
use crate::theme::Theme;

const THEME_KEY: &str = "theme";
const BODY_KEY: &str = "body";
const STYLE_KEY: &str = "style";

// ─── Public parse functions ──────────────────────────────────────────────────

/// Parse a YAML page description into a validated [`Micron`] tree.
pub fn parse_page(yaml: &str) -> MicronResult<Micron> {
    parse_page_with_theme(yaml, Theme::default())
}

/// Parse a YAML page with a base theme. Presets declared by the page itself
/// override base presets with the same name.
pub fn parse_page_with_theme(yaml: &str, theme: Theme) -> MicronResult<Micron> {
    let document: Value = serde_yaml::from_str(yaml)?;

    let (theme, mut body) = match document {
        Value::Null => (theme, Value::Sequence(Vec::new())),
        Value::Sequence(_) => (theme, document),
        Value::Mapping(map) if is_full_page(&map) => split_full_page(map, theme)?,
        // A single root node, e.g. `Heading: {text: ...}`
        Value::Mapping(map) => (theme, Value::Sequence(vec![Value::Mapping(map)])),
        other => {
            return Err(MicronError::DeserializationError(format!(
                "page must be a list of nodes or a mapping with a 'body' section, found {}",
                describe(&other)
            )))
        }
    };

    resolve_theme_references(&mut body, &theme)?;

    let children: Vec<Node> = serde_yaml::with::singleton_map_recursive::deserialize(body)
        .map_err(|e| MicronError::DeserializationError(e.to_string()))?;

    let page = Micron::new(children);
    page.validate()?;
    log::debug!("loaded micron page with {} top-level nodes", page.children.len());
    Ok(page)
}

// ─── Page sections ───────────────────────────────────────────────────────────

fn is_full_page(map: &Mapping) -> bool {
    map.contains_key(BODY_KEY) || map.contains_key(THEME_KEY)
}

fn split_full_page(mut map: Mapping, base: Theme) -> MicronResult<(Theme, Value)> {
    let page_theme = match map.remove(THEME_KEY) {
        Some(value) => serde_yaml::from_value::<Theme>(value)
            .map_err(|e| MicronError::DeserializationError(format!("theme: {}", e)))?,
        None => Theme::default(),
    };

    let body = map.remove(BODY_KEY).ok_or(MicronError::MissingBody)?;

    if let Some((key, _)) = map.iter().next() {
        return Err(MicronError::DeserializationError(format!(
            "unknown page section {}",
            describe(key)
        )));
    }

    Ok((base.merged_with(page_theme), body))
}

// ─── Theme references ────────────────────────────────────────────────────────

/// Expand `$theme.<name>` entries of every `style` list in place.
fn resolve_theme_references(value: &mut Value, theme: &Theme) -> MicronResult<()> {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map.iter_mut() {
                if key.as_str() == Some(STYLE_KEY) {
                    expand_style(child, theme)?;
                } else {
                    resolve_theme_references(child, theme)?;
                }
            }
        }
        Value::Sequence(items) => {
            for item in items {
                resolve_theme_references(item, theme)?;
            }
        }
        Value::Tagged(tagged) => resolve_theme_references(&mut tagged.value, theme)?,
        _ => {}
    }
    Ok(())
}

fn expand_style(style: &mut Value, theme: &Theme) -> MicronResult<()> {
    // `style: $theme.panel` is shorthand for a one-element list
    if let Value::String(token) = style {
        if Theme::is_theme_reference(token) {
            let reference = token.clone();
            *style = Value::Sequence(vec![Value::String(reference)]);
        }
    }

    let Value::Sequence(tokens) = style else {
        return Ok(());
    };

    let mut expanded = Vec::with_capacity(tokens.len());
    for token in tokens.drain(..) {
        match token.as_str() {
            Some(reference) if Theme::is_theme_reference(reference) => {
                let preset = lookup(theme, reference)?;
                expanded.extend(preset.iter().map(|s| Value::String(s.to_string())));
            }
            _ => expanded.push(token),
        }
    }
    *tokens = expanded;
    Ok(())
}

fn lookup<'a>(theme: &'a Theme, reference: &str) -> MicronResult<&'a StyleSet> {
    if let Some(preset) = theme.resolve(reference) {
        return Ok(preset);
    }

    let name = reference.trim_start_matches("$theme.");
    if name.is_empty() || name.contains('.') {
        Err(MicronError::InvalidThemeReference {
            reference: reference.to_string(),
        })
    } else {
        Err(MicronError::ThemeVariableNotFound {
            variable: name.to_string(),
        })
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("'{}'", s),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(t) => format!("tagged value {}", t.tag),
    }
}
