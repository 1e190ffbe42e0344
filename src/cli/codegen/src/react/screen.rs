/* src/cli/codegen/src/react/screen.rs */

use flutterexpo_server::{
  AstDocument, FALLBACK_TAG, MappingRegistry, NodeVisitor, PropMap, Visit, WidgetKind, walk,
};
use serde_json::Value;

use super::literal::{attr_escape, js_literal};
use crate::naming::{capitalize, css_class, to_camel_case};

/// Render the editable screen component for a document.
pub fn render_screen(
  document: &AstDocument,
  registry: &MappingRegistry,
  component: &str,
  live_url: &str,
) -> String {
  let body = walk(registry, &document.tree, &mut JsxRenderer);
  let root_class = css_class(component);
  let screen_id = &document.screen_id;

  let mut out = String::new();
  out.push_str("import React, { useState, useEffect } from 'react';\n");
  out.push_str(&format!("import '../styles/{component}.css';\n\n"));
  out.push_str(&format!("export const {component}: React.FC = () => {{\n"));

  out.push_str("  // State management (auto-generated from Flutter state)\n");
  for (key, value) in &document.state {
    out.push_str(&format!(
      "  const [{key}, set{}] = useState({});\n",
      capitalize(key),
      js_literal(value)
    ));
  }
  out.push('\n');

  out.push_str("  // Event handlers (auto-generated from Flutter events)\n");
  for binding in &document.events {
    out.push_str(&format!(
      "  // {}.{} -> {}\n",
      binding.component_id, binding.event, binding.action
    ));
  }
  out.push_str("  const handleButtonClick = (event: React.MouseEvent) => {\n");
  out.push_str("    console.log('Button clicked:', event.currentTarget.id);\n");
  out.push_str("  };\n\n");
  out.push_str("  const handleTextChange = (event: React.ChangeEvent<HTMLInputElement>) => {\n");
  out.push_str("    console.log('Text changed:', event.target.value);\n");
  out.push_str("  };\n\n");

  out.push_str("  // Live updates for this screen\n");
  out.push_str("  useEffect(() => {\n");
  out.push_str(&format!("    const ws = new WebSocket('{live_url}');\n\n"));
  out.push_str("    ws.onmessage = (event) => {\n");
  out.push_str("      const message = JSON.parse(event.data);\n");
  out.push_str(&format!(
    "      if (message.type === 'STATE_UPDATE' && message.screenId === '{screen_id}') {{\n"
  ));
  for key in document.state.keys() {
    out.push_str(&format!(
      "        if (message.state.{key} !== undefined) set{}(message.state.{key});\n",
      capitalize(key)
    ));
  }
  out.push_str("      }\n");
  out.push_str("    };\n\n");
  out.push_str("    return () => ws.close();\n");
  out.push_str("  }, []);\n\n");

  out.push_str("  return (\n");
  out.push_str(&format!("    <div className=\"{root_class}\">\n"));
  out.push_str(&indent(&body, 3));
  out.push('\n');
  out.push_str("    </div>\n");
  out.push_str("  );\n");
  out.push_str("};\n\n");
  out.push_str(&format!("export default {component};\n"));
  out
}

/// Renders each node as a JSX fragment, children nested two spaces deeper.
struct JsxRenderer;

impl NodeVisitor for JsxRenderer {
  type Output = String;

  fn visit(&mut self, visit: Visit<'_>, children: Option<Vec<String>>) -> String {
    let node = visit.node;
    let tag = visit.mapping.map_or(FALLBACK_TAG, |m| m.tag.as_str());

    let mut open = format!("<{tag}");
    for attr in attributes(&visit) {
      open.push(' ');
      open.push_str(&attr);
    }
    if let Some(style) = node.style.as_ref().and_then(inline_style) {
      open.push_str(&format!(" style={{{style}}}"));
    }
    open.push_str(&format!(" className=\"{}\"", css_class(&node.kind)));

    match children.filter(|c| !c.is_empty()) {
      Some(children) => {
        let mut out = format!("{open}>\n");
        for child in &children {
          out.push_str(&indent(child, 1));
          out.push('\n');
        }
        out.push_str(&format!("</{tag}>"));
        out
      }
      None => match node.text.as_deref().filter(|t| !t.is_empty()) {
        Some(text) => {
          let quoted = serde_json::to_string(text).unwrap_or_default();
          format!("{open}>\n  {{{quoted}}}\n</{tag}>")
        }
        None => format!("{open} />"),
      },
    }
  }
}

fn attributes(visit: &Visit<'_>) -> Vec<String> {
  let node = visit.node;
  let props = &node.props;
  let mut attrs = Vec::new();

  if let Some(id) = &node.id {
    attrs.push(format!("id=\"{}\"", attr_escape(id)));
  }

  match visit.kind() {
    WidgetKind::Button => {
      if let Some(disabled) = disabled_expr(props) {
        attrs.push(format!("disabled={{{disabled}}}"));
      }
      attrs.push("onClick={handleButtonClick}".to_string());
    }
    WidgetKind::TextInput => {
      attrs.push("onChange={handleTextChange}".to_string());
      let placeholder = str_prop(props, "placeholder").or_else(|| str_prop(props, "hintText"));
      if let Some(placeholder) = placeholder {
        attrs.push(format!("placeholder=\"{}\"", attr_escape(placeholder)));
      }
    }
    WidgetKind::Image => {
      for key in ["src", "alt"] {
        if let Some(value) = str_prop(props, key) {
          attrs.push(format!("{key}=\"{}\"", attr_escape(value)));
        }
      }
    }
    WidgetKind::Text | WidgetKind::Other => {}
  }

  attrs
}

/// Explicit `disabled` wins; otherwise the negation of `enabled`.
fn disabled_expr(props: &PropMap) -> Option<String> {
  if let Some(value) = props.get("disabled") {
    return Some(js_literal(value));
  }
  props.get("enabled").and_then(Value::as_bool).map(|enabled| (!enabled).to_string())
}

fn str_prop<'a>(props: &'a PropMap, key: &str) -> Option<&'a str> {
  props.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// `{fontSize: 16, color: 'red'}` with camel-cased keys; `None` when empty.
fn inline_style(style: &PropMap) -> Option<String> {
  if style.is_empty() {
    return None;
  }
  let entries: Vec<String> =
    style.iter().map(|(k, v)| format!("{}: {}", to_camel_case(k), js_literal(v))).collect();
  Some(format!("{{{}}}", entries.join(", ")))
}

fn indent(block: &str, depth: usize) -> String {
  let pad = "  ".repeat(depth);
  block.lines().map(|line| format!("{pad}{line}")).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
  use flutterexpo_server::AstNode;
  use serde_json::json;

  use super::*;

  fn jsx(node: &AstNode) -> String {
    walk(&MappingRegistry::builtin(), node, &mut JsxRenderer)
  }

  #[test]
  fn leaf_is_self_closing() {
    assert_eq!(jsx(&AstNode::new("Icon")), r#"<i className="flutter-icon" />"#);
  }

  #[test]
  fn text_renders_as_content() {
    let node = AstNode::new("Text").with_text("Hello \"you\"");
    assert_eq!(
      jsx(&node),
      "<span className=\"flutter-text\">\n  {\"Hello \\\"you\\\"\"}\n</span>"
    );
  }

  #[test]
  fn empty_text_renders_self_closing() {
    let node = AstNode::new("Text").with_text("");
    assert_eq!(jsx(&node), r#"<span className="flutter-text" />"#);
  }

  #[test]
  fn children_nest_in_order() {
    let node = AstNode::new("Column")
      .with_child(AstNode::new("Text").with_text("a"))
      .with_child(AstNode::new("Row").with_child(AstNode::new("Icon")));
    let expected = [
      r#"<div className="flutter-column">"#,
      r#"  <span className="flutter-text">"#,
      r#"    {"a"}"#,
      r#"  </span>"#,
      r#"  <div className="flutter-row">"#,
      r#"    <i className="flutter-icon" />"#,
      r#"  </div>"#,
      r#"</div>"#,
    ]
    .join("\n");
    assert_eq!(jsx(&node), expected);
  }

  #[test]
  fn unmapped_type_uses_fallback_tag() {
    assert_eq!(jsx(&AstNode::new("CustomPaint")), r#"<div className="flutter-custom-paint" />"#);
  }

  #[test]
  fn inline_style_is_camel_cased() {
    let node = AstNode::new("Container")
      .with_style("background-color", json!("#fff"))
      .with_style("padding", json!(8));
    assert_eq!(
      jsx(&node),
      r#"<div style={{backgroundColor: '#fff', padding: 8}} className="flutter-container" />"#
    );
  }

  #[test]
  fn button_attributes() {
    let mut node = AstNode::new("ElevatedButton").with_prop("enabled", json!(false));
    node.id = Some("submit".into());
    assert_eq!(
      jsx(&node),
      r#"<button id="submit" disabled={true} onClick={handleButtonClick} className="flutter-elevated-button" />"#
    );

    let node = AstNode::new("Button").with_prop("disabled", json!(false));
    assert!(jsx(&node).contains("disabled={false} onClick={handleButtonClick}"));
  }

  #[test]
  fn text_field_attributes() {
    let node = AstNode::new("TextField").with_prop("hintText", json!("Email"));
    assert_eq!(
      jsx(&node),
      r#"<input onChange={handleTextChange} placeholder="Email" className="flutter-text-field" />"#
    );
  }

  #[test]
  fn image_attributes() {
    let node = AstNode::new("Image").with_prop("src", json!("logo.png")).with_prop("alt", json!(""));
    assert_eq!(jsx(&node), r#"<img src="logo.png" className="flutter-image" />"#);
  }
}
