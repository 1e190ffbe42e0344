/* src/server/core/rust/src/translate/tests.rs */

use serde_json::json;

use super::*;

fn translate(node: AstNode) -> Translation {
  Translator::default().translate_node(&node)
}

#[test]
fn text_end_to_end() {
  let doc: AstDocument = serde_json::from_value(json!({
    "screenId": "home_screen",
    "route": "/home",
    "tree": { "type": "Text", "props": {}, "text": "Hi" }
  }))
  .unwrap();
  let spec = Translator::default().translate(&doc);
  assert_eq!(
    serde_json::to_value(&spec).unwrap(),
    json!({ "type": "span", "props": { "className": "flutter-text", "children": "Hi" } })
  );
}

#[test]
fn unmapped_type_becomes_generic_container() {
  let out = translate(AstNode::new("CustomPaint"));
  assert_eq!(out.root.tag, "div");
  assert_eq!(out.root.props.get("className"), Some(&json!("unknown-custompaint")));
  assert_eq!(out.root.props.len(), 1);
  assert!(out.root.style.is_none());
  assert_eq!(out.unmapped, ["CustomPaint"]);
}

#[test]
fn unmapped_type_still_recurses() {
  let tree = AstNode::new("SliverList")
    .with_prop("itemCount", json!(2))
    .with_style("color", json!("red"))
    .with_child(AstNode::new("Text").with_text("one"))
    .with_child(AstNode::new("Hero").with_child(AstNode::new("Icon")));
  let out = translate(tree);

  let children = out.root.children.as_ref().unwrap();
  assert_eq!(children.len(), 2);
  assert_eq!(children[0].tag, "span");
  assert_eq!(children[0].props.get("children"), Some(&json!("one")));
  assert_eq!(children[1].props.get("className"), Some(&json!("unknown-hero")));
  let grand = children[1].children.as_ref().unwrap();
  assert_eq!(grand[0].tag, "i");
  assert_eq!(out.unmapped, ["SliverList", "Hero"]);
}

#[test]
fn button_disabled_is_negated_enabled() {
  for enabled in [true, false] {
    let out = translate(AstNode::new("Button").with_prop("enabled", json!(enabled)));
    assert_eq!(out.root.props.get("disabled"), Some(&json!(!enabled)));
    assert!(out.root.props.get("enabled").is_none());
  }
}

#[test]
fn button_enabled_overrides_explicit_disabled() {
  let node = AstNode::new("ElevatedButton")
    .with_prop("disabled", json!(true))
    .with_prop("enabled", json!(true));
  let out = translate(node);
  assert_eq!(out.root.props.get("disabled"), Some(&json!(false)));
}

#[test]
fn button_without_enabled_keeps_defaults() {
  let out = translate(AstNode::new("Button").with_prop("label", json!("Go")));
  assert_eq!(
    serde_json::to_value(&out.root.props).unwrap(),
    json!({ "type": "button", "className": "flutter-button", "label": "Go" })
  );
}

#[test]
fn text_literal_wins_over_data_prop() {
  let node = AstNode::new("Text")
    .with_prop("data", json!("from data"))
    .with_prop("children", json!("from children"))
    .with_text("literal");
  let out = translate(node);
  assert_eq!(out.root.props.get("children"), Some(&json!("literal")));
  assert!(out.root.props.get("data").is_none());
}

#[test]
fn text_data_prop_renamed_without_literal() {
  let out = translate(AstNode::new("Text").with_prop("data", json!("hello")));
  assert_eq!(out.root.props.get("children"), Some(&json!("hello")));
}

#[test]
fn empty_text_literal_is_skipped() {
  let out = translate(AstNode::new("Text").with_prop("data", json!("kept")).with_text(""));
  assert_eq!(out.root.props.get("children"), Some(&json!("kept")));

  let out = translate(AstNode::new("Text").with_text(""));
  assert!(out.root.props.get("children").is_none());
}

#[test]
fn rename_wins_over_verbatim_copy_of_target() {
  let node = AstNode::new("Text").with_prop("children", json!("raw")).with_prop("data", json!("x"));
  let out = translate(node);
  assert_eq!(out.root.props.get("children"), Some(&json!("x")));
}

#[test]
fn source_props_override_defaults() {
  let out = translate(AstNode::new("Row").with_prop("className", json!("custom")));
  assert_eq!(out.root.props.get("className"), Some(&json!("custom")));
}

#[test]
fn unknown_style_keys_pass_through() {
  let node = AstNode::new("Container")
    .with_style("padding", json!(8))
    .with_style("boxShadow", json!("0 1px 2px #000"))
    .with_style("opacity", json!(0.5));
  let out = translate(node);
  let style = out.root.style.unwrap();
  assert_eq!(style.get("padding"), Some(&json!(8)));
  assert_eq!(style.get("boxShadow"), Some(&json!("0 1px 2px #000")));
  assert_eq!(style.get("opacity"), Some(&json!(0.5)));
}

#[test]
fn style_without_rename_table_is_unchanged() {
  let mut registry = MappingRegistry::new();
  registry.register(crate::mapping::MappingEntry::new("Card", "section")).unwrap();
  let translator = Translator::new(Arc::new(registry));
  let node = AstNode::new("Card").with_style("elevation", json!(4));
  let out = translator.translate_node(&node);
  assert_eq!(out.root.style, node.style);
}

#[test]
fn absent_style_stays_absent() {
  let out = translate(AstNode::new("Column"));
  assert!(out.root.style.is_none());
  assert!(out.root.children.is_none());
  let json = serde_json::to_value(&out.root).unwrap();
  assert!(json.get("style").is_none());
  assert!(json.get("children").is_none());
}

#[test]
fn tree_shape_is_preserved() {
  let tree = AstNode::new("Scaffold")
    .with_child(AstNode::new("AppBar").with_child(AstNode::new("Text").with_text("Title")))
    .with_child(
      AstNode::new("Column")
        .with_child(AstNode::new("Text").with_text("a"))
        .with_child(AstNode::new("Text").with_text("b"))
        .with_child(AstNode::new("Button")),
    )
    .with_child(AstNode::new("FloatingActionButton"));
  let out = translate(tree);
  assert!(out.unmapped.is_empty());

  let root = out.root;
  assert_eq!(root.tag, "div");
  let kids = root.children.unwrap();
  let tags: Vec<_> = kids.iter().map(|k| k.tag.as_str()).collect();
  assert_eq!(tags, ["header", "div", "button"]);
  let column = kids[1].children.as_ref().unwrap();
  let texts: Vec<_> = column.iter().filter_map(|c| c.props.get("children")).collect();
  assert_eq!(texts, [&json!("a"), &json!("b")]);
  assert_eq!(column[2].tag, "button");
}

#[test]
fn empty_child_list_is_kept_empty() {
  let mut node = AstNode::new("Row");
  node.children = Some(Vec::new());
  let out = translate(node);
  assert_eq!(out.root.children, Some(Vec::new()));
}
