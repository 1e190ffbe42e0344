/* src/server/core/rust/src/ast.rs */

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Insertion-ordered name -> value table used for props, style and state.
pub type PropMap = IndexMap<String, Value>;

/// One widget in the UI tree produced by the mobile side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstNode {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub props: PropMap,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub style: Option<PropMap>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub children: Option<Vec<AstNode>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
}

impl AstNode {
  pub fn new(kind: impl Into<String>) -> Self {
    Self {
      id: None,
      kind: kind.into(),
      props: PropMap::new(),
      style: None,
      children: None,
      text_id: None,
      text: None,
    }
  }

  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
    self.props.insert(key.into(), value);
    self
  }

  pub fn with_style(mut self, key: impl Into<String>, value: Value) -> Self {
    self.style.get_or_insert_with(PropMap::new).insert(key.into(), value);
    self
  }

  pub fn with_child(mut self, child: AstNode) -> Self {
    self.children.get_or_insert_with(Vec::new).push(child);
    self
  }

  pub fn has_children(&self) -> bool {
    self.children.as_ref().is_some_and(|c| !c.is_empty())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBinding {
  pub component_id: String,
  pub event: String,
  pub action: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parameters: Option<PropMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetReference {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metadata: Option<PropMap>,
}

/// Per-screen description: the tree plus state, events and assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstDocument {
  pub screen_id: String,
  pub route: String,
  #[serde(default)]
  pub timestamp: String,
  #[serde(default)]
  pub language: String,
  pub tree: AstNode,
  #[serde(default)]
  pub state: PropMap,
  #[serde(default)]
  pub events: Vec<EventBinding>,
  #[serde(default)]
  pub assets: Vec<AssetReference>,
}

impl AstDocument {
  pub fn new(screen_id: impl Into<String>, route: impl Into<String>, tree: AstNode) -> Self {
    Self {
      screen_id: screen_id.into(),
      route: route.into(),
      timestamp: String::new(),
      language: String::new(),
      tree,
      state: PropMap::new(),
      events: Vec::new(),
      assets: Vec::new(),
    }
  }
}
