/* src/server/core/rust/src/translate.rs */

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::ast::{AstDocument, AstNode, PropMap};
use crate::mapping::{FALLBACK_TAG, MappingRegistry, WidgetKind};
use crate::visit::{NodeVisitor, Visit, walk};

/// Prop key that carries a text widget's content.
pub const CONTENT_PROP: &str = "children";

/// Renderable element tree sent to live viewers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
  #[serde(rename = "type")]
  pub tag: String,
  pub props: PropMap,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub style: Option<PropMap>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub children: Option<Vec<ComponentSpec>>,
}

/// Result of a translation plus the source types that had no mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
  pub root: ComponentSpec,
  pub unmapped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Translator {
  registry: Arc<MappingRegistry>,
}

impl Translator {
  pub fn new(registry: Arc<MappingRegistry>) -> Self {
    Self { registry }
  }

  pub fn registry(&self) -> &MappingRegistry {
    &self.registry
  }

  pub fn translate(&self, document: &AstDocument) -> ComponentSpec {
    self.translate_node(&document.tree).root
  }

  /// Translate a subtree. Never fails: unmapped types fall back to a
  /// generic container and are listed in [`Translation::unmapped`].
  pub fn translate_node(&self, node: &AstNode) -> Translation {
    let mut builder = SpecBuilder { unmapped: Vec::new() };
    let root = walk(&self.registry, node, &mut builder);
    Translation { root, unmapped: builder.unmapped }
  }
}

impl Default for Translator {
  fn default() -> Self {
    Self::new(Arc::new(MappingRegistry::builtin()))
  }
}

struct SpecBuilder {
  unmapped: Vec<String>,
}

impl NodeVisitor for SpecBuilder {
  type Output = ComponentSpec;

  fn visit(&mut self, visit: Visit<'_>, children: Option<Vec<ComponentSpec>>) -> ComponentSpec {
    let node = visit.node;
    let Some(mapping) = visit.mapping else {
      warn!(source_type = %node.kind, "no mapping found for widget type");
      self.unmapped.push(node.kind.clone());
      let mut props = PropMap::new();
      props.insert(
        "className".to_string(),
        Value::String(format!("unknown-{}", node.kind.to_lowercase())),
      );
      return ComponentSpec { tag: FALLBACK_TAG.to_string(), props, style: None, children };
    };

    let mut props =
      rename_into(mapping.default_props.clone(), &node.props, mapping.prop_renames.as_ref());
    let style = node.style.as_ref().map(|style| match mapping.style_renames.as_ref() {
      Some(table) => rename_into(PropMap::new(), style, Some(table)),
      None => style.clone(),
    });

    match mapping.kind {
      WidgetKind::Text => {
        if let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) {
          props.insert(CONTENT_PROP.to_string(), Value::String(text.to_string()));
        }
      }
      WidgetKind::Button => {
        if let Some(Value::Bool(enabled)) = node.props.get("enabled") {
          props.insert("disabled".to_string(), Value::Bool(!enabled));
        }
      }
      _ => {}
    }

    ComponentSpec { tag: mapping.tag.clone(), props, style, children }
  }
}

/// Apply a rename table on top of `base`, then copy every other source key
/// verbatim. A renamed value wins over a verbatim copy of the same key.
fn rename_into(
  mut base: PropMap,
  source: &PropMap,
  renames: Option<&IndexMap<String, String>>,
) -> PropMap {
  let mut renamed = HashSet::new();
  if let Some(table) = renames {
    for (from, to) in table {
      if let Some(value) = source.get(from) {
        base.insert(to.clone(), value.clone());
        renamed.insert(to.as_str());
      }
    }
  }
  for (key, value) in source {
    let is_rename_source = renames.is_some_and(|t| t.contains_key(key));
    if !is_rename_source && !renamed.contains(key.as_str()) {
      base.insert(key.clone(), value.clone());
    }
  }
  base
}

#[cfg(test)]
mod tests;
