/* src/server/core/rust/src/mapping.rs */

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::ast::PropMap;
use crate::errors::BridgeError;

/// Tag used for any source type without a registry entry.
pub const FALLBACK_TAG: &str = "div";

/// Behavioural class of a widget; special-case rules key on this, not on the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
  Text,
  Button,
  TextInput,
  Image,
  Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry {
  pub source_type: String,
  pub tag: String,
  pub kind: WidgetKind,
  pub prop_renames: Option<IndexMap<String, String>>,
  pub style_renames: Option<IndexMap<String, String>>,
  pub default_props: PropMap,
}

impl MappingEntry {
  pub fn new(source_type: impl Into<String>, tag: impl Into<String>) -> Self {
    Self {
      source_type: source_type.into(),
      tag: tag.into(),
      kind: WidgetKind::Other,
      prop_renames: None,
      style_renames: None,
      default_props: PropMap::new(),
    }
  }

  pub fn kind(mut self, kind: WidgetKind) -> Self {
    self.kind = kind;
    self
  }

  pub fn class_name(self, class: &str) -> Self {
    self.default_prop("className", Value::String(class.to_string()))
  }

  pub fn default_prop(mut self, key: &str, value: Value) -> Self {
    self.default_props.insert(key.to_string(), value);
    self
  }

  pub fn rename_prop(mut self, from: &str, to: &str) -> Self {
    self.prop_renames.get_or_insert_with(IndexMap::new).insert(from.to_string(), to.to_string());
    self
  }

  /// Identity renames: the style keys this widget understands.
  pub fn styles(mut self, keys: &[&str]) -> Self {
    let table = self.style_renames.get_or_insert_with(IndexMap::new);
    for key in keys {
      table.insert((*key).to_string(), (*key).to_string());
    }
    self
  }
}

/// Keyed lookup from source widget type to its mapping entry.
#[derive(Debug, Clone, Default)]
pub struct MappingRegistry {
  entries: HashMap<String, MappingEntry>,
}

impl MappingRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registry preloaded with every built-in widget kind.
  pub fn builtin() -> Self {
    let mut registry = Self::new();
    for entry in builtin_entries() {
      // Built-in names are distinct, so registration cannot collide.
      registry.entries.insert(entry.source_type.clone(), entry);
    }
    registry
  }

  /// Add an entry. Source types are unique across the registry.
  pub fn register(&mut self, entry: MappingEntry) -> Result<(), BridgeError> {
    if self.entries.contains_key(&entry.source_type) {
      return Err(BridgeError::duplicate_mapping(&entry.source_type));
    }
    self.entries.insert(entry.source_type.clone(), entry);
    Ok(())
  }

  pub fn resolve(&self, source_type: &str) -> Option<&MappingEntry> {
    self.entries.get(source_type)
  }

  /// Target tag for a source type, falling back to [`FALLBACK_TAG`].
  pub fn tag_for(&self, source_type: &str) -> &str {
    self.resolve(source_type).map_or(FALLBACK_TAG, |e| e.tag.as_str())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

const BUTTON_STYLES: &[&str] =
  &["backgroundColor", "color", "padding", "borderRadius", "border", "cursor"];
const FLEX_STYLES: &[&str] = &["display", "flexDirection", "justifyContent", "alignItems"];

fn button(source_type: &str, class: &str) -> MappingEntry {
  MappingEntry::new(source_type, "button")
    .kind(WidgetKind::Button)
    .rename_prop("enabled", "disabled")
    .styles(BUTTON_STYLES)
    .default_prop("type", Value::String("button".into()))
    .class_name(class)
}

fn builtin_entries() -> Vec<MappingEntry> {
  vec![
    MappingEntry::new("Scaffold", "div")
      .styles(&["display", "flexDirection", "minHeight", "backgroundColor"])
      .class_name("flutter-scaffold"),
    MappingEntry::new("AppBar", "header")
      .styles(&["backgroundColor", "color", "padding", "display", "alignItems", "minHeight"])
      .class_name("flutter-appbar"),
    MappingEntry::new("FloatingActionButton", "button")
      .kind(WidgetKind::Button)
      .rename_prop("enabled", "disabled")
      .styles(&[
        "position",
        "bottom",
        "right",
        "width",
        "height",
        "borderRadius",
        "backgroundColor",
        "border",
        "cursor",
        "display",
        "alignItems",
        "justifyContent",
      ])
      .class_name("flutter-fab"),
    MappingEntry::new("Text", "span")
      .kind(WidgetKind::Text)
      .rename_prop("data", "children")
      .styles(&["fontSize", "color", "fontWeight", "fontStyle"])
      .class_name("flutter-text"),
    button("Button", "flutter-button"),
    button("ElevatedButton", "flutter-elevated-button"),
    button("TextButton", "flutter-text-button"),
    button("OutlinedButton", "flutter-outlined-button"),
    MappingEntry::new("Container", "div")
      .styles(&["backgroundColor", "padding", "margin", "width", "height", "borderRadius"])
      .class_name("flutter-container"),
    MappingEntry::new("Row", "div").styles(FLEX_STYLES).class_name("flutter-row"),
    MappingEntry::new("Column", "div").styles(FLEX_STYLES).class_name("flutter-column"),
    MappingEntry::new("TextField", "input")
      .kind(WidgetKind::TextInput)
      .rename_prop("hintText", "placeholder")
      .styles(&["width", "padding", "fontSize", "border", "borderRadius"])
      .class_name("flutter-text-field"),
    MappingEntry::new("Image", "img")
      .kind(WidgetKind::Image)
      .styles(&["width", "height", "objectFit", "borderRadius"])
      .class_name("flutter-image"),
    MappingEntry::new("Icon", "i").styles(&["fontSize", "color"]).class_name("flutter-icon"),
  ]
}
