/* src/cli/codegen/src/react/stylesheet.rs */

use flutterexpo_server::{AstDocument, MappingRegistry, NodeVisitor, PropMap, Visit, walk};
use indexmap::IndexMap;

use super::literal::css_value;
use crate::naming::{css_class, to_kebab_case};

/// Render the stylesheet paired with `render_screen`'s output.
pub fn render_stylesheet(
  document: &AstDocument,
  registry: &MappingRegistry,
  component: &str,
) -> String {
  let mut collector = RuleCollector::default();
  walk(registry, &document.tree, &mut collector);

  let mut out = format!("/* Auto-generated styles for {component} */\n\n");
  out.push_str(&format!(".{} {{\n", css_class(component)));
  out.push_str("  min-height: 100vh;\n");
  out.push_str("  display: flex;\n");
  out.push_str("  flex-direction: column;\n");
  out.push_str("}\n");

  for (class, declarations) in &collector.rules {
    out.push_str(&format!("\n.{class} {{\n"));
    for (key, value) in declarations {
      out.push_str(&format!("  {}: {};\n", to_kebab_case(key), css_value(value)));
    }
    out.push_str("}\n");
  }
  out
}

/// One rule per class, in first-seen pre-order, styled or not. A repeated
/// class only contributes declarations its rule does not have yet.
#[derive(Default)]
struct RuleCollector {
  rules: IndexMap<String, PropMap>,
}

impl NodeVisitor for RuleCollector {
  type Output = ();

  fn enter(&mut self, visit: &Visit<'_>) {
    let rule = self.rules.entry(css_class(&visit.node.kind)).or_default();
    let Some(style) = visit.node.style.as_ref() else {
      return;
    };
    for (key, value) in style {
      if !rule.contains_key(key) {
        rule.insert(key.clone(), value.clone());
      }
    }
  }

  fn visit(&mut self, _visit: Visit<'_>, _children: Option<Vec<()>>) {}
}
