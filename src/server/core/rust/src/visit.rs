/* src/server/core/rust/src/visit.rs */

// One depth-first traversal shared by every output format: the live
// translator and the source renderers are all `NodeVisitor`s over `walk`.

use crate::ast::AstNode;
use crate::mapping::{MappingEntry, MappingRegistry, WidgetKind};

/// A node paired with its registry entry (`None` for unmapped types).
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
  pub node: &'a AstNode,
  pub mapping: Option<&'a MappingEntry>,
}

impl Visit<'_> {
  pub fn kind(&self) -> WidgetKind {
    self.mapping.map_or(WidgetKind::Other, |m| m.kind)
  }
}

pub trait NodeVisitor {
  type Output;

  /// Pre-order hook, called before any child is walked.
  fn enter(&mut self, _visit: &Visit<'_>) {}

  /// Post-order: `children` is `None` when the node has no child list.
  fn visit(&mut self, visit: Visit<'_>, children: Option<Vec<Self::Output>>) -> Self::Output;
}

pub fn walk<V: NodeVisitor>(
  registry: &MappingRegistry,
  node: &AstNode,
  visitor: &mut V,
) -> V::Output {
  let visit = Visit { node, mapping: registry.resolve(&node.kind) };
  visitor.enter(&visit);
  let children = node
    .children
    .as_ref()
    .map(|list| list.iter().map(|child| walk(registry, child, visitor)).collect());
  visitor.visit(visit, children)
}
