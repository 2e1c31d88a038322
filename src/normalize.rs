//! Content normalizer
//!
//! Flattens a [`ContentNode`] tree into indented, line-terminated text.
//! Nested renderables receive the surrounding formatting context one level
//! deeper before they are serialized, so their own nested output lines up
//! with the document around them.

use crate::element::{ContentNode, Renderable};
use crate::format::FormattingContext;

/// Flatten a content tree depth-first, left to right
///
/// Text is emitted verbatim without escaping.
pub fn flatten(node: &mut ContentNode, ctx: &FormattingContext) -> String {
    flatten_counted(node, ctx).0
}

/// Flatten a content tree and count the renderables that produced nothing
///
/// Nested renderables are counted as well as top-level ones.
pub fn flatten_counted(node: &mut ContentNode, ctx: &FormattingContext) -> (String, usize) {
    let mut skipped = 0;
    let out = flatten_into(node, ctx, &mut skipped);
    (out, skipped)
}

fn flatten_into(node: &mut ContentNode, ctx: &FormattingContext, skipped: &mut usize) -> String {
    match node {
        ContentNode::Text(text) => ctx.line(text),
        ContentNode::Renderable(object) => match serialize(object.as_mut(), ctx) {
            Some(text) => ctx.line(&text),
            None => {
                tracing::debug!(depth = ctx.depth, "Skipping renderable without serialized form");
                *skipped += 1;
                String::new()
            }
        },
        ContentNode::Sequence(items) => items
            .iter_mut()
            .map(|item| flatten_into(item, ctx, skipped))
            .collect(),
    }
}

/// Flatten a list of nodes as if it were a single sequence
pub fn flatten_all(nodes: &mut [ContentNode], ctx: &FormattingContext) -> String {
    nodes.iter_mut().map(|node| flatten(node, ctx)).collect()
}

/// Serialize a renderable after pushing the nested formatting context into it
///
/// Returns `None` when the object supports neither `to_html` nor `to_text`.
pub fn serialize(object: &mut dyn Renderable, ctx: &FormattingContext) -> Option<String> {
    if let Some(element) = object.markup_element_mut() {
        element.apply_formatting(&ctx.nested());
    }
    object.to_html().or_else(|| object.to_text())
}
