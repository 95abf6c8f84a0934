use std::collections::BTreeMap;

use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    Document,
    blocks::BlockKind,
    inline::InlineNode,
    rope::{slice::preview, span::Span},
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    pub inline: Vec<InlineSnap>,
}

#[derive(Debug, Serialize)]
pub struct InlineSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parts: BTreeMap<String, (usize, usize)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<InlineSnap>,
}

fn pair(sp: Span) -> (usize, usize) {
    (sp.start, sp.end)
}

fn inline_snap(rope: &Rope, n: &InlineNode) -> InlineSnap {
    let mut parts = BTreeMap::new();
    match n {
        InlineNode::Text(_) => {}
        InlineNode::CodeSpan { inner, .. } => {
            parts.insert("inner".into(), pair(*inner));
        }
        InlineNode::WikiLink { target, alias, .. } => {
            parts.insert("target".into(), pair(*target));
            if let Some(a) = alias {
                parts.insert("alias".into(), pair(*a));
            }
        }
        InlineNode::Delimited(_) => {}
    }

    InlineSnap {
        kind: n.kind().name().to_string(),
        span: pair(n.span()),
        text: preview(rope, n.span(), 60),
        parts,
        attributes: n
            .attributes()
            .map(|attrs| {
                attrs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default(),
        children: n.children().iter().map(|c| inline_snap(rope, c)).collect(),
    }
}

pub fn normalize(rope: &Rope, doc: &Document) -> Snap {
    let blocks = doc
        .blocks
        .iter()
        .map(|b| {
            let kind = match &b.node.kind {
                BlockKind::Paragraph => "Paragraph".to_string(),
                BlockKind::FencedCode { kind, .. } => format!("FencedCode({kind:?})"),
            };

            BlockSnap {
                kind,
                span: pair(b.node.span),
                text: preview(rope, b.node.span, 80),
                inline: b.inlines.iter().map(|n| inline_snap(rope, n)).collect(),
            }
        })
        .collect();

    Snap { blocks }
}
