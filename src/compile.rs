use crate::blocks::BlockType;
use crate::inline::tokenize;
use crate::node::{Attrs, HtmlNode};
use crate::span::{SpanKind, TextSpan};

pub fn block_to_node(block: &str, block_type: BlockType) -> HtmlNode {
    match block_type {
        BlockType::Heading(level) => compile_heading(block, level),
        BlockType::Code => compile_code(block),
        BlockType::Quote => compile_quote(block),
        BlockType::UnorderedList => compile_unordered_list(block),
        BlockType::OrderedList => compile_ordered_list(block),
        BlockType::Paragraph => compile_paragraph(block),
    }
}

pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    let target = span.target.as_deref().unwrap_or("");
    match span.kind {
        SpanKind::Plain => HtmlNode::leaf(None, &span.content),
        SpanKind::Bold => HtmlNode::leaf(Some("b"), &span.content),
        SpanKind::Italic => HtmlNode::leaf(Some("i"), &span.content),
        SpanKind::Code => HtmlNode::leaf(Some("code"), &span.content),
        SpanKind::Link => {
            let mut attrs = Attrs::new();
            attrs.insert("href".to_string(), target.to_string());
            HtmlNode::leaf_with_attrs("a", &span.content, attrs)
        }
        SpanKind::Image => {
            let mut attrs = Attrs::new();
            attrs.insert("src".to_string(), target.to_string());
            attrs.insert("alt".to_string(), span.content.clone());
            HtmlNode::leaf_with_attrs("img", "", attrs)
        }
    }
}

fn inline_children(text: &str) -> Vec<HtmlNode> {
    tokenize(text).iter().map(span_to_node).collect()
}

// Level is the raw marker count; not clamped to h6.
fn compile_heading(block: &str, level: usize) -> HtmlNode {
    let text = block[level..].trim_start();
    HtmlNode::parent(&format!("h{}", level), inline_children(text))
}

fn compile_code(block: &str) -> HtmlNode {
    let content = if block.len() >= 6 {
        block[3..block.len() - 3].trim()
    } else {
        ""
    };
    let span = TextSpan::new(content, SpanKind::Code);
    HtmlNode::parent("pre", vec![span_to_node(&span)])
}

fn compile_quote(block: &str) -> HtmlNode {
    let text = block
        .split('\n')
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    HtmlNode::parent("blockquote", inline_children(&text))
}

fn compile_unordered_list(block: &str) -> HtmlNode {
    let items = block
        .split('\n')
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
        })
        .map(|item| HtmlNode::parent("li", inline_children(item)))
        .collect();
    HtmlNode::parent("ul", items)
}

fn compile_ordered_list(block: &str) -> HtmlNode {
    let items = block
        .split('\n')
        .filter_map(|line| {
            let line = line.trim();
            line.find(". ").map(|idx| &line[idx + 2..])
        })
        .map(|item| HtmlNode::parent("li", inline_children(item)))
        .collect();
    HtmlNode::parent("ol", items)
}

fn compile_paragraph(block: &str) -> HtmlNode {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    HtmlNode::parent("p", inline_children(&text))
}
