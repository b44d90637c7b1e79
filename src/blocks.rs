use crate::normalize::normalize;
use regex::Regex;
use std::sync::LazyLock;

static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static RE_ORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9]\. ").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Heading(usize),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

pub fn split_blocks(document: &str) -> Vec<String> {
    let text = normalize(document);
    RE_BLANK
        .split(&text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn classify(block: &str) -> BlockType {
    if block.starts_with('#') {
        let level = block.chars().take_while(|&c| c == '#').count();
        return BlockType::Heading(level);
    }
    if block.starts_with("```") && block.ends_with("```") {
        return BlockType::Code;
    }
    if block.starts_with('>') {
        return BlockType::Quote;
    }
    if block.starts_with("- ") || block.starts_with("* ") {
        return BlockType::UnorderedList;
    }
    if RE_ORDERED.is_match(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
