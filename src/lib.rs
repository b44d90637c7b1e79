pub mod assets;
pub mod blocks;
pub mod compile;
pub mod config;
pub mod error;
pub mod inline;
pub mod node;
pub mod normalize;
pub mod page;
pub mod span;

pub use error::{Error, Result};
pub use node::HtmlNode;

use blocks::BlockType;

pub fn convert(document: &str) -> HtmlNode {
    let children = blocks::split_blocks(document)
        .iter()
        .map(|block| compile::block_to_node(block, blocks::classify(block)))
        .collect();
    HtmlNode::parent("div", children)
}

pub fn markdown_to_html(document: &str) -> Result<String> {
    convert(document).render()
}

pub fn extract_title(document: &str) -> Result<String> {
    for block in blocks::split_blocks(document) {
        if let BlockType::Heading(_) = blocks::classify(&block) {
            if let Some(rest) = block.strip_prefix("# ") {
                return Ok(rest.trim().to_string());
            }
        }
    }
    Err(Error::TitleNotFound)
}
