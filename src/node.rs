use crate::error::{Error, Result};
use indexmap::IndexMap;

pub type Attrs = IndexMap<String, String>;

const LEAF_TAGS: &[&str] = &["b", "i", "code", "a"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attrs,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attrs,
    },
}

impl HtmlNode {
    pub fn leaf(tag: Option<&str>, value: &str) -> Self {
        HtmlNode::Leaf {
            tag: tag.map(|t| t.to_string()),
            value: value.to_string(),
            attrs: Attrs::new(),
        }
    }

    pub fn leaf_with_attrs(tag: &str, value: &str, attrs: Attrs) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attrs,
        }
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Attrs::new(),
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    pub fn render(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => render_leaf(tag.as_deref(), value, attrs),
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if children.is_empty() {
                    return Err(Error::Structural(format!(
                        "parent <{}> must have children",
                        tag
                    )));
                }
                let tag = tag.to_lowercase();
                let mut out = format!("<{}{}>", tag, attrs_to_html(attrs));
                for child in children {
                    out.push_str(&child.render()?);
                }
                out.push_str(&format!("</{}>", tag));
                Ok(out)
            }
        }
    }
}

fn render_leaf(tag: Option<&str>, value: &str, attrs: &Attrs) -> Result<String> {
    let Some(tag) = tag else {
        return Ok(value.to_string());
    };
    let tag_lower = tag.to_lowercase();

    // Self-closing: attributes carry everything, value is ignored
    if tag_lower == "img" {
        return Ok(format!("<img{} />", attrs_to_html(attrs)));
    }

    if LEAF_TAGS.contains(&tag_lower.as_str()) {
        return Ok(format!(
            "<{}{}>{}</{}>",
            tag_lower,
            attrs_to_html(attrs),
            value,
            tag_lower
        ));
    }

    Err(Error::UnsupportedTag(tag.to_string()))
}

fn attrs_to_html(attrs: &Attrs) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", key, value));
    }
    out
}
