#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl TextSpan {
    pub fn new(content: &str, kind: SpanKind) -> Self {
        TextSpan {
            content: content.to_string(),
            kind,
            target: None,
        }
    }

    pub fn with_target(content: &str, kind: SpanKind, target: &str) -> Self {
        TextSpan {
            content: content.to_string(),
            kind,
            target: Some(target.to_string()),
        }
    }
}
