use crate::span::{SpanKind, TextSpan};
use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::sync::LazyLock;

static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static RE_LINK: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<!!)\[([^\]]*)\]\(([^)]+)\)").unwrap());

pub fn tokenize(text: &str) -> Vec<TextSpan> {
    if text.is_empty() {
        return Vec::new();
    }
    let spans = vec![TextSpan::new(text, SpanKind::Plain)];
    let spans = split_delimited(spans, "**", SpanKind::Bold);
    let spans = split_delimited(spans, "_", SpanKind::Italic);
    let spans = split_delimited(spans, "`", SpanKind::Code);
    let spans = split_images(spans);
    split_links(spans)
}

// Fragments alternate plain/styled by split index; unbalanced delimiters
// are not detected, so an odd count misclassifies the trailing fragment.
pub fn split_delimited(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Vec<TextSpan> {
    let mut out: Vec<TextSpan> = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        for (i, part) in span.content.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan::new(part, kind));
        }
    }
    out
}

pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut out: Vec<TextSpan> = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let mut last = 0;
        for caps in RE_IMAGE.captures_iter(&span.content) {
            let m = caps.get(0).unwrap();
            if m.start() > last {
                out.push(TextSpan::new(&span.content[last..m.start()], SpanKind::Plain));
            }
            out.push(TextSpan::with_target(
                &caps[1],
                SpanKind::Image,
                caps[2].trim(),
            ));
            last = m.end();
        }
        if last < span.content.len() {
            out.push(TextSpan::new(&span.content[last..], SpanKind::Plain));
        }
    }
    out
}

pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut out: Vec<TextSpan> = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let mut last = 0;
        for caps in RE_LINK.captures_iter(&span.content).filter_map(|c| c.ok()) {
            let m = caps.get(0).unwrap();
            if m.start() > last {
                out.push(TextSpan::new(&span.content[last..m.start()], SpanKind::Plain));
            }
            out.push(TextSpan::with_target(
                &caps[1],
                SpanKind::Link,
                caps[2].trim(),
            ));
            last = m.end();
        }
        if last < span.content.len() {
            out.push(TextSpan::new(&span.content[last..], SpanKind::Plain));
        }
    }
    out
}
