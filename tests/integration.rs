use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str =
    "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_full_site_build() {
    let td = TempDir::new().unwrap();
    let content = td.path().join("content");
    let static_dir = td.path().join("static");
    let output = td.path().join("public");
    let template = td.path().join("template.html");

    write(
        &content.join("index.md"),
        "# Welcome\n\nThis is **home**.\n\n- [blog](/blog/post.html)\n- [about](/about.html)",
    );
    write(
        &content.join("blog").join("post.md"),
        "# First Post\n\nSome _thoughts_ and `code`.\n\n```\nfn main() {}\n```",
    );
    write(&template, TEMPLATE);
    write(&static_dir.join("css").join("style.css"), "body { margin: 0; }");

    let assets = mdsite::assets::copy_static(&static_dir, &output).unwrap();
    let pages = mdsite::page::generate_pages(&content, &template, &output).unwrap();
    assert_eq!(assets, 1);
    assert_eq!(pages, 2);

    let index = fs::read_to_string(output.join("index.html")).unwrap();
    assert!(index.contains("<title>Welcome</title>"));
    assert!(index.contains("This is <b>home</b>."));
    assert!(index.contains("<ul><li><a href=\"/blog/post.html\">blog</a></li>"));

    let post = fs::read_to_string(output.join("blog").join("post.html")).unwrap();
    assert!(post.contains("<title>First Post</title>"));
    assert!(post.contains("Some <i>thoughts</i> and <code>code</code>."));
    assert!(post.contains("<pre><code>fn main() {}</code></pre>"));

    assert!(output.join("css").join("style.css").is_file());
}

#[test]
fn test_rebuild_replaces_stale_output() {
    let td = TempDir::new().unwrap();
    let content = td.path().join("content");
    let static_dir = td.path().join("static");
    let output = td.path().join("public");
    let template = td.path().join("template.html");

    write(&content.join("index.md"), "# Home\n\nhello");
    write(&static_dir.join("logo.png"), "png");
    write(&template, TEMPLATE);
    write(&output.join("removed.html"), "stale page");

    mdsite::assets::copy_static(&static_dir, &output).unwrap();
    mdsite::page::generate_pages(&content, &template, &output).unwrap();

    assert!(!output.join("removed.html").exists());
    assert!(output.join("index.html").is_file());
    assert!(output.join("logo.png").is_file());
}

#[test]
fn test_document_conversion_end_to_end() {
    let doc = "\
# Tools

A quick survey of **useful** tools.

## Editors

1. vim
2. emacs

> the best editor is the one you know

```
$ cargo build
```

![screenshot](shot.png)";

    let html = mdsite::markdown_to_html(doc).unwrap();
    assert_eq!(
        html,
        "<div>\
         <h1>Tools</h1>\
         <p>A quick survey of <b>useful</b> tools.</p>\
         <h2>Editors</h2>\
         <ol><li>vim</li><li>emacs</li></ol>\
         <blockquote>the best editor is the one you know</blockquote>\
         <pre><code>$ cargo build</code></pre>\
         <p><img src=\"shot.png\" alt=\"screenshot\" /></p>\
         </div>"
    );
    assert_eq!(mdsite::extract_title(doc).unwrap(), "Tools");
}
