use crate::error::Result;
use crate::{extract_title, markdown_to_html};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RE_MARKDOWN_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(md|markdown)$").unwrap());

pub fn generate_page(from: &Path, template: &Path, dest: &Path) -> Result<()> {
    let markdown = fs::read_to_string(from)?;
    let template = fs::read_to_string(template)?;

    let title = extract_title(&markdown)?;
    let content = markdown_to_html(&markdown)?;

    // Plain textual substitution, one occurrence each
    let html = template
        .replacen("{{ Title }}", &title, 1)
        .replacen("{{ Content }}", &content, 1);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, html)?;
    Ok(())
}

pub fn list_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            out.extend(list_pages(&path)?);
        } else if path.is_file() {
            if let Some(path_str) = path.to_str() {
                if RE_MARKDOWN_EXT.is_match(path_str) {
                    out.push(path);
                }
            }
        }
    }
    out.sort();
    Ok(out)
}

pub fn generate_pages(content: &Path, template: &Path, output: &Path) -> Result<usize> {
    let pages = list_pages(content)?;
    for page in &pages {
        let rel = page.strip_prefix(content).unwrap_or(page);
        let dest = output.join(rel).with_extension("html");
        generate_page(page, template, &dest)?;
    }
    Ok(pages.len())
}
