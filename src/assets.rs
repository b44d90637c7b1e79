use crate::error::Result;
use std::fs;
use std::path::Path;

pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    copy_tree(src, dest)
}

fn copy_tree(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copied += copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copies_nested_tree() {
        let td = TempDir::new().unwrap();
        let src = td.path().join("static");
        let dest = td.path().join("public");

        write(&src.join("style.css"), "body {}");
        write(&src.join("img").join("logo.png"), "png bytes");

        let copied = copy_static(&src, &dest).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dest.join("style.css")).unwrap(), "body {}");
        assert!(dest.join("img").join("logo.png").is_file());
    }

    #[test]
    fn test_clears_stale_destination() {
        let td = TempDir::new().unwrap();
        let src = td.path().join("static");
        let dest = td.path().join("public");

        write(&src.join("keep.css"), "x");
        write(&dest.join("stale.html"), "old");

        copy_static(&src, &dest).unwrap();
        assert!(dest.join("keep.css").is_file());
        assert!(!dest.join("stale.html").exists());
    }

    #[test]
    fn test_empty_source() {
        let td = TempDir::new().unwrap();
        let src = td.path().join("static");
        let dest = td.path().join("public");
        fs::create_dir_all(&src).unwrap();

        let copied = copy_static(&src, &dest).unwrap();
        assert_eq!(copied, 0);
        assert!(dest.is_dir());
    }
}
