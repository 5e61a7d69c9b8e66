use anyhow::Result;
use std::path::{Path, PathBuf};

fn rust_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            rust_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(())
}

fn is_cjk(c: char) -> bool {
    matches!(c, '\u{3000}'..='\u{303f}' | '\u{4e00}'..='\u{9fff}' | '\u{ff00}'..='\u{ffef}')
}

/// Comments are written in English throughout the crate.
#[test]
fn test_comments_are_english() -> Result<()> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    rust_files(&root.join("src"), &mut files)?;
    rust_files(&root.join("tests"), &mut files)?;

    let mut offending = Vec::new();
    for file in &files {
        let content = std::fs::read_to_string(file)?;
        for (idx, line) in content.lines().enumerate() {
            if let Some(pos) = line.find("//") {
                if line[pos..].chars().any(is_cjk) {
                    offending.push(format!("{}:{}", file.display(), idx + 1));
                }
            }
        }
    }

    assert!(offending.is_empty(), "non-English comments at {:?}", offending);
    Ok(())
}
