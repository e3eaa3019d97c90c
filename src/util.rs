use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn registration_timestamp(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

pub fn truncate_excerpt(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &input[..byte_index]),
        None => input.to_string(),
    }
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec_pretty(value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;
    write_bytes(path, &data)
}

pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    write_bytes(path, contents.as_bytes())
}

fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    let mut file =
        File::create(path).with_context(|| format!("failed to create file: {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("failed to finalize file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{sha256_hex, truncate_excerpt};

    #[test]
    fn sha256_hex_matches_known_digest() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn truncate_excerpt_keeps_short_text_untouched() {
        assert_eq!(truncate_excerpt("Whoever commits theft", 200), "Whoever commits theft");
    }

    #[test]
    fn truncate_excerpt_appends_ellipsis_on_char_boundary() {
        let body = "अ".repeat(210);
        let excerpt = truncate_excerpt(&body, 200);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), 203);
    }

    #[test]
    fn truncate_excerpt_exact_length_has_no_ellipsis() {
        let body = "x".repeat(200);
        assert_eq!(truncate_excerpt(&body, 200), body);
    }
}
