//! Parse a project `.env` file into a key-value map. Applying values to the process
//! environment happens in the crate root.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `.env` in `override_dir` if given, else in the current directory.
fn dotenv_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = override_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())?;
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Strips one pair of matching quotes. Double quotes support `\"`; single quotes are literal.
/// Unquoted values lose a trailing ` # comment`.
fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return raw[1..raw.len() - 1].replace("\\\"", "\"");
    }
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }
    match raw.find(" #") {
        Some(i) => raw[..i].trim_end().to_string(),
        None => raw.to_string(),
    }
}

/// One `KEY=VALUE` line; `None` for blanks, comments and malformed lines.
fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim())))
}

/// Minimal `.env` parser. No multiline values or variable expansion; a later line wins.
pub(crate) fn parse_dotenv(content: &str) -> HashMap<String, String> {
    content.lines().filter_map(parse_line).collect()
}

/// Loads `.env` from `override_dir` or the current directory. A missing file is an empty map.
pub fn load_env_map(override_dir: Option<&Path>) -> std::io::Result<HashMap<String, String>> {
    match dotenv_path(override_dir) {
        Some(path) => Ok(parse_dotenv(&std::fs::read_to_string(path)?)),
        None => Ok(HashMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let m = parse_dotenv("VITE_SUPABASE_URL=https://x.supabase.co\nSUPABASE_CONNECTED=1\n");
        assert_eq!(m.get("VITE_SUPABASE_URL").map(String::as_str), Some("https://x.supabase.co"));
        assert_eq!(m.get("SUPABASE_CONNECTED").map(String::as_str), Some("1"));
    }

    #[test]
    fn skip_comments_blank_and_malformed() {
        let m = parse_dotenv("\n# comment\nNOT_A_PAIR\n=orphan\nKEY=val\n  \n");
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("KEY").map(String::as_str), Some("val"));
    }

    #[test]
    fn export_prefix_is_ignored() {
        let m = parse_dotenv("export COPYBOLT_WORK_DIR=/srv/copy\n");
        assert_eq!(m.get("COPYBOLT_WORK_DIR").map(String::as_str), Some("/srv/copy"));
    }

    #[test]
    fn quoted_values() {
        let m = parse_dotenv("A=\"hello world\"\nB='single # kept'\nC=\"say \\\"hi\\\"\"\nD=\"\"\n");
        assert_eq!(m.get("A").map(String::as_str), Some("hello world"));
        assert_eq!(m.get("B").map(String::as_str), Some("single # kept"));
        assert_eq!(m.get("C").map(String::as_str), Some("say \"hi\""));
        assert_eq!(m.get("D").map(String::as_str), Some(""));
    }

    /// **Scenario**: a trailing comment on an unquoted value is dropped; `#` without a space stays.
    #[test]
    fn inline_comment_on_unquoted_value() {
        let m = parse_dotenv("KEY=abc123 # anon key\nURL=https://x.io/#frag\n");
        assert_eq!(m.get("KEY").map(String::as_str), Some("abc123"));
        assert_eq!(m.get("URL").map(String::as_str), Some("https://x.io/#frag"));
    }

    #[test]
    fn later_line_wins() {
        let m = parse_dotenv("K=1\nK=2\n");
        assert_eq!(m.get("K").map(String::as_str), Some("2"));
    }

    #[test]
    fn load_env_map_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_map(Some(dir.path())).unwrap().is_empty());
    }

    #[test]
    fn load_env_map_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "A=1\nB=2\n").unwrap();
        let m = load_env_map(Some(dir.path())).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("B").map(String::as_str), Some("2"));
    }
}
