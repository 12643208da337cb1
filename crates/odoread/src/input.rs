//! Input helpers shared by commands: paths, stdin lines, config.

use std::io::Read;
use std::path::PathBuf;

use odoread_core::{split_lines, ReaderConfig};
use odoread_protocol::ErrorCode;
use tracing::debug;

use crate::output::Output;

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Use the given lines, or read them from stdin when there are none.
pub fn lines_or_stdin(lines: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !lines.is_empty() {
        return Ok(lines);
    }
    let mut text = String::new();
    std::io::stdin().lock().read_to_string(&mut text)?;
    Ok(text_lines(&text))
}

/// Split piped text into lines, ignoring the final line terminator.
fn text_lines(text: &str) -> Vec<String> {
    let text = text
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    split_lines(text)
}

/// Apply a `--scale` override, exiting with an invalid-request error when
/// the result does not validate.
pub fn with_scale(config: ReaderConfig, scale: Option<f64>, output: &Output) -> ReaderConfig {
    match config.with_scale_override(scale) {
        Ok(config) => config,
        Err(e) => {
            output.print_error(ErrorCode::InvalidRequest, &e.to_string());
            std::process::exit(1);
        }
    }
}

/// Load the reader config file, or defaults when none is given.
pub fn load_config(path: Option<&str>, output: &Output) -> anyhow::Result<ReaderConfig> {
    let Some(path) = path else {
        return Ok(ReaderConfig::default());
    };

    let path = expand_path(path);
    debug!("Loading config from {:?}", path);
    match ReaderConfig::from_file(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            output.print_error(ErrorCode::InvalidConfig, &format!("{}: {}", path.display(), e));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_path() {
        assert_eq!(expand_path("/tmp/frame.jpg"), PathBuf::from("/tmp/frame.jpg"));
    }

    #[test]
    fn test_given_lines_skip_stdin() {
        let lines = lines_or_stdin(vec!["O15OO".to_string()]).unwrap();
        assert_eq!(lines, vec!["O15OO".to_string()]);
    }

    #[test]
    fn test_text_lines_drops_final_terminator() {
        assert_eq!(text_lines("ODO\r\n15008\r\n"), vec!["ODO".to_string(), "15008".to_string()]);
        assert_eq!(text_lines("ODO\n\n15008"), vec!["ODO".to_string(), String::new(), "15008".to_string()]);
        assert!(text_lines("").is_empty());
        assert!(text_lines("\n").is_empty());
    }
}
