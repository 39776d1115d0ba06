//! Post-source file reading and parsing.
//!
//! A post-source file is plain UTF-8 text, one post per line. Lines whose
//! first non-whitespace character is `#` are comments; blank lines are
//! ignored. A literal `\n` inside a line expands to a real line break, so a
//! single source line can produce a multi-line post.

use crate::Candidate;
use std::path::Path;
use tracing::debug;
use warble_error::{SourceError, SourceErrorKind, SourceResult};

/// Read and parse a post-source file into candidates, in file order.
///
/// # Errors
///
/// Returns [`SourceErrorKind::NotFound`] when the file does not exist, which
/// callers treat as the bootstrap path and answer by writing a template, and
/// [`SourceErrorKind::Read`] for any other I/O failure.
///
/// # Examples
///
/// ```no_run
/// use warble_core::source;
///
/// let candidates = source::read("posts/bluesky.txt")?;
/// for candidate in &candidates {
///     println!("{}", candidate);
/// }
/// # Ok::<(), warble_error::SourceError>(())
/// ```
pub fn read(path: impl AsRef<Path>) -> SourceResult<Vec<Candidate>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            SourceError::new(SourceErrorKind::NotFound(path.display().to_string()))
        }
        _ => SourceError::new(SourceErrorKind::Read(format!("{}: {}", path.display(), e))),
    })?;
    let candidates = parse(&raw);
    debug!(
        path = %path.display(),
        count = candidates.len(),
        "Parsed post-source file"
    );
    Ok(candidates)
}

/// Parse raw post-source text into candidates.
///
/// Leading and trailing blank lines are stripped; comment and blank lines are
/// excluded; every surviving line becomes one candidate with its `\n` escapes
/// expanded. Ordering matches the file top to bottom.
pub fn parse(raw: &str) -> Vec<Candidate> {
    raw.trim_matches('\n')
        .lines()
        .filter(|line| is_post_line(line))
        .map(|line| Candidate::new(line.replace("\\n", "\n")))
        .collect()
}

/// A line holds a post unless it is blank or a comment.
fn is_post_line(line: &str) -> bool {
    let stripped = line.trim_start();
    !stripped.is_empty() && !stripped.starts_with('#')
}

/// Write an instructional template to `path`, creating parent directories.
///
/// Used to bootstrap a missing post-source file with the platform's usage
/// instructions; the template is all comments, so a subsequent [`read`]
/// yields no candidates until the author adds posts.
///
/// # Errors
///
/// Returns [`SourceErrorKind::Write`] when the directory or file cannot be
/// created.
pub fn write_template(path: impl AsRef<Path>, text: &str) -> SourceResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SourceError::new(SourceErrorKind::Write(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }
    }
    std::fs::write(path, text).map_err(|e| {
        SourceError::new(SourceErrorKind::Write(format!("{}: {}", path.display(), e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let raw = "# header comment\n\nfirst post\n   \n  # indented comment\nsecond post\n";
        let candidates = parse(raw);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].as_str(), "first post");
        assert_eq!(candidates[1].as_str(), "second post");
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let raw = "alpha\nbeta\ngamma";
        let candidates = parse(raw);
        let texts: Vec<&str> = candidates.iter().map(|c| c.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_parse_expands_newline_escape() {
        let candidates = parse("line one\\nline two");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].as_str(), "line one\nline two");
    }

    #[test]
    fn test_parse_keeps_indented_posts() {
        let candidates = parse("  indented but real");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].as_str(), "  indented but real");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n# only comments\n\n").is_empty());
    }
}
