//! Splits post bodies into prose and fenced code segments

use thiserror::Error;

/// Code fence delimiter
pub const FENCE: &str = "```";

/// A contiguous piece of rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text; newlines are kept as-is
    Prose(String),
    /// Fenced code with the language label from the fence's first line
    Code { language: String, code: String },
}

impl Segment {
    /// Whether this segment carries no text at all
    pub fn is_empty(&self) -> bool {
        match self {
            Segment::Prose(text) => text.is_empty(),
            Segment::Code { code, .. } => code.is_empty(),
        }
    }
}

/// Content rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A fence opened on `line` (1-based) is never closed
    #[error("Unterminated code fence opened at line {line}")]
    UnterminatedCodeFence { line: usize },
}

/// Split `content` on code fences
///
/// Pieces alternate prose, code, prose, ... starting with prose, so empty
/// leading and trailing prose segments are kept. An odd number of fences is
/// an error.
pub fn render_content(content: &str) -> Result<Vec<Segment>, RenderError> {
    let pieces: Vec<&str> = content.split(FENCE).collect();

    if pieces.len() % 2 == 0 {
        return Err(RenderError::UnterminatedCodeFence {
            line: last_fence_line(content),
        });
    }

    let segments = pieces
        .into_iter()
        .enumerate()
        .map(|(i, piece)| {
            if i % 2 == 0 {
                Segment::Prose(piece.to_string())
            } else {
                code_segment(piece)
            }
        })
        .collect();

    Ok(segments)
}

/// First line is the language label, the rest is the code body
fn code_segment(piece: &str) -> Segment {
    let (language, body) = piece.split_once('\n').unwrap_or((piece, ""));

    // The closing fence usually sits on its own line
    let body = body
        .strip_suffix('\n')
        .map(|b| b.strip_suffix('\r').unwrap_or(b))
        .unwrap_or(body);

    Segment::Code {
        language: language.trim_end_matches('\r').to_string(),
        code: body.to_string(),
    }
}

/// Line number of the last fence marker in `content`
fn last_fence_line(content: &str) -> usize {
    content
        .rfind(FENCE)
        .map(|pos| content[..pos].matches('\n').count() + 1)
        .unwrap_or(1)
}
