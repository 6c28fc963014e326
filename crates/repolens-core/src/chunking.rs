//! Size-bounded partitioning of the rendered corpus.
//!
//! Files are rendered as `File: <path>\n\n<content>\n\n` and packed into
//! chunks of at most `max_chars` bytes. A file whose rendering alone exceeds
//! the bound is split on line boundaries into its own chunks; a line longer
//! than the bound is cut into fixed-width windows. Concatenating the chunks
//! in order gives back the rendered corpus exactly.

use crate::models::{Chunk, FileEntry};
use tracing::trace;

/// Incremental chunk builder.
///
/// ```
/// use repolens_core::{Chunker, FileEntry};
///
/// let mut chunker = Chunker::new(64);
/// chunker.push(&FileEntry::new("a.rs", "fn a() {}"));
/// chunker.push(&FileEntry::new("b.rs", "fn b() {}"));
/// let chunks = chunker.finish();
/// assert_eq!(chunks.len(), 1);
/// ```
#[derive(Debug)]
pub struct Chunker {
    max_chars: usize,
    buffer: String,
    chunks: Vec<Chunk>,
}

impl Chunker {
    /// `max_chars` of zero is treated as one.
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
            buffer: String::new(),
            chunks: Vec::new(),
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Chunks completed so far, excluding the open buffer.
    pub fn completed(&self) -> usize {
        self.chunks.len()
    }

    pub fn push(&mut self, entry: &FileEntry) {
        let rendered = entry.render();

        if !self.buffer.is_empty() && self.buffer.len() + rendered.len() > self.max_chars {
            self.flush();
        }

        if rendered.len() > self.max_chars {
            trace!(path = %entry.path, len = rendered.len(), "splitting oversized file");
            self.split_oversized(&rendered);
            return;
        }

        self.buffer.push_str(&rendered);
    }

    pub fn finish(mut self) -> Vec<Chunk> {
        self.flush();
        self.chunks
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.chunks.push(Chunk::new(text));
        }
    }

    /// Line-split one oversized rendering. Its pieces never share a chunk with
    /// other files.
    fn split_oversized(&mut self, text: &str) {
        let max = self.max_chars;
        let mut pending = String::new();

        for line in text.split_inclusive('\n') {
            if pending.len() + line.len() <= max {
                pending.push_str(line);
                continue;
            }

            if line.len() > max {
                // Windows start at the pending lines; the tail stays open.
                pending.push_str(line);
                while pending.len() > max {
                    let cut = window_end(&pending, max);
                    let rest = pending.split_off(cut);
                    self.chunks.push(Chunk::new(std::mem::replace(&mut pending, rest)));
                }
                continue;
            }

            if !pending.is_empty() {
                self.chunks.push(Chunk::new(std::mem::take(&mut pending)));
            }
            pending.push_str(line);
        }

        if !pending.is_empty() {
            self.chunks.push(Chunk::new(pending));
        }
    }
}

/// Largest char boundary `<= max`, but always past at least one char.
fn window_end(text: &str, max: usize) -> usize {
    let mut end = max.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    if end == 0 {
        end = text.chars().next().map_or(text.len(), char::len_utf8);
    }
    end
}

/// Chunk an ordered corpus in one go.
pub fn chunk_corpus(files: &[FileEntry], max_chars: usize) -> Vec<Chunk> {
    let mut chunker = Chunker::new(max_chars);
    for entry in files {
        chunker.push(entry);
    }
    chunker.finish()
}
