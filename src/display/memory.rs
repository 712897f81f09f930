//! In-memory frame recorder.

use std::io;

use super::DisplaySink;
use crate::canvas::Canvas;
use crate::style::PlainFormatter;

/// Records frames as plain rows.
///
/// An unbounded sink keeps every frame. A bounded one keeps only the most
/// recent `limit` frames but still counts all of them.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    frames: Vec<Vec<String>>,
    limit: Option<usize>,
    shown: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` of the latest frames (at least one).
    pub fn bounded(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Frames shown so far, including any no longer retained.
    pub fn frame_count(&self) -> usize {
        self.shown
    }
}

impl DisplaySink for MemorySink {
    fn show(&mut self, canvas: &Canvas) -> io::Result<()> {
        if let Some(limit) = self.limit {
            if self.frames.len() >= limit {
                let excess = self.frames.len() + 1 - limit;
                self.frames.drain(..excess);
            }
        }
        self.frames.push(canvas.rows(&PlainFormatter));
        self.shown += 1;
        Ok(())
    }
}
