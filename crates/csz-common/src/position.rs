//! Line/column positions for the editor surface.
//!
//! Completion and auto-insert requests arrive with line/column
//! coordinates while the scanner and the recommenders work in byte
//! offsets. `LineMap` translates between the two. Columns are UTF-16
//! code units, matching what editors send.

/// A line/column position in a document, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub line: u32,
    /// Column in UTF-16 code units.
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// A half-open span of the document in line/column coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }
}

/// Byte offset of the first character of every line.
#[derive(Debug, Clone)]
pub struct LineMap {
    starts: Vec<u32>,
}

impl LineMap {
    /// Index the line starts of `source`. `\n`, `\r\n`, and bare `\r`
    /// all end a line.
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0u32];
        let bytes = source.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => starts.push((i + 1) as u32),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    starts.push((i + 1) as u32);
                }
                _ => {}
            }
            i += 1;
        }
        LineMap { starts }
    }

    /// The line/column position of a byte offset. Offsets past the end
    /// of the document clamp to the end.
    pub fn position_of(&self, offset: u32, source: &str) -> Position {
        let offset = offset.min(source.len() as u32);
        // starts[0] is 0, so the partition point is at least 1.
        let line = self.starts.partition_point(|&s| s <= offset) - 1;
        let character = source
            .get(self.starts[line] as usize..offset as usize)
            .map_or(0, |text| text.encode_utf16().count() as u32);
        Position {
            line: line as u32,
            character,
        }
    }

    /// The byte offset of a line/column position, or `None` when the
    /// line does not exist. Columns past the end of the line clamp to
    /// the line end.
    pub fn offset_of(&self, position: Position, source: &str) -> Option<u32> {
        let start = *self.starts.get(position.line as usize)? as usize;
        let mut remaining = position.character;
        let mut offset = start;
        for ch in source[start..].chars() {
            if remaining == 0 || ch == '\n' || ch == '\r' {
                break;
            }
            let units = ch.len_utf16() as u32;
            if units > remaining {
                break;
            }
            remaining -= units;
            offset += ch.len_utf8();
        }
        Some(offset as u32)
    }

    /// The line/column range covering the byte span `start..end`.
    pub fn range(&self, start: u32, end: u32, source: &str) -> Range {
        Range::new(self.position_of(start, source), self.position_of(end, source))
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
