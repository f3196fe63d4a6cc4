use crate::output::traits::{OutputResult, PageRecord, PageSink};
use std::io::Write;

/// Writes the page records as a pretty-printed JSON array
///
/// The shape is `[{url, title, paragraphs[], headings[]}, ...]`.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PageSink for JsonSink<W> {
    fn accept(&mut self, pages: &[PageRecord]) -> OutputResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, pages)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
