//! Line-oriented source text builder.

/// Accumulates source text one line at a time, tracking indentation depth.
#[derive(Debug)]
pub struct SourceWriter {
    out: String,
    unit: String,
    depth: usize,
}

impl SourceWriter {
    /// Creates a writer that indents each level by `indent` spaces.
    pub fn new(indent: usize) -> Self {
        Self {
            out: String::new(),
            unit: " ".repeat(indent),
            depth: 0,
        }
    }

    /// Writes one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    /// Writes an empty line without indentation.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Writes `header` followed by ` {` and indents the following lines.
    pub fn open(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
    }

    /// Dedents and writes the closing brace.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Returns the accumulated text.
    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut writer = SourceWriter::new(2);
        writer.open("class A");
        writer.open("void f()");
        writer.line("return;");
        writer.close();
        writer.blank();
        writer.close();

        assert_eq!(
            writer.finish(),
            "class A {\n  void f() {\n    return;\n  }\n\n}\n"
        );
    }

    #[test]
    fn test_unbalanced_close_stays_at_margin() {
        let mut writer = SourceWriter::new(4);
        writer.close();
        writer.line("x");

        assert_eq!(writer.finish(), "}\nx\n");
    }
}
