//! Edge style inspection.
//!
//! draw.io encodes the look of a cell as a `;`-separated list of `key=value`
//! pairs, optionally led by bare tokens such as `ellipse` or `edgeLabel`. The
//! only question the resolver asks of an edge's style is whether the edge ends
//! in an open (hollow) head, which marks a generalization.

/// Parsed view over a cell's style string.
#[derive(Debug, Clone, Default)]
pub struct CellStyle<'a> {
    entries: Vec<(&'a str, Option<&'a str>)>,
}

impl<'a> CellStyle<'a> {
    /// Split a raw style string into its entries.
    pub fn parse(style: &'a str) -> Self {
        let entries = style
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (entry, None),
            })
            .collect();
        Self { entries }
    }

    /// Returns the value of `key`. Later entries override earlier ones.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .rev()
            .find(|(name, _)| *name == key)
            .and_then(|(_, value)| *value)
    }

    /// Returns `true` when the edge terminates in an open, unfilled head.
    ///
    /// That is an unfilled block arrow (`endArrow=block` or one of its
    /// `block*` variants with `endFill=0`) or the `flexArrow` shape.
    pub fn has_open_head(&self) -> bool {
        let open_block = self
            .get("endArrow")
            .is_some_and(|arrow| arrow.starts_with("block"))
            && self.get("endFill") == Some("0");

        open_block || self.get("shape") == Some("flexArrow")
    }
}
