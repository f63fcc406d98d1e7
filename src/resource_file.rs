/*!
 * Line-oriented localization resource handling.
 *
 * A resource file is read one line at a time. Each line is either copied
 * verbatim or recognized as a single-level `key: value` entry whose value
 * gets translated. Output lines keep the ordinal position of their source line.
 */

/// Classification of one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine {
    /// Line without key/value structure, copied unchanged
    Passthrough(String),

    /// Entry with a translatable value
    Entry {
        /// Trimmed key (text before the first colon)
        key: String,
        /// Normalized value
        value: String,
    },

    /// Entry whose normalized value is empty
    EmptyEntry {
        /// Trimmed key
        key: String,
    },
}

impl SourceLine {
    /// Text written to the output file for lines that need no translation
    pub fn resolved_output(&self) -> Option<String> {
        match self {
            SourceLine::Passthrough(line) => Some(line.clone()),
            SourceLine::EmptyEntry { key } => Some(format!("  {}: ''", key)),
            SourceLine::Entry { .. } => None,
        }
    }
}

/// Classify a raw source line.
///
/// The line is split on the first colon only, so values may contain colons.
pub fn classify_line(line: &str) -> SourceLine {
    let Some((raw_key, raw_value)) = line.split_once(':') else {
        return SourceLine::Passthrough(line.to_string());
    };

    let key = raw_key.trim().to_string();
    let value = clean_value(raw_value);

    if value.is_empty() {
        SourceLine::EmptyEntry { key }
    } else {
        SourceLine::Entry { key, value }
    }
}

/// Strip surrounding whitespace and one matching pair of quotes from a value
pub fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();

    let quoted = bytes.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[bytes.len() - 1] == bytes[0];

    if quoted {
        trimmed[1..trimmed.len() - 1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render a translated entry as an output line
pub fn format_entry(key: &str, value: &str) -> String {
    format!("  {}: '{}'", key, value)
}

/// One output position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSlot {
    /// Final text of the line
    Resolved(String),
    /// Waiting for the translation of the entry with this key
    Pending { key: String },
}

/// In-order output lines of one language pass
#[derive(Debug, Default)]
pub struct OutputBuffer {
    slots: Vec<OutputSlot>,
}

impl OutputBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolved line, returning its index
    pub fn push_resolved(&mut self, line: String) -> usize {
        self.slots.push(OutputSlot::Resolved(line));
        self.slots.len() - 1
    }

    /// Append a placeholder for an entry awaiting translation, returning its index
    pub fn push_pending(&mut self, key: String) -> usize {
        self.slots.push(OutputSlot::Pending { key });
        self.slots.len() - 1
    }

    /// Fill a pending slot with its translated value.
    ///
    /// Returns false when the index is out of range or already resolved;
    /// a slot is never written twice.
    pub fn resolve(&mut self, index: usize, translated: &str) -> bool {
        let Some(OutputSlot::Pending { key }) = self.slots.get(index) else {
            return false;
        };
        let line = format_entry(key, translated);
        self.slots[index] = OutputSlot::Resolved(line);
        true
    }

    /// Number of lines held
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no line has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots still waiting for a translation
    pub fn pending_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, OutputSlot::Pending { .. }))
            .count()
    }

    /// Slot at an index
    pub fn get(&self, index: usize) -> Option<&OutputSlot> {
        self.slots.get(index)
    }

    /// Join all lines with `\n`; pending slots render as empty lines
    pub fn render(&self) -> String {
        let lines: Vec<&str> = self
            .slots
            .iter()
            .map(|slot| match slot {
                OutputSlot::Resolved(line) => line.as_str(),
                OutputSlot::Pending { .. } => "",
            })
            .collect();
        lines.join("\n")
    }
}
