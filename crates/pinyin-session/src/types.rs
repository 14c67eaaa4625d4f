use pinyin_core::unicode::display_width;

/// Physical key panel shape. Caps lock and the shape toggle share this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardShape {
    #[default]
    LowerCase,
    UpperCase,
    NumberSymbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Latin,
    Chinese,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Self::Latin => Self::Chinese,
            Self::Chinese => Self::Latin,
        }
    }
}

/// Snapshot of the mode triple shown by a mode indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeIndicator {
    pub language: Language,
    pub keyboard_shape: KeyboardShape,
    pub caps_lock: bool,
}

/// Candidates for one buffer value: the raw romanization first, then
/// dictionary matches in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSession {
    query: String,
    candidates: Vec<String>,
}

impl CandidateSession {
    pub(crate) fn new(query: &str, matches: &[String], max_matches: usize) -> Self {
        let mut candidates = Vec::with_capacity(1 + matches.len().min(max_matches));
        candidates.push(query.to_string());
        candidates.extend(matches.iter().take(max_matches).cloned());
        Self {
            query: query.to_string(),
            candidates,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Dictionary matches only (everything after the raw query).
    pub fn matches(&self) -> &[String] {
        &self.candidates[1..]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false: the raw query is always present.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Column width of each candidate, for sizing candidate cells.
    pub fn display_widths(&self) -> Vec<usize> {
        self.candidates.iter().map(|c| display_width(c)).collect()
    }
}

const HIDDEN: &[String] = &[];

/// Result of routing one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Forward to the focused target unchanged.
    PassThrough { key_code: u32, text: String },
    /// The buffer changed. `None` means it is now empty and the candidate
    /// panel should be hidden.
    BufferUpdated(Option<CandidateSession>),
    /// Final text for the focused target; input state has been reset.
    Commit(String),
    NoOp,
}

impl Action {
    pub(crate) fn pass_through(key_code: u32, text: impl Into<String>) -> Self {
        Self::PassThrough {
            key_code,
            text: text.into(),
        }
    }

    /// Candidate list to display after this action, if it changes the panel.
    /// An empty slice means hide.
    pub fn candidates(&self) -> Option<&[String]> {
        match self {
            Self::BufferUpdated(Some(s)) => Some(s.candidates()),
            Self::BufferUpdated(None) | Self::Commit(_) => Some(HIDDEN),
            Self::PassThrough { .. } | Self::NoOp => None,
        }
    }
}
