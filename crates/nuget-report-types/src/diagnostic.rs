use crate::RepoPath;
use serde::{Deserialize, Serialize};

/// A recoverable problem found while loading inputs.
///
/// Diagnostics never end up in the rendered report. Loaders return them next to their result and
/// the caller decides where they go (log, CI annotation, JSON).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable code from [`crate::ids`].
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<RepoPath>,
}

impl Diagnostic {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            path: None,
        }
    }

    pub fn at(mut self, path: &RepoPath) -> Self {
        self.path = Some(path.clone());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(p) => write!(f, "[{}] {}: {}", self.code, p, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// A loader result paired with the diagnostics produced while computing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Extraction<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        Extraction {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Move this extraction's diagnostics into `sink` and return the value.
    pub fn drain_into(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }
}

impl<T: Default> Extraction<T> {
    /// An empty result carrying a single diagnostic.
    pub fn failed(diagnostic: Diagnostic) -> Self {
        Self {
            value: T::default(),
            diagnostics: vec![diagnostic],
        }
    }
}
