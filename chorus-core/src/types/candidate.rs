//! Candidate and run-result types produced by the pipeline

use serde::{Deserialize, Serialize};

/// The outcome of one dispatched generation unit
///
/// Every dispatch produces exactly one `Candidate` per requested unit, failed
/// units included. `index` is the unit's submission position and is stable
/// regardless of completion order; a failed unit keeps its slot with empty
/// text so the caller can see which positions produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Submission index of this unit (0-based)
    pub index: usize,
    /// Generated text; empty when the unit failed
    pub text: String,
    /// Whether the unit completed successfully
    pub ok: bool,
}

impl Candidate {
    /// A unit that completed with the given text
    pub fn success(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            ok: true,
        }
    }

    /// A unit that exhausted its attempts
    pub fn failure(index: usize) -> Self {
        Self {
            index,
            text: String::new(),
            ok: false,
        }
    }

    /// Whether this candidate can feed synthesis
    ///
    /// A successful unit that produced only whitespace is as unusable as a
    /// failed one.
    pub fn is_usable(&self) -> bool {
        self.ok && !self.text.trim().is_empty()
    }
}

/// The final output of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// The synthesized answer
    pub answer: String,
    /// Every candidate in submission order, failures included
    pub candidates: Vec<Candidate>,
}

impl RunResult {
    /// Texts of the candidates that fed synthesis, in submission order
    pub fn usable_texts(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .filter(|c| c.is_usable())
            .map(|c| c.text.as_str())
            .collect()
    }
}
