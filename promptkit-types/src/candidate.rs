use std::fmt;

use crate::PromptError;

/// Marker shown in front of selected candidates.
pub const SELECTED_MARKER: &str = "✔";

/// One entry of a multi-select list.
///
/// The "Done" entry is its own variant rather than a reserved identity, so a
/// caller-supplied item can never be mistaken for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// The sentinel that ends the toggle loop. Never selectable.
    Done { label: String },

    /// A caller-supplied entry and its current selection state.
    Item { identity: String, selected: bool },
}

impl Candidate {
    /// Create an unselected item.
    pub fn item(identity: impl Into<String>) -> Self {
        Self::Item {
            identity: identity.into(),
            selected: false,
        }
    }

    /// Check if this is the "Done" sentinel.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    /// Check if this candidate is currently selected. Always false for the sentinel.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Item { selected: true, .. })
    }

    /// The text this candidate is identified by, without the selection marker.
    pub fn label(&self) -> &str {
        match self {
            Self::Done { label } => label,
            Self::Item { identity, .. } => identity,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done { label } => f.write_str(label),
            Self::Item {
                identity,
                selected: true,
            } => write!(f, "{SELECTED_MARKER} {identity}"),
            Self::Item { identity, .. } => f.write_str(identity),
        }
    }
}

/// What a call to [`CandidateList::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The sentinel was chosen; nothing changed.
    Done,
    /// The item is now selected.
    Selected,
    /// The item is now deselected.
    Deselected,
}

/// The ordered candidates of one multi-select interaction.
///
/// Position 0 always holds the sentinel, exactly once. Items follow in the
/// order the caller supplied them. Toggling is by index, so duplicate
/// identities stay independent of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
}

impl CandidateList {
    /// Build a fresh list: the sentinel followed by every item, all unselected.
    pub fn new<I, S>(done_label: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter();
        let mut candidates = Vec::with_capacity(items.size_hint().0 + 1);
        candidates.push(Candidate::Done {
            label: done_label.into(),
        });
        candidates.extend(items.map(Candidate::item));
        Self { candidates }
    }

    /// All candidates, sentinel first.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of caller-supplied items (the sentinel is not counted).
    pub fn item_count(&self) -> usize {
        self.candidates.len() - 1
    }

    /// Number of items currently selected.
    pub fn selected_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.is_selected()).count()
    }

    /// Flip the selection of the candidate at `index`.
    ///
    /// Choosing the sentinel changes nothing and reports [`Toggle::Done`].
    pub fn toggle(&mut self, index: usize) -> Result<Toggle, PromptError> {
        let len = self.candidates.len();
        match self.candidates.get_mut(index) {
            Some(Candidate::Done { .. }) => Ok(Toggle::Done),
            Some(Candidate::Item { selected, .. }) => {
                *selected = !*selected;
                Ok(if *selected {
                    Toggle::Selected
                } else {
                    Toggle::Deselected
                })
            }
            None => Err(PromptError::backend(anyhow::anyhow!(
                "choice index {index} out of range for {len} candidates"
            ))),
        }
    }

    /// Identities of the selected items, in list order.
    pub fn into_selected(self) -> Vec<String> {
        self.candidates
            .into_iter()
            .filter_map(|candidate| match candidate {
                Candidate::Item {
                    identity,
                    selected: true,
                } => Some(identity),
                _ => None,
            })
            .collect()
    }
}
