/// Default label of the multi-select list.
pub const DEFAULT_MULTI_SELECT_LABEL: &str = "Item";

/// Default label of the entry that finishes a multi-select.
pub const DEFAULT_DONE_LABEL: &str = "Done ✔";

/// Presentation settings shared by all prompts of a `Prompt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    /// Label shown above the multi-select list.
    pub multi_select_label: String,

    /// Label of the sentinel entry that ends a multi-select.
    pub done_label: String,

    /// Entry meaning "true" in boolean prompts. Listed first.
    pub yes_label: String,

    /// Entry meaning "false" in boolean prompts.
    pub no_label: String,
}

impl PromptOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self {
            multi_select_label: DEFAULT_MULTI_SELECT_LABEL.to_string(),
            done_label: DEFAULT_DONE_LABEL.to_string(),
            yes_label: "yes".to_string(),
            no_label: "no".to_string(),
        }
    }

    /// Set the multi-select label.
    pub fn with_multi_select_label(mut self, label: impl Into<String>) -> Self {
        self.multi_select_label = label.into();
        self
    }

    /// Set the sentinel label.
    pub fn with_done_label(mut self, label: impl Into<String>) -> Self {
        self.done_label = label.into();
        self
    }

    /// Set the labels used for boolean prompts.
    pub fn with_bool_labels(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.yes_label = yes.into();
        self.no_label = no.into();
        self
    }
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self::new()
    }
}
