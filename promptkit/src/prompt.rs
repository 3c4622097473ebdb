use promptkit_types::{
    PromptBackend, PromptError, PromptOptions, validate_float, validate_int, validate_string,
};
use tracing::debug;

use crate::select_multiple;

/// Typed prompts on top of a [`PromptBackend`].
///
/// Every method blocks until the user answers or cancels. Cancellation comes
/// back as [`PromptError::Cancelled`] (wrapped in `Aborted` for multi-select).
#[derive(Debug, Clone)]
pub struct Prompt<B> {
    backend: B,
    options: PromptOptions,
}

impl<B: PromptBackend> Prompt<B> {
    /// Create a prompt with default options.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            options: PromptOptions::default(),
        }
    }

    /// Replace all options.
    pub fn with_options(mut self, options: PromptOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the label shown above multi-select lists.
    pub fn with_multi_select_label(mut self, label: impl Into<String>) -> Self {
        self.options.multi_select_label = label.into();
        self
    }

    /// The options used for labels.
    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    /// Ask for a non-empty string.
    ///
    /// `values` is the label, optionally followed by a default value.
    /// Any other number of values is rejected with `InvalidArguments`.
    pub fn ask_string(&self, values: &[&str]) -> Result<String, PromptError> {
        let (label, default) = match values {
            [label] => (*label, ""),
            [label, default] => (*label, *default),
            _ => {
                return Err(PromptError::InvalidArguments {
                    expected: "a label and an optional default",
                    got: values.len(),
                });
            }
        };

        self.ask_string_with_validator(label, default, validate_string)
    }

    /// Ask for a string checked by `validate`. An empty `default` means no default.
    pub fn ask_string_with_validator(
        &self,
        label: &str,
        default: &str,
        validate: impl Fn(&str) -> Result<(), String>,
    ) -> Result<String, PromptError> {
        let default = (!default.is_empty()).then_some(default);
        self.backend
            .ask_text(label, default, &validate)
            .map_err(Into::into)
    }

    /// Ask for an integer, pre-filled with `default`.
    pub fn ask_int(&self, label: &str, default: i64) -> Result<i64, PromptError> {
        let answer = self.ask_string_with_validator(label, &default.to_string(), validate_int)?;
        answer
            .parse()
            .map_err(|_| PromptError::ValidationFailed(format!("'{answer}' is not an integer")))
    }

    /// Ask for a floating-point number, pre-filled with `default`.
    pub fn ask_float(&self, label: &str, default: f64) -> Result<f64, PromptError> {
        let answer =
            self.ask_string_with_validator(label, &default.to_string(), validate_float)?;
        answer
            .parse()
            .map_err(|_| PromptError::ValidationFailed(format!("'{answer}' is not a number")))
    }

    /// Ask a yes/no question as a two-entry list. True iff the first entry is picked.
    pub fn ask_bool(&self, label: &str) -> Result<bool, PromptError> {
        let items = [self.options.yes_label.clone(), self.options.no_label.clone()];
        Ok(self.choose(label, &items)? == 0)
    }

    /// Ask the user to pick one string.
    pub fn ask_from_list_string<S: AsRef<str>>(
        &self,
        label: &str,
        items: &[S],
    ) -> Result<String, PromptError> {
        let items: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
        let index = self.choose(label, &items)?;
        Ok(items[index].clone())
    }

    /// Ask the user to pick one integer.
    pub fn ask_from_list_int(&self, label: &str, items: &[i64]) -> Result<i64, PromptError> {
        let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
        let index = self.choose(label, &rendered)?;
        Ok(items[index])
    }

    /// Let the user toggle any number of `items` and return the selected ones
    /// in their original order. Uses the configured multi-select label.
    pub fn select_multiple<I, S>(&self, items: I) -> Result<Vec<String>, PromptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        select_multiple(&self.backend, &self.options, items)
    }

    /// Like [`Prompt::select_multiple`], with `label` above the list for this call.
    pub fn ask_from_list_string_multiple<I, S>(
        &self,
        label: &str,
        items: I,
    ) -> Result<Vec<String>, PromptError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = self.options.clone().with_multi_select_label(label);
        select_multiple(&self.backend, &options, items)
    }

    /// Single-select with bounds checking on the backend's answer.
    fn choose(&self, label: &str, items: &[String]) -> Result<usize, PromptError> {
        if items.is_empty() {
            return Err(PromptError::InvalidArguments {
                expected: "at least one item",
                got: 0,
            });
        }

        let index = self
            .backend
            .ask_select(label, items, 0)
            .map_err(Into::into)?;
        debug!(label, index, "list prompt answered");

        if index >= items.len() {
            return Err(PromptError::backend(anyhow::anyhow!(
                "choice index {index} out of range for {} items",
                items.len()
            )));
        }
        Ok(index)
    }
}
