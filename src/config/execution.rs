//! Execution configuration for the `clean` command.

/// Options controlling how a cleanup runs.
#[derive(Clone, Debug)]
pub struct ExecutionOptions {
    /// Analyze only; never delete anything
    pub dry_run: bool,

    /// Let the user pick categories from a list
    pub interactive: bool,

    /// Ask once before cleaning ordinary categories.
    ///
    /// High-risk categories are confirmed individually regardless of this
    /// setting.
    pub confirm: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            interactive: false,
            confirm: true,
        }
    }
}
