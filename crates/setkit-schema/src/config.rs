/// Controls schema validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum number of messages kept in a [`ValidationResult`](crate::ValidationResult).
    pub max_reported_errors: usize,
    /// When false, the `BigNumber` and `wholeBigNumber` format predicates are
    /// skipped and only the value shape is checked.
    pub validate_formats: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_reported_errors: 4,
            validate_formats: true,
        }
    }
}
