/// Limits applied before any evaluation work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorConfig {
    /// Longest accepted expression, in characters
    pub max_expression_len: usize,
    /// Deepest accepted parenthesis nesting
    pub max_depth: usize,
}

impl EvaluatorConfig {
    pub const DEFAULT_MAX_EXPRESSION_LEN: usize = 64 * 1024;
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn with_max_expression_len(mut self, len: usize) -> Self {
        self.max_expression_len = len;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_expression_len: Self::DEFAULT_MAX_EXPRESSION_LEN,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
