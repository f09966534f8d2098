/// Resource limits to keep evaluation bounded on hostile input
///
/// Generous enough for anything typed by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum expression size in bytes
    /// Real usage: ~50 bytes, Limit: 64KB
    pub max_expression_bytes: usize,

    /// Maximum number of simultaneously open parentheses
    /// Real usage: ~3 levels, Limit: 256
    pub max_nesting_depth: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_expression_bytes: 64 * 1024, // 64 KB
            max_nesting_depth: 256,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
