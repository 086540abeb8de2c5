//! Configuration for TSX output

/// Configuration options for the emitted component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsxConfig {
    /// Name of the default-exported function
    pub function_name: String,

    /// Whether the root container carries the pulse animation class
    pub animate: bool,
}

impl Default for TsxConfig {
    fn default() -> Self {
        Self {
            function_name: "Loading".to_string(),
            animate: true,
        }
    }
}

impl TsxConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exported function name
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Set whether the root container animates
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TsxConfig::default();
        assert_eq!(config.function_name, "Loading");
        assert!(config.animate);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TsxConfig::new()
            .with_function_name("BoardLoading")
            .with_animate(false);

        assert_eq!(config.function_name, "BoardLoading");
        assert!(!config.animate);
    }
}
