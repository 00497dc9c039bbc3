//! Read loop configuration.

/// Settings for `run_repl`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before each line of input.
    pub prompt: String,
    /// Whether to print the version banner on start.
    pub banner: bool,
}

impl ReplConfig {
    /// Lines printed on start when `banner` is set.
    pub fn banner_lines(&self) -> Vec<String> {
        if !self.banner {
            return Vec::new();
        }
        vec![
            format!("fLisp Version {}", env!("CARGO_PKG_VERSION")),
            "Press <Ctrl> + <c> to Exit".to_string(),
            String::new(),
        ]
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "fLisp> ".to_string(),
            banner: true,
        }
    }
}
