const DEFAULT_WORKGROUP: &str = "primary";

/// Process configuration, resolved once at startup and passed explicitly
/// to whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Engine workgroup that submitted queries run under.
    pub workgroup: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workgroup: DEFAULT_WORKGROUP.to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            workgroup: std::env::var("WORKGROUP")
                .unwrap_or_else(|_| DEFAULT_WORKGROUP.to_owned()),
        }
    }
}
