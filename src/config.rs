/// Environment variable holding the Supabase project URL.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the Supabase anon key.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Configuration for connecting to the Mentorship.AI Supabase project.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Supabase project URL (e.g. "https://yourproject.supabase.co")
    pub supabase_url: String,
    /// Supabase anon key
    pub anon_key: String,
    /// PostgREST schema (defaults to "public")
    pub schema: String,
}

impl BridgeConfig {
    /// Create a new config from a project URL and anon key.
    pub fn new(supabase_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            anon_key: anon_key.into(),
            schema: "public".to_string(),
        }
    }

    /// Set the PostgREST schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Read configuration from the environment.
    ///
    /// Returns `None` (after a warning) when either variable is unset
    /// or empty. Callers treat `None` as "operations unavailable".
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(URL_VAR).ok().filter(|v| !v.is_empty());
        let key = std::env::var(ANON_KEY_VAR).ok().filter(|v| !v.is_empty());
        match (url, key) {
            (Some(url), Some(key)) => Some(Self::new(url, key)),
            _ => {
                tracing::warn!("Missing {URL_VAR} or {ANON_KEY_VAR}");
                None
            }
        }
    }
}
