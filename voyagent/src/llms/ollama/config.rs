//! Connection settings for a local Ollama server.

/// Where the Ollama server lives and how the client talks to it.
///
/// The travel planner fills this from its `[model]` config table; the
/// defaults match a stock `ollama serve` with `mistral` pulled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    /// Server root, without the `/api` suffix.
    pub base_url: String,
    /// Model named in every chat request.
    pub model: String,
    /// Whole-request timeout. Local models can be slow to load.
    pub timeout_secs: Option<u64>,
    /// Passed through as the request's `keep_alive` duration.
    pub keep_alive: Option<String>,
}

impl OllamaConfig {
    /// Port 11434 on the local machine.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:11434";
    /// Model used when none is configured.
    pub const DEFAULT_MODEL: &'static str = "mistral";
    /// Five minutes, enough for a cold model load plus one reply.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Same as [`Default::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, but talking to `model`.
    #[must_use]
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Defaults with `OLLAMA_BASE_URL`, `OLLAMA_MODEL` and
    /// `OLLAMA_KEEP_ALIVE` applied when set.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("OLLAMA_BASE_URL").unwrap_or(defaults.base_url),
            model: std::env::var("OLLAMA_MODEL").unwrap_or(defaults.model),
            keep_alive: std::env::var("OLLAMA_KEEP_ALIVE").ok(),
            ..defaults
        }
    }

    /// Points the client at another server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replaces the model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Request timeout in seconds.
    #[must_use]
    pub const fn timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// How long the server keeps the model loaded, e.g. `"5m"`.
    #[must_use]
    pub fn keep_alive(mut self, duration: impl Into<String>) -> Self {
        self.keep_alive = Some(duration.into());
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
            keep_alive: None,
        }
    }
}
