use {
    std::fs::read_to_string,
    tracing::warn,
    serde::Deserialize,
    crate::entity::SentimentLabel,
};

pub const MIN_TOPICS: usize = 2;
pub const MAX_TOPICS: usize = 10;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pipeline: Option<PipelineConfig>,
    input: Option<InputConfig>,
    output: Option<OutputConfig>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PipelineConfig {
    pub n_topics: usize,
    pub max_features: usize,
    pub top_keywords: usize,
    pub n_runs: usize,
    pub max_iterations: u64,
    pub tolerance: f64,
    pub seed: u64,
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct InputConfig {
    path: Option<String>,
    platform: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct OutputConfig {
    path: Option<String>,
    sentiment: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            n_topics: 5,
            max_features: 1000,
            top_keywords: 10,
            n_runs: 10,
            max_iterations: 300,
            tolerance: 1e-4,
            seed: 42,
            positive_threshold: 0.1,
            negative_threshold: -0.1,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            platform: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::from_toml(&v))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }

    pub fn pipeline(&self) -> PipelineConfig {
        self.pipeline.as_ref().cloned().unwrap_or_default().validated()
    }

    pub fn input(&self) -> InputConfig {
        self.input.as_ref().cloned().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.as_ref().cloned().unwrap_or_default()
    }
}

impl PipelineConfig {
    // the dashboard only ever offers 2..=10 topics
    fn validated(mut self) -> Self {
        let clamped = self.n_topics.clamp(MIN_TOPICS, MAX_TOPICS);
        if clamped != self.n_topics {
            warn!("n_topics {} is out of range {}..={}, using {}", self.n_topics, MIN_TOPICS, MAX_TOPICS, clamped);
            self.n_topics = clamped;
        }
        self
    }
}

impl InputConfig {
    pub fn path(&self) -> String {
        self.path.as_ref().cloned().unwrap_or("data/sample_comments.csv".to_owned())
    }

    /// `None` when no platform filter applies ("All" counts as none).
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
            .filter(|v| !v.trim().is_empty() && !v.eq_ignore_ascii_case("all"))
    }
}

impl OutputConfig {
    pub fn path(&self) -> Option<&String> {
        self.path.as_ref()
    }

    // "All" or anything unrecognised lists every comment
    pub fn sentiment(&self) -> Option<SentimentLabel> {
        self.sentiment.as_deref().and_then(SentimentLabel::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        let pipeline = config.pipeline();

        assert_eq!(pipeline.n_topics, 5);
        assert_eq!(pipeline.max_features, 1000);
        assert_eq!(pipeline.top_keywords, 10);
        assert_eq!(pipeline.seed, 42);
        assert_eq!(config.input().path(), "data/sample_comments.csv");
        assert_eq!(config.input().platform(), None);
        assert!(config.output().path().is_none());
        assert_eq!(config.output().sentiment(), None);
    }

    #[test]
    fn output_sentiment_filter() {
        let config = Config::from_toml("[output]\nsentiment = \"Negative\"\n").unwrap();
        assert_eq!(config.output().sentiment(), Some(SentimentLabel::Negative));

        let config = Config::from_toml("[output]\nsentiment = \"All\"\n").unwrap();
        assert_eq!(config.output().sentiment(), None);
    }

    #[test]
    fn partial_pipeline_section_keeps_other_defaults() {
        let config = Config::from_toml("[pipeline]\nn_topics = 3\n\n[input]\nplatform = \"YouTube\"\n").unwrap();

        assert_eq!(config.pipeline().n_topics, 3);
        assert_eq!(config.pipeline().n_runs, 10);
        assert_eq!(config.input().platform(), Some("YouTube"));
    }

    #[test]
    fn n_topics_is_clamped_to_dashboard_range() {
        let config = Config::from_toml("[pipeline]\nn_topics = 40\n").unwrap();
        assert_eq!(config.pipeline().n_topics, MAX_TOPICS);

        let config = Config::from_toml("[pipeline]\nn_topics = 1\n").unwrap();
        assert_eq!(config.pipeline().n_topics, MIN_TOPICS);
    }

    #[test]
    fn all_platforms_means_no_filter() {
        let config = Config::from_toml("[input]\nplatform = \"All\"\n").unwrap();
        assert_eq!(config.input().platform(), None);
    }
}
