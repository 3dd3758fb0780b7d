use {
    std::fmt,
    typed_builder::TypedBuilder,
    serde::{Serialize, Deserialize},
};

pub const UNASSIGNED_TOPIC: i32 = -1;

#[derive(TypedBuilder, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Comment {
    #[builder(default, setter(into))]
    text: Option<String>,
    #[builder(default, setter(into))]
    platform: Option<String>,
    #[builder(default, setter(into))]
    timestamp: Option<String>,
    #[builder(default, setter(into))]
    likes: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SentimentResult {
    score: f64,
    label: SentimentLabel,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TopicDescriptor {
    topic: usize,
    keywords: Vec<String>,
}

// one row of the pipeline output, aligned with the input collection
#[derive(TypedBuilder, Serialize, Clone, Debug)]
pub struct AnalyzedComment {
    comment: Comment,
    clean_text: String,
    sentiment: SentimentResult,
    topic_cluster: i32,
}

impl Comment {
    pub fn from_text(text: &str) -> Self {
        Self::builder().text(text.to_owned()).build()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn likes(&self) -> Option<u64> {
        self.likes
    }
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [SentimentLabel::Positive, SentimentLabel::Neutral, SentimentLabel::Negative];

    /// Strict on both sides: a score sitting exactly on a threshold is `Neutral`.
    pub fn from_score(score: f64, positive_threshold: f64, negative_threshold: f64) -> Self {
        if score > positive_threshold {
            SentimentLabel::Positive
        } else if score < negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SentimentResult {
    pub fn new(score: f64, label: SentimentLabel) -> Self {
        Self {
            score,
            label,
        }
    }

    pub fn neutral() -> Self {
        Self::new(0.0, SentimentLabel::Neutral)
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn label(&self) -> SentimentLabel {
        self.label
    }
}

impl TopicDescriptor {
    pub fn new(topic: usize, keywords: Vec<String>) -> Self {
        Self {
            topic,
            keywords,
        }
    }

    pub fn topic(&self) -> usize {
        self.topic
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn summary(&self) -> String {
        self.keywords.join(", ")
    }
}

impl AnalyzedComment {
    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn clean_text(&self) -> &str {
        &self.clean_text
    }

    pub fn sentiment(&self) -> &SentimentResult {
        &self.sentiment
    }

    pub fn topic_cluster(&self) -> i32 {
        self.topic_cluster
    }

    pub fn topic(&self) -> Option<usize> {
        usize::try_from(self.topic_cluster).ok()
    }
}
