use {
    std::collections::{BTreeMap, HashMap},
    serde::Serialize,
    chrono::{DateTime, NaiveDate, NaiveDateTime},
    crate::{
        entity::{AnalyzedComment, SentimentLabel, TopicDescriptor},
        pipeline::PipelineOutput,
        stopwords::{self, StopWords},
    },
};

const SAMPLES_PER_TOPIC: usize = 5;
const TOP_WORDS: usize = 20;
const HIGHLIGHTED_TOPICS: usize = 3;
const MIN_WORD_LENGTH: usize = 3;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Insights {
    pub overview: Overview,
    pub topics: Vec<TopicSummary>,
    pub keywords: Vec<KeywordCount>,
    pub recommendations: Recommendations,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_comments: usize,
    pub sentiment_counts: Vec<SentimentCount>,
    pub date_range: Option<DateRange>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SentimentCount {
    pub label: SentimentLabel,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SentimentRow {
    pub comment_text: String,
    pub sentiment_label: SentimentLabel,
    pub sentiment_score: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TopicSummary {
    pub topic: usize,
    pub keywords: String,
    pub comment_count: usize,
    pub samples: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TopicHighlight {
    pub topic: usize,
    pub keywords: String,
    pub comments: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub pain_points: Vec<TopicHighlight>,
    pub working_messaging: Vec<TopicHighlight>,
}

impl Insights {
    pub fn from_output(output: &PipelineOutput) -> Self {
        let comments = output.comments();
        let topics = output.topics();

        Self {
            overview: overview(comments),
            topics: topic_summaries(comments, topics),
            keywords: top_words(comments, stopwords::english()),
            recommendations: Recommendations {
                pain_points: highlighted_topics(comments, topics, SentimentLabel::Negative),
                working_messaging: highlighted_topics(comments, topics, SentimentLabel::Positive),
            },
        }
    }
}

pub fn overview(comments: &[AnalyzedComment]) -> Overview {
    let sentiment_counts = SentimentLabel::ALL.iter()
        .map(|label| SentimentCount {
            label: *label,
            count: comments.iter().filter(|c| c.sentiment().label() == *label).count(),
        })
        .collect();

    let timestamps: Vec<NaiveDateTime> = comments.iter()
        .filter_map(|c| c.comment().timestamp())
        .filter_map(parse_timestamp)
        .collect();

    let date_range = match (timestamps.iter().min(), timestamps.iter().max()) {
        (Some(from), Some(to)) => Some(DateRange {
            from: from.format("%Y-%m-%d %H:%M:%S").to_string(),
            to: to.format("%Y-%m-%d %H:%M:%S").to_string(),
        }),
        _ => None,
    };

    Overview {
        total_comments: comments.len(),
        sentiment_counts,
        date_range,
    }
}

// `None` lists every comment
pub fn comments_by_sentiment(comments: &[AnalyzedComment], label: Option<SentimentLabel>) -> Vec<SentimentRow> {
    comments.iter()
        .filter(|c| label.map(|v| c.sentiment().label() == v).unwrap_or(true))
        .map(|c| SentimentRow {
            comment_text: c.comment().text().unwrap_or_default().to_owned(),
            sentiment_label: c.sentiment().label(),
            sentiment_score: c.sentiment().score(),
        })
        .collect()
}

pub fn topic_summaries(comments: &[AnalyzedComment], topics: &[TopicDescriptor]) -> Vec<TopicSummary> {
    topics.iter()
        .map(|descriptor| {
            let members: Vec<&AnalyzedComment> = comments.iter()
                .filter(|c| c.topic() == Some(descriptor.topic()))
                .collect();

            TopicSummary {
                topic: descriptor.topic(),
                keywords: descriptor.summary(),
                comment_count: members.len(),
                samples: members.iter()
                    .take(SAMPLES_PER_TOPIC)
                    .map(|c| c.comment().text().unwrap_or_default().to_owned())
                    .collect(),
            }
        })
        .collect()
}

pub fn top_words(comments: &[AnalyzedComment], stop_words: &StopWords) -> Vec<KeywordCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in comments.iter().flat_map(|c| c.clean_text().split_whitespace()) {
        if word.chars().count() >= MIN_WORD_LENGTH && !stop_words.contains(word) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<(&str, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    counts.into_iter()
        .take(TOP_WORDS)
        .map(|(word, count)| KeywordCount {
            word: word.to_owned(),
            count,
        })
        .collect()
}

pub fn highlighted_topics(comments: &[AnalyzedComment], topics: &[TopicDescriptor], label: SentimentLabel) -> Vec<TopicHighlight> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for topic in comments.iter().filter(|c| c.sentiment().label() == label).filter_map(|c| c.topic()) {
        *counts.entry(topic).or_insert(0) += 1;
    }

    let mut counts: Vec<(usize, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    counts.into_iter()
        .take(HIGHLIGHTED_TOPICS)
        .filter_map(|(topic, count)| topics.get(topic).map(|descriptor| TopicHighlight {
            topic,
            keywords: descriptor.summary(),
            comments: count,
        }))
        .collect()
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DateTime::parse_from_rfc3339(value)
        .map(|v| v.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().and_then(|v| v.and_hms_opt(0, 0, 0)))
}
