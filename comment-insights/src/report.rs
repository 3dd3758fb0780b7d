use {
    std::fs,
    anyhow::{Context, Result},
    serde::Serialize,
    tracing::{info, warn},
    comment_insights_core::{
        entity::{AnalyzedComment, SentimentLabel, TopicDescriptor},
        insights::{self, Insights, SentimentRow},
        pipeline::PipelineOutput,
        TopicClustering,
    },
};

#[derive(Serialize)]
pub struct Report<'a> {
    comments: &'a [AnalyzedComment],
    topics: &'a [TopicDescriptor],
    no_topics_reason: Option<String>,
    insights: Insights,
    sentiment_filter: Option<SentimentLabel>,
    filtered_comments: Vec<SentimentRow>,
}

impl<'a> Report<'a> {
    pub fn new(output: &'a PipelineOutput, sentiment_filter: Option<SentimentLabel>) -> Self {
        let no_topics_reason = match output.clustering() {
            TopicClustering::Clustered(_) => None,
            TopicClustering::NoResult(reason) => Some(reason.to_string()),
        };

        Self {
            comments: output.comments(),
            topics: output.topics(),
            no_topics_reason,
            insights: Insights::from_output(output),
            sentiment_filter,
            filtered_comments: insights::comments_by_sentiment(output.comments(), sentiment_filter),
        }
    }

    pub fn insights(&self) -> &Insights {
        &self.insights
    }

    pub fn log(&self) {
        let overview = &self.insights.overview;
        info!("total comments: {}", overview.total_comments);
        for count in &overview.sentiment_counts {
            info!("{}: {}", count.label, count.count);
        }
        if let Some(range) = &overview.date_range {
            info!("date range: {} to {}", range.from, range.to);
        }

        let filter = self.sentiment_filter.map(|v| v.as_str()).unwrap_or("All");
        info!("showing {} comments with sentiment {}", self.filtered_comments.len(), filter);
        for row in &self.filtered_comments {
            info!("  [{} {:.3}] {}", row.sentiment_label, row.sentiment_score, row.comment_text);
        }

        if let Some(reason) = &self.no_topics_reason {
            warn!("not enough data for topic modeling: {}", reason);
        }
        for topic in &self.insights.topics {
            info!("topic {} ({} comments): {}", topic.topic, topic.comment_count, topic.keywords);
            for sample in &topic.samples {
                info!("  - {}", sample);
            }
        }

        let words: Vec<String> = self.insights.keywords.iter()
            .map(|v| format!("{} ({})", v.word, v.count))
            .collect();
        info!("top words: {}", words.join(", "));

        let recommendations = &self.insights.recommendations;
        if recommendations.pain_points.is_empty() {
            info!("no topic clusters found in negative comments");
        }
        for topic in &recommendations.pain_points {
            info!("pain point: topic {} (keywords: {}) has {} negative comments, consider addressing it in FAQs or dedicated posts", topic.topic, topic.keywords, topic.comments);
        }
        if recommendations.working_messaging.is_empty() {
            info!("no topic clusters found in positive comments");
        }
        for topic in &recommendations.working_messaging {
            info!("works well: topic {} (keywords: {}) has {} positive comments, reinforce these themes in future campaigns", topic.topic, topic.keywords, topic.comments);
        }
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let payload = serde_json::to_vec_pretty(self)?;
        fs::write(path, payload).with_context(|| format!("failed to write report to {}", path))?;
        info!("report saved to {}", path);
        Ok(())
    }
}
