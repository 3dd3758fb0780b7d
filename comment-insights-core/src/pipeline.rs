use {
    tracing::{info, warn},
    crate::{
        config::PipelineConfig,
        clustering::{TopicClusterer, TopicClustering},
        entity::{AnalyzedComment, Comment, SentimentResult, TopicDescriptor},
        normalizer::normalize,
        progress::Progress,
        reconcile::ClusteringBatch,
        sentiment::SentimentScorer,
    },
};

/// Clean, score, then cluster once and scatter the topics back onto every comment.
pub struct Pipeline<'a> {
    scorer: SentimentScorer,
    clusterer: TopicClusterer<'a>,
}

pub struct PipelineOutput {
    comments: Vec<AnalyzedComment>,
    clustering: TopicClustering,
}

impl Pipeline<'static> {
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            scorer: SentimentScorer::from_config(config),
            clusterer: TopicClusterer::from_config(config),
        }
    }
}

impl Default for Pipeline<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Pipeline<'a> {
    pub fn run_texts<I, S>(&self, texts: I, n_topics: usize) -> PipelineOutput
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let comments = texts.into_iter()
            .map(|text| Comment::builder().text(text.map(Into::<String>::into)).build())
            .collect();

        self.run(comments, n_topics)
    }

    pub fn run(&self, comments: Vec<Comment>, n_topics: usize) -> PipelineOutput {
        info!("analyzing {} comments", comments.len());

        let cleaned: Vec<String> = comments.iter().map(|c| normalize(c.text())).collect();

        let mut progress = Progress::new("scoring comments".to_owned());
        let sentiments: Vec<SentimentResult> = cleaned.iter()
            .map(|text| {
                let result = self.scorer.score(text);
                progress.update();
                result
            })
            .collect();
        progress.finish();

        let batch = ClusteringBatch::from_cleaned(&cleaned);
        let clustering = self.clusterer.cluster(batch.texts(), n_topics);
        let topic_clusters = match &clustering {
            TopicClustering::Clustered(model) => {
                info!("found {} topics across {} comments", model.n_topics(), batch.len());
                batch.scatter(model.assignments())
            },
            TopicClustering::NoResult(reason) => {
                warn!("not enough data for topic modeling: {}", reason);
                batch.unassigned()
            },
        };

        let comments = comments.into_iter()
            .zip(cleaned)
            .zip(sentiments)
            .zip(topic_clusters)
            .map(|(((comment, clean_text), sentiment), topic_cluster)| AnalyzedComment::builder()
                .comment(comment)
                .clean_text(clean_text)
                .sentiment(sentiment)
                .topic_cluster(topic_cluster)
                .build())
            .collect();

        PipelineOutput {
            comments,
            clustering,
        }
    }
}

impl PipelineOutput {
    pub fn comments(&self) -> &[AnalyzedComment] {
        &self.comments
    }

    pub fn clustering(&self) -> &TopicClustering {
        &self.clustering
    }

    /// Empty when topic modelling produced no result.
    pub fn topics(&self) -> &[TopicDescriptor] {
        self.clustering.model().map(|model| model.topics()).unwrap_or(&[])
    }

    pub fn topic_clusters(&self) -> Vec<i32> {
        self.comments.iter().map(|c| c.topic_cluster()).collect()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::entity::SentimentLabel,
    };

    #[test]
    fn empty_comments_are_neutral_and_unassigned() {
        let output = Pipeline::new().run_texts(vec![
            Some("battery drains fast"),
            None,
            Some("!!!"),
            Some("shipping took weeks"),
        ], 2);

        let topics = output.topic_clusters();
        assert_eq!(topics[1], -1);
        assert_eq!(topics[2], -1);
        assert!(topics[0] >= 0 && topics[3] >= 0);

        let skipped = &output.comments()[2];
        assert_eq!(skipped.clean_text(), "");
        assert_eq!(skipped.sentiment().label(), SentimentLabel::Neutral);
    }

    #[test]
    fn too_little_data_keeps_sentiment() {
        let output = Pipeline::new().run_texts(vec![Some("I love it"), Some("")], 2);

        assert!(!output.clustering().is_clustered());
        assert!(output.topics().is_empty());
        assert_eq!(output.topic_clusters(), vec![-1, -1]);
        assert_eq!(output.comments()[0].sentiment().label(), SentimentLabel::Positive);
    }
}
