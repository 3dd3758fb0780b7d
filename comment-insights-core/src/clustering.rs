use {
    std::cmp::Ordering,
    thiserror::Error,
    tracing::{info, debug},
    ndarray::{Array1, ArrayView1},
    linfa::{DatasetBase, traits::{Fit, Predict}},
    linfa_clustering::KMeans,
    rand_xoshiro::{Xoshiro256Plus, rand_core::SeedableRng},
    crate::{
        config::{PipelineConfig, MIN_TOPICS},
        entity::TopicDescriptor,
        stopwords::{self, StopWords},
        vectorizer::{TfIdfVectorizer, TfIdfMatrix},
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoTopicsReason {
    #[error("no texts to cluster")]
    EmptyInput,
    #[error("at least 2 topics are required, got {0}")]
    TooFewTopics(usize),
    #[error("{n_topics} topics requested for only {n_texts} texts")]
    TooManyTopics { n_topics: usize, n_texts: usize },
    #[error("vocabulary is empty after stopword removal")]
    EmptyVocabulary,
    #[error("only {distinct} distinct texts for {n_topics} topics")]
    NotEnoughDistinctTexts { distinct: usize, n_topics: usize },
    #[error("clustering failed: {0}")]
    Clustering(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TopicClustering {
    Clustered(TopicModel),
    NoResult(NoTopicsReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicModel {
    assignments: Vec<usize>,
    topics: Vec<TopicDescriptor>,
}

pub struct TopicClusterer<'a> {
    stop_words: &'a StopWords,
    max_features: usize,
    top_keywords: usize,
    n_runs: usize,
    max_iterations: u64,
    tolerance: f64,
    seed: u64,
}

impl TopicClusterer<'static> {
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            stop_words: stopwords::english(),
            max_features: config.max_features,
            top_keywords: config.top_keywords,
            n_runs: config.n_runs,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            seed: config.seed,
        }
    }
}

impl Default for TopicClusterer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TopicClusterer<'a> {
    pub fn with_stop_words<'b>(self, stop_words: &'b StopWords) -> TopicClusterer<'b> {
        TopicClusterer {
            stop_words,
            max_features: self.max_features,
            top_keywords: self.top_keywords,
            n_runs: self.n_runs,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            seed: self.seed,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn cluster(&self, texts: &[String], n_topics: usize) -> TopicClustering {
        match self.try_cluster(texts, n_topics) {
            Ok(model) => TopicClustering::Clustered(model),
            Err(reason) => {
                debug!("no topics: {}", reason);
                TopicClustering::NoResult(reason)
            },
        }
    }

    fn try_cluster(&self, texts: &[String], n_topics: usize) -> Result<TopicModel, NoTopicsReason> {
        if texts.is_empty() {
            return Err(NoTopicsReason::EmptyInput);
        }
        if n_topics < MIN_TOPICS {
            return Err(NoTopicsReason::TooFewTopics(n_topics));
        }
        if n_topics > texts.len() {
            return Err(NoTopicsReason::TooManyTopics { n_topics, n_texts: texts.len() });
        }

        let matrix = TfIdfVectorizer::new(self.stop_words)
            .max_features(self.max_features)
            .fit_transform(texts)
            .ok_or(NoTopicsReason::EmptyVocabulary)?;

        if matrix.weights().iter().any(|w| !w.is_finite()) {
            return Err(NoTopicsReason::Clustering("feature matrix has non-finite weights".to_owned()));
        }

        // k-means++ cannot seed more centroids than there are distinct points
        let distinct = matrix.distinct_rows();
        if distinct < n_topics {
            return Err(NoTopicsReason::NotEnoughDistinctTexts { distinct, n_topics });
        }

        info!("clustering {} texts over {} terms into {} topics", matrix.n_documents(), matrix.vocabulary().len(), n_topics);

        let dataset = DatasetBase::from(matrix.weights().clone());
        let model = KMeans::params_with_rng(n_topics, Xoshiro256Plus::seed_from_u64(self.seed))
            .n_runs(self.n_runs)
            .max_n_iterations(self.max_iterations)
            .tolerance(self.tolerance)
            .fit(&dataset)
            .map_err(|err| NoTopicsReason::Clustering(err.to_string()))?;

        let assignments: Array1<usize> = model.predict(dataset.records());
        let topics = model.centroids()
            .rows()
            .into_iter()
            .enumerate()
            .map(|(topic, centroid)| TopicDescriptor::new(topic, self.top_terms(&matrix, centroid)))
            .collect();

        Ok(TopicModel::new(assignments.to_vec(), topics))
    }

    fn top_terms(&self, matrix: &TfIdfMatrix, centroid: ArrayView1<f64>) -> Vec<String> {
        let mut order: Vec<usize> = (0..centroid.len()).collect();
        order.sort_by(|a, b| centroid[*b].partial_cmp(&centroid[*a]).unwrap_or(Ordering::Equal).then(a.cmp(b)));

        order.into_iter()
            .take(self.top_keywords)
            .map(|i| matrix.vocabulary()[i].clone())
            .collect()
    }
}

impl TopicModel {
    pub fn new(assignments: Vec<usize>, topics: Vec<TopicDescriptor>) -> Self {
        Self {
            assignments,
            topics,
        }
    }

    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    pub fn topics(&self) -> &[TopicDescriptor] {
        &self.topics
    }

    pub fn n_topics(&self) -> usize {
        self.topics.len()
    }
}

impl TopicClustering {
    pub fn model(&self) -> Option<&TopicModel> {
        match self {
            TopicClustering::Clustered(model) => Some(model),
            TopicClustering::NoResult(_) => None,
        }
    }

    pub fn is_clustered(&self) -> bool {
        self.model().is_some()
    }
}

pub fn cluster(texts: &[String], n_topics: usize) -> TopicClustering {
    TopicClusterer::new().cluster(texts, n_topics)
}
