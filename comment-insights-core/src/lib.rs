pub mod clustering;
pub mod config;
pub mod entity;
pub mod insights;
pub mod normalizer;
pub mod pipeline;
pub mod progress;
pub mod reconcile;
pub mod sentiment;
pub mod stopwords;
pub mod vectorizer;

pub use {
    clustering::{cluster, NoTopicsReason, TopicClusterer, TopicClustering, TopicModel},
    normalizer::normalize,
    pipeline::{Pipeline, PipelineOutput},
    sentiment::score,
};
