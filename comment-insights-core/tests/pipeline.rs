use comment_insights_core::{
    cluster,
    normalize,
    score,
    entity::{Comment, SentimentLabel},
    insights::Insights,
    reconcile::ClusteringBatch,
    Pipeline,
    TopicClusterer,
    TopicClustering,
    NoTopicsReason,
};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn end_to_end_scenario() {
    let output = Pipeline::new().run_texts(vec![
        Some("I love this product!"),
        Some("Terrible, never buying again."),
        Some("It's okay I guess."),
    ], 2);

    let labels: Vec<SentimentLabel> = output.comments().iter().map(|c| c.sentiment().label()).collect();
    assert_eq!(labels, vec![SentimentLabel::Positive, SentimentLabel::Negative, SentimentLabel::Neutral]);

    let scores: Vec<f64> = output.comments().iter().map(|c| c.sentiment().score()).collect();
    assert!(scores[0] > 0.1);
    assert!(scores[1] < -0.1);
    assert!((-0.1..=0.1).contains(&scores[2]));

    assert!(output.clustering().is_clustered());
    assert_eq!(output.topics().len(), 2);
    assert!(output.topic_clusters().iter().all(|id| *id == 0 || *id == 1));
    assert_eq!(output.topic_clusters().len(), 3);
}

#[test]
fn reconciliation_scatters_batch_ids() {
    let cleaned: Vec<String> = ["great!", "", "bad product"].iter().map(|v| normalize(Some(*v))).collect();
    let batch = ClusteringBatch::from_cleaned(&cleaned);

    assert_eq!(batch.texts(), &["great", "bad product"]);
    assert_eq!(batch.scatter(&[1, 0]), vec![1, -1, 0]);
}

#[test]
fn refiltering_reproduces_assignment() {
    let cleaned: Vec<String> = [
        "Battery dies after an hour",
        "",
        "Shipping took three weeks",
        "@brand",
        "battery swelling after update",
        "shipping box arrived crushed",
    ].iter().map(|v| normalize(Some(*v))).collect();

    let first = ClusteringBatch::from_cleaned(&cleaned);
    let second = ClusteringBatch::from_cleaned(&cleaned);

    let first_ids = first.scatter(cluster(first.texts(), 2).model().unwrap().assignments());
    let second_ids = second.scatter(cluster(second.texts(), 2).model().unwrap().assignments());

    assert_eq!(first_ids, second_ids);
    assert_eq!(first_ids[1], -1);
    assert_eq!(first_ids[3], -1);
}

#[test]
fn clustering_is_stable_for_a_fixed_seed() {
    let texts = owned(&[
        "camera quality is stunning",
        "camera zoom is blurry",
        "price is too high",
        "overpriced for what you get",
        "customer support never answered",
        "support chat was rude",
    ]);

    let clusterer = TopicClusterer::new().seed(7);
    let first = clusterer.cluster(&texts, 3);
    let second = clusterer.cluster(&texts, 3);

    assert_eq!(first, second);
    let model = first.model().unwrap();
    assert_eq!(model.assignments().len(), texts.len());
    assert!(model.assignments().iter().all(|id| *id < 3));
    assert_eq!(model.topics().len(), 3);
}

#[test]
fn degenerate_batches_have_no_result() {
    assert_eq!(cluster(&[], 2), TopicClustering::NoResult(NoTopicsReason::EmptyInput));
    assert_eq!(
        cluster(&owned(&["and the", "it is", "was were"]), 2),
        TopicClustering::NoResult(NoTopicsReason::EmptyVocabulary)
    );
}

#[test]
fn normalizer_and_scorer_defaults() {
    let cleaned = normalize(Some("Check http://a.co @bob #great!!"));
    assert!(!cleaned.contains("http") && !cleaned.contains("@bob") && !cleaned.contains("#great"));
    assert_eq!(normalize(Some(cleaned.as_str())), cleaned);

    let empty = score("");
    assert_eq!(empty.score(), 0.0);
    assert_eq!(empty.label(), SentimentLabel::Neutral);
}

#[test]
fn insights_from_a_run() {
    let comments = vec![
        Comment::builder().text("Battery died in two hours, terrible".to_owned()).platform("YouTube".to_owned()).build(),
        Comment::builder().text("battery is awful and the charger is bad".to_owned()).build(),
        Comment::builder().text("Love the camera, amazing photos".to_owned()).build(),
        Comment::builder().text("camera photos look great".to_owned()).build(),
        Comment::default(),
    ];

    let output = Pipeline::new().run(comments, 2);
    let insights = Insights::from_output(&output);

    assert_eq!(insights.overview.total_comments, 5);
    assert_eq!(insights.topics.len(), 2);
    assert_eq!(insights.topics.iter().map(|t| t.comment_count).sum::<usize>(), 4);
    assert!(!insights.recommendations.pain_points.is_empty());
    assert!(!insights.recommendations.working_messaging.is_empty());
    assert_ne!(insights.recommendations.pain_points[0].topic, insights.recommendations.working_messaging[0].topic);
    assert!(insights.keywords.iter().any(|k| k.word == "battery" && k.count == 2));
}
