use {
    anyhow::Result,
    tracing::{info, warn},
    comment_insights_core::{
        config::Config,
        Pipeline,
    },
    crate::{
        data_loading::{load_data_file, filter_platform},
        report::Report,
        utils::init_logging,
    },
};

mod data_loading;
mod report;
mod utils;

fn main() -> Result<()> {
    init_logging();

    info!("brand comment insights");

    let config = Config::load();
    let pipeline_config = config.pipeline();
    let input = config.input();

    let comments = load_data_file(&input.path())?;
    let comments = filter_platform(comments, input.platform());
    if comments.is_empty() {
        warn!("no comments to analyze");
    }

    let output = Pipeline::from_config(&pipeline_config).run(comments, pipeline_config.n_topics);

    let report = Report::new(&output, config.output().sentiment());
    report.log();

    if let Some(path) = config.output().path() {
        report.save(path)?;
    }

    Ok(())
}
