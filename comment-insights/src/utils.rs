use {
    tracing::Level,
    tracing_subscriber::{prelude::*, filter::filter_fn},
};

pub fn init_logging() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish()
        .with(filter_fn(|metadata| {
            // per-stage detail from the core crate is useful, everything else stays at info
            if metadata.target().starts_with("comment_insights") {
                true
            } else {
                metadata.level() <= &Level::INFO
            }
        }))
        .init();
}
