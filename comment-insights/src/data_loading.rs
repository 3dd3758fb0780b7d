use {
    std::{fs::File, io::Read},
    anyhow::{anyhow, Context, Result},
    serde::Deserialize,
    tracing::info,
    comment_insights_core::entity::Comment,
};

pub const TEXT_COLUMN: &str = "comment_text";

#[derive(Deserialize, Debug)]
pub struct RawDataEntry {
    comment_text: Option<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    likes: Option<u64>,
}

pub fn load_data_file(path: &str) -> Result<Vec<Comment>> {
    info!("loading file: {}", path);

    let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
    let comments = load_comments(file).with_context(|| format!("failed to load comments from {}", path))?;

    info!("loaded {} comments", comments.len());
    Ok(comments)
}

pub fn load_comments<R: Read>(reader: R) -> Result<Vec<Comment>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    if !headers.iter().any(|v| v == TEXT_COLUMN) {
        return Err(anyhow!("csv must contain a '{}' column", TEXT_COLUMN));
    }

    let mut comments = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let entry: RawDataEntry = record?
            .deserialize(Some(&headers))
            .with_context(|| format!("malformed row {}", line + 1))?;

        comments.push(Comment::builder()
            .text(entry.comment_text)
            .platform(entry.platform)
            .timestamp(entry.timestamp.or(entry.published_at))
            .likes(entry.likes)
            .build());
    }

    Ok(comments)
}

/// Keeps comments whose platform mentions the first word of `platform`, ignoring case.
pub fn filter_platform(comments: Vec<Comment>, platform: Option<&str>) -> Vec<Comment> {
    let needle = match platform.and_then(|v| v.split_whitespace().next()) {
        Some(v) => v.to_lowercase(),
        None => return comments,
    };

    let before = comments.len();
    let comments: Vec<Comment> = comments.into_iter()
        .filter(|c| c.platform().map(|v| v.to_lowercase().contains(&needle)).unwrap_or(false))
        .collect();

    info!("platform filter '{}' kept {} of {} comments", needle, comments.len(), before);
    comments
}
