use crate::entity::UNASSIGNED_TOPIC;

pub struct ClusteringBatch {
    positions: Vec<usize>,
    texts: Vec<String>,
    total: usize,
}

impl ClusteringBatch {
    pub fn from_cleaned(cleaned: &[String]) -> Self {
        let (positions, texts) = cleaned.iter()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(position, text)| (position, text.clone()))
            .unzip();

        Self {
            positions,
            texts,
            total: cleaned.len(),
        }
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    // one id per batch text, anything else is a bug in the clustering stage
    pub fn scatter(&self, ids: &[usize]) -> Vec<i32> {
        assert_eq!(
            ids.len(),
            self.positions.len(),
            "got {} cluster ids for a batch of {} texts",
            ids.len(),
            self.positions.len()
        );

        let mut topics = vec![UNASSIGNED_TOPIC; self.total];
        for (position, id) in self.positions.iter().zip(ids) {
            topics[*position] = *id as i32;
        }
        topics
    }

    pub fn unassigned(&self) -> Vec<i32> {
        vec![UNASSIGNED_TOPIC; self.total]
    }
}
