use {
    std::collections::{BTreeMap, HashMap, HashSet},
    once_cell::sync::Lazy,
    regex::Regex,
    ndarray::Array2,
    tracing::debug,
    crate::stopwords::StopWords,
};

// tokens are runs of at least two word characters
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Term-frequency / inverse-document-frequency features over a capped vocabulary.
pub struct TfIdfVectorizer<'a> {
    stop_words: &'a StopWords,
    max_features: usize,
}

pub struct TfIdfMatrix {
    vocabulary: Vec<String>,
    weights: Array2<f64>,
}

impl<'a> TfIdfVectorizer<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self {
            stop_words,
            max_features: 1000,
        }
    }

    pub fn max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        TOKEN.find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .filter(|token| !self.stop_words.contains(token.as_str()))
            .collect()
    }

    /// `None` when no term survives tokenization and stopword removal.
    pub fn fit_transform(&self, texts: &[String]) -> Option<TfIdfMatrix> {
        let documents: Vec<Vec<String>> = texts.iter().map(|text| self.tokenize(text)).collect();

        let mut term_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut document_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for document in &documents {
            for token in document {
                *term_counts.entry(token.as_str()).or_insert(0) += 1;
            }
            let unique: HashSet<&str> = document.iter().map(|v| v.as_str()).collect();
            for token in unique {
                *document_counts.entry(token).or_insert(0) += 1;
            }
        }

        let vocabulary = self.select_vocabulary(term_counts);
        if vocabulary.is_empty() {
            debug!("vocabulary is empty after stopword removal");
            return None;
        }

        let index: HashMap<&str, usize> = vocabulary.iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let n_documents = documents.len() as f64;
        let idf: Vec<f64> = vocabulary.iter()
            .map(|term| {
                let df = document_counts.get(term.as_str()).copied().unwrap_or(0) as f64;
                ((1.0 + n_documents) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let mut weights = Array2::<f64>::zeros((documents.len(), vocabulary.len()));
        for (row, document) in documents.iter().enumerate() {
            for token in document {
                if let Some(column) = index.get(token.as_str()) {
                    weights[[row, *column]] += 1.0;
                }
            }

            let mut row = weights.row_mut(row);
            row.iter_mut().zip(idf.iter()).for_each(|(w, idf)| *w *= idf);

            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|w| w / norm);
            }
        }

        debug!("vectorized {} documents over {} terms", documents.len(), vocabulary.len());

        Some(TfIdfMatrix {
            vocabulary,
            weights,
        })
    }

    // most frequent terms win the cap, the kept vocabulary is in lexical order
    fn select_vocabulary(&self, term_counts: BTreeMap<&str, usize>) -> Vec<String> {
        let mut terms: Vec<(&str, usize)> = term_counts.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(self.max_features);

        let mut vocabulary: Vec<String> = terms.into_iter().map(|(term, _)| term.to_owned()).collect();
        vocabulary.sort();
        vocabulary
    }
}

impl TfIdfMatrix {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn n_documents(&self) -> usize {
        self.weights.nrows()
    }

    pub fn distinct_rows(&self) -> usize {
        self.weights.rows()
            .into_iter()
            .map(|row| row.iter().map(|v| v.to_bits()).collect::<Vec<u64>>())
            .collect::<HashSet<_>>()
            .len()
    }
}
