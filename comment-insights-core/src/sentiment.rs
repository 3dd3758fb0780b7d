use {
    std::collections::{HashMap, HashSet},
    once_cell::sync::Lazy,
    crate::{
        config::PipelineConfig,
        entity::{SentimentLabel, SentimentResult},
    },
};

const NEGATION_FACTOR: f64 = -0.5;
// a negation only reaches a polar word this many tokens ahead
const NEGATION_WINDOW: usize = 3;

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("amazing", 0.6), ("awesome", 1.0), ("beautiful", 0.85), ("best", 1.0),
        ("better", 0.5), ("brilliant", 0.9), ("cheap", 0.2), ("clean", 0.37),
        ("comfortable", 0.4), ("cool", 0.35), ("cute", 0.5), ("delicious", 1.0),
        ("delighted", 0.7), ("easy", 0.43), ("enjoy", 0.4), ("enjoyed", 0.4),
        ("excellent", 1.0), ("excited", 0.4), ("fabulous", 0.9), ("fantastic", 0.4),
        ("fast", 0.2), ("favorite", 0.5), ("favourite", 0.5), ("fine", 0.42),
        ("fun", 0.3), ("glad", 0.5), ("good", 0.7), ("gorgeous", 0.7),
        ("great", 0.8), ("happy", 0.8), ("helpful", 0.5), ("impressed", 0.6),
        ("impressive", 0.8), ("incredible", 0.9), ("interesting", 0.5), ("like", 0.2),
        ("liked", 0.3), ("love", 0.5), ("loved", 0.7), ("lovely", 0.5),
        ("loving", 0.6), ("nice", 0.6), ("ok", 0.05), ("okay", 0.05),
        ("outstanding", 0.9), ("perfect", 1.0), ("pleased", 0.5), ("positive", 0.23),
        ("quick", 0.33), ("recommend", 0.4), ("recommended", 0.4), ("reliable", 0.5),
        ("satisfied", 0.5), ("smooth", 0.4), ("solid", 0.3), ("stunning", 0.8),
        ("super", 0.33), ("superb", 1.0), ("thank", 0.3), ("thanks", 0.3),
        ("top", 0.5), ("useful", 0.3), ("valuable", 0.5), ("win", 0.8),
        ("wonderful", 1.0), ("worth", 0.3), ("wow", 0.1),
        // negative
        ("angry", -0.5), ("annoyed", -0.4), ("annoying", -0.6), ("awful", -1.0),
        ("bad", -0.7), ("boring", -1.0), ("broke", -0.4), ("broken", -0.4),
        ("buggy", -0.5), ("complicated", -0.4), ("confusing", -0.4), ("crap", -0.8),
        ("disappointed", -0.75), ("disappointing", -0.6), ("dislike", -0.5), ("disgusting", -1.0),
        ("dumb", -0.375), ("expensive", -0.5), ("fail", -0.5), ("failed", -0.5),
        ("fake", -0.5), ("frustrated", -0.7), ("frustrating", -0.4), ("garbage", -0.8),
        ("hate", -0.8), ("hated", -0.9), ("horrible", -1.0), ("lame", -0.5),
        ("late", -0.3), ("mediocre", -0.3), ("overpriced", -0.6), ("pathetic", -1.0),
        ("poor", -0.4), ("rude", -0.6), ("sad", -0.5), ("scam", -0.9),
        ("slow", -0.3), ("stupid", -0.8), ("terrible", -1.0), ("trash", -0.8),
        ("ugly", -0.7), ("unhappy", -0.6), ("useless", -0.5), ("waste", -0.6),
        ("weak", -0.375), ("worse", -0.4), ("worst", -1.0), ("wrong", -0.5),
    ].into_iter().collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("absolutely", 1.5), ("completely", 1.4), ("especially", 1.3), ("extremely", 1.5),
        ("highly", 1.3), ("incredibly", 1.5), ("pretty", 1.1), ("quite", 1.1),
        ("really", 1.3), ("so", 1.3), ("super", 1.3), ("totally", 1.4),
        ("truly", 1.3), ("very", 1.3),
    ].into_iter().collect()
});

static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "cannot", "cant", "didnt", "doesnt", "dont", "isnt", "never", "no", "nor", "not",
        "wasnt", "wont", "wouldnt",
    ].into_iter().collect()
});

/// Anything that turns cleaned tokens into a polarity in `[-1.0, 1.0]`.
pub trait PolarityModel {
    fn polarity(&self, tokens: &[&str]) -> f64;
}

/// Averages word polarities from a fixed lexicon. Intensifiers scale the polar word that
/// directly follows them, negations invert and damp the next polar word in range.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexiconModel;

pub struct SentimentScorer<M = LexiconModel> {
    model: M,
    positive_threshold: f64,
    negative_threshold: f64,
}

impl PolarityModel for LexiconModel {
    fn polarity(&self, tokens: &[&str]) -> f64 {
        let mut total = 0.0;
        let mut polar_words = 0;

        let mut intensity: Option<f64> = None;
        let mut negated_at: Option<usize> = None;

        for (position, token) in tokens.iter().enumerate() {
            if NEGATIONS.contains(token) {
                negated_at = Some(position);
                intensity = None;
                continue;
            }

            // "super" is both; before another word it intensifies
            if let Some(factor) = INTENSIFIERS.get(token) {
                if position + 1 < tokens.len() {
                    intensity = Some(*factor);
                    continue;
                }
            }

            let polarity = match LEXICON.get(token) {
                Some(v) => *v,
                None => {
                    intensity = None;
                    continue;
                }
            };

            let mut polarity = polarity * intensity.take().unwrap_or(1.0);
            if negated_at.take().filter(|at| position - at <= NEGATION_WINDOW).is_some() {
                polarity *= NEGATION_FACTOR;
            }

            total += polarity.clamp(-1.0, 1.0);
            polar_words += 1;
        }

        if polar_words == 0 {
            0.0
        } else {
            total / polar_words as f64
        }
    }
}

impl SentimentScorer<LexiconModel> {
    pub fn new() -> Self {
        Self::with_model(LexiconModel)
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new().thresholds(config.positive_threshold, config.negative_threshold)
    }
}

impl Default for SentimentScorer<LexiconModel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: PolarityModel> SentimentScorer<M> {
    pub fn with_model(model: M) -> Self {
        Self {
            model,
            positive_threshold: 0.1,
            negative_threshold: -0.1,
        }
    }

    pub fn thresholds(mut self, positive: f64, negative: f64) -> Self {
        self.positive_threshold = positive;
        self.negative_threshold = negative;
        self
    }

    pub fn score(&self, cleaned: &str) -> SentimentResult {
        if cleaned.is_empty() {
            return SentimentResult::neutral();
        }

        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        let score = self.model.polarity(&tokens);
        let score = if score.is_finite() { score.clamp(-1.0, 1.0) } else { 0.0 };

        SentimentResult::new(score, SentimentLabel::from_score(score, self.positive_threshold, self.negative_threshold))
    }
}

pub fn score(cleaned: &str) -> SentimentResult {
    SentimentScorer::new().score(cleaned)
}
