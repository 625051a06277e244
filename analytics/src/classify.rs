//! Sentiment classification over a swappable polarity capability.

use socialscope_core::SentimentLabel;
use std::collections::{HashMap, HashSet};

/// The capability a classifier must provide: a polarity score in [-1, 1]
/// for a text span. Any implementation honoring this contract is
/// substitutable without touching the aggregator.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> f64;
}

/// Classify a text with the given scorer. Strictly positive polarity maps
/// to Positive, strictly negative to Negative, zero to Neutral — so empty
/// or non-linguistic text lands on Neutral rather than failing.
pub fn classify(scorer: &dyn PolarityScorer, text: &str) -> SentimentLabel {
    SentimentLabel::from_polarity(scorer.polarity(text))
}

/// Rule-based reference scorer: a word lexicon with negation flipping and
/// intensifier scaling. Scores are the mean of matched word scores,
/// clamped to [-1, 1]; a text with no lexicon hits scores 0.0.
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    negations: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let mut words = HashMap::new();

        let positive_words = [
            ("love", 0.8),
            ("loved", 0.7),
            ("great", 0.7),
            ("good", 0.5),
            ("happy", 0.6),
            ("amazing", 0.8),
            ("awesome", 0.8),
            ("excellent", 0.8),
            ("best", 0.7),
            ("wonderful", 0.7),
            ("fantastic", 0.8),
            ("beautiful", 0.6),
            ("perfect", 0.8),
            ("nice", 0.5),
            ("enjoy", 0.6),
            ("enjoyed", 0.6),
            ("fun", 0.5),
            ("cool", 0.4),
            ("like", 0.4),
            ("glad", 0.5),
            ("thanks", 0.4),
            ("recommend", 0.6),
            ("impressive", 0.6),
            ("win", 0.5),
            ("winning", 0.5),
        ];

        let negative_words = [
            ("hate", -0.8),
            ("hated", -0.7),
            ("bad", -0.6),
            ("awful", -0.8),
            ("terrible", -0.8),
            ("horrible", -0.8),
            ("worst", -0.8),
            ("worse", -0.6),
            ("sad", -0.6),
            ("angry", -0.6),
            ("annoying", -0.6),
            ("boring", -0.5),
            ("broken", -0.5),
            ("disappointing", -0.7),
            ("disappointed", -0.7),
            ("ugly", -0.6),
            ("stupid", -0.7),
            ("useless", -0.7),
            ("wrong", -0.4),
            ("problem", -0.5),
            ("fail", -0.7),
            ("failed", -0.7),
            ("scam", -0.9),
            ("dislike", -0.6),
            ("garbage", -0.8),
        ];

        for (word, score) in positive_words {
            words.insert(word.to_string(), score);
        }
        for (word, score) in negative_words {
            words.insert(word.to_string(), score);
        }

        let negations = [
            "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot", "cant",
            "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont", "isn't",
            "isnt", "aren't", "arent", "wasn't", "wasnt", "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.5);
        intensifiers.insert("extremely".to_string(), 2.0);
        intensifiers.insert("really".to_string(), 1.4);
        intensifiers.insert("so".to_string(), 1.3);
        intensifiers.insert("totally".to_string(), 1.5);
        intensifiers.insert("absolutely".to_string(), 1.8);
        intensifiers.insert("slightly".to_string(), 0.5);
        intensifiers.insert("somewhat".to_string(), 0.7);
        intensifiers.insert("kinda".to_string(), 0.6);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Add or override a lexicon entry.
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.words.insert(word.to_lowercase(), score);
    }

    fn score(&self, text: &str) -> f64 {
        let mut scores: Vec<f64> = Vec::new();
        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for word in text.split_whitespace() {
            let word_lower = word.to_lowercase();

            if self.negations.contains(&word_lower) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(&word_lower) {
                intensifier = *mult;
                continue;
            }

            if let Some(mut score) = self.words.get(&word_lower).copied() {
                if negate_next {
                    score = -score;
                    negate_next = false;
                }
                score *= intensifier;
                intensifier = 1.0;
                scores.push(score);
            } else {
                // An unmatched word breaks negation/intensifier chains.
                negate_next = false;
                intensifier = 1.0;
            }
        }

        if scores.is_empty() {
            0.0
        } else {
            (scores.iter().sum::<f64>() / scores.len() as f64).clamp(-1.0, 1.0)
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.score(text)
    }
}
