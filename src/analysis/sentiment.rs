use crate::dataset::FilteredView;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Map a polarity score to its label: positive sign to `Positive`,
    /// negative sign to `Negative`, exactly zero to `Neutral`.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// A deterministic polarity scorer over free text. The pipeline only relies
/// on the sign of the score; the model internals stay behind this trait.
pub trait PolarityModel: Send + Sync {
    fn polarity(&self, text: &str) -> f64;

    fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

/// Word valences for the built-in model. Small on purpose; the trait is the
/// contract, the table is a serviceable default.
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 3.0),
    ("awful", -3.0),
    ("bad", -2.0),
    ("best", 3.0),
    ("blessed", 2.0),
    ("congratulations", 3.0),
    ("corrupt", -3.0),
    ("crisis", -2.0),
    ("defeat", -2.0),
    ("excellent", 3.0),
    ("fail", -2.0),
    ("failure", -2.0),
    ("fantastic", 3.0),
    ("glad", 2.0),
    ("good", 2.0),
    ("grateful", 2.0),
    ("great", 2.0),
    ("happy", 2.0),
    ("historic", 1.0),
    ("honoured", 2.0),
    ("hope", 1.0),
    ("loss", -2.0),
    ("love", 3.0),
    ("poor", -2.0),
    ("pride", 2.0),
    ("progress", 1.0),
    ("prosperity", 2.0),
    ("proud", 2.0),
    ("sad", -2.0),
    ("shame", -2.0),
    ("strong", 1.0),
    ("success", 2.0),
    ("terrible", -3.0),
    ("thank", 1.0),
    ("thanks", 1.0),
    ("tragedy", -3.0),
    ("tribute", 1.0),
    ("victory", 2.0),
    ("welcome", 1.0),
    ("wonderful", 3.0),
    ("worst", -3.0),
    ("wrong", -1.0),
];

/// Lexicon-based scorer: sums the valence of every known word in the text.
/// Unknown words contribute nothing, so texts without lexicon words (the
/// empty string included) score exactly zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconModel;

impl PolarityModel for LexiconModel {
    fn polarity(&self, text: &str) -> f64 {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| valence(&word.to_lowercase()))
            .sum()
    }
}

fn valence(word: &str) -> f64 {
    LEXICON
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, score)| *score)
        .unwrap_or(0.0)
}

/// Label frequency counts over a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Classify every tweet in the view and count the labels.
pub fn distribution(view: &FilteredView, model: &dyn PolarityModel) -> SentimentDistribution {
    let mut counts = SentimentDistribution::default();
    for record in view.iter() {
        counts.record(model.classify(&record.text));
    }
    counts
}
