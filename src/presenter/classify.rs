//! Map headline scores onto the board's visual states.

/// Page-level background mood, driven by emotional intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Rainstorm with lightning.
    Stormy,
    Cloudy,
    Sunny,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Stormy => "Stormy",
            Mood::Cloudy => "Cloudy",
            Mood::Sunny => "Sunny",
        }
    }
}

/// Text and state of the sentiment indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

pub const STORMY_INTENSITY: f64 = 0.7;
pub const CLOUDY_INTENSITY: f64 = 0.4;
pub const SENTIMENT_THRESHOLD: f64 = 0.05;

/// Intensity runs from 0 (calm) to 1 (intense). NaN lands on Sunny.
pub fn classify_mood(intensity: f64) -> Mood {
    if intensity >= STORMY_INTENSITY {
        Mood::Stormy
    } else if intensity >= CLOUDY_INTENSITY {
        Mood::Cloudy
    } else {
        Mood::Sunny
    }
}

/// Sentiment runs from -1 (negative) to +1 (positive).
pub fn classify_sentiment(sentiment: f64) -> SentimentLabel {
    if sentiment >= SENTIMENT_THRESHOLD {
        SentimentLabel::Positive
    } else if sentiment <= -SENTIMENT_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
