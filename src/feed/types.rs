use serde::Deserialize;

/// One entry of the `/headlines` response.
///
/// `sentiment` is expected in [-1, 1] and `emotional_intensity` in [0, 1].
/// Either may be missing or `null`; a missing score leaves the matching
/// board indicator untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeadlineRecord {
    pub headline: String,
    #[serde(default)]
    pub sentiment: Option<f64>,
    #[serde(default)]
    pub emotional_intensity: Option<f64>,
}

impl HeadlineRecord {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            sentiment: None,
            emotional_intensity: None,
        }
    }

    pub fn with_scores(headline: impl Into<String>, sentiment: f64, emotional_intensity: f64) -> Self {
        Self {
            headline: headline.into(),
            sentiment: Some(sentiment),
            emotional_intensity: Some(emotional_intensity),
        }
    }

    /// Single stand-in record with neutral scores.
    pub fn placeholder(text: &str) -> Self {
        Self::with_scores(text, 0.0, 0.0)
    }
}
