//! The headline presenter: load the list once, then show one random
//! headline per tick until cancelled.

pub mod classify;
pub mod picker;
pub mod schedule;

use crate::feed::types::HeadlineRecord;
use crate::feed::HeadlineFeed;
use crate::tui::state::{BoardState, Phase};
use classify::{classify_mood, classify_sentiment};
use picker::Picker;
use schedule::{CancelToken, Scheduler};
use std::time::Duration;
use tokio::sync::watch;

pub const NO_HEADLINES_TEXT: &str = "No headlines found. Please check back later.";
pub const FETCH_ERROR_TEXT: &str = "Error fetching headlines.";
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(6000);

/// How the working list was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Empty,
    Failed,
}

impl LoadOutcome {
    pub fn describe(&self) -> String {
        match self {
            LoadOutcome::Loaded(n) => format!("{} headlines", n),
            LoadOutcome::Empty => "no headlines".to_string(),
            LoadOutcome::Failed => "fetch failed".to_string(),
        }
    }
}

pub struct Presenter<P> {
    headlines: Vec<HeadlineRecord>,
    picker: P,
    state_tx: watch::Sender<BoardState>,
    interval: Duration,
}

impl<P: Picker> Presenter<P> {
    pub fn new(picker: P, state_tx: watch::Sender<BoardState>, interval: Duration) -> Self {
        Self {
            headlines: Vec::new(),
            picker,
            state_tx,
            interval,
        }
    }

    pub fn headlines(&self) -> &[HeadlineRecord] {
        &self.headlines
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch the list once. Failures are logged and replaced by a
    /// placeholder record; the board always ends up cycling.
    pub async fn initialize(&mut self, feed: &dyn HeadlineFeed) -> LoadOutcome {
        let outcome = match feed.fetch_headlines().await {
            Ok(records) if records.is_empty() => {
                tracing::warn!("headline feed returned no records");
                self.headlines = vec![HeadlineRecord::placeholder(NO_HEADLINES_TEXT)];
                LoadOutcome::Empty
            }
            Ok(records) => {
                let count = records.len();
                tracing::info!(count, "headlines loaded");
                self.headlines = records;
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "error fetching headlines");
                self.headlines = vec![HeadlineRecord::placeholder(FETCH_ERROR_TEXT)];
                LoadOutcome::Failed
            }
        };

        self.state_tx.send_modify(|s| {
            s.outcome = Some(outcome);
            s.phase = Phase::Cycling;
            let level = if outcome == LoadOutcome::Failed { "ERROR" } else { "INFO" };
            s.push_log(level, format!("Loaded: {}", outcome.describe()));
        });

        outcome
    }

    /// Show one randomly chosen headline. Returns the chosen index, or
    /// `None` if nothing has been loaded yet.
    pub fn present_next(&mut self) -> Option<usize> {
        if self.headlines.is_empty() {
            return None;
        }
        let index = self.picker.pick(self.headlines.len());
        let record = &self.headlines[index];

        self.state_tx.send_modify(|s| {
            s.headline.clone_from(&record.headline);
            if let Some(intensity) = record.emotional_intensity {
                s.mood = Some(classify_mood(intensity));
            }
            if let Some(sentiment) = record.sentiment {
                s.sentiment = Some(classify_sentiment(sentiment));
            }
            s.presented += 1;
        });

        tracing::debug!(index, headline = %record.headline, "presented headline");
        Some(index)
    }

    /// Present, wait `interval`, repeat until `cancel` fires. While the
    /// board is paused ticks still elapse but nothing is presented.
    pub async fn run<S: Scheduler>(&mut self, scheduler: &mut S, cancel: &CancelToken) {
        loop {
            if cancel.is_cancelled() {
                break;
            }
            if !self.state_tx.borrow().is_paused {
                self.present_next();
            }
            tokio::select! {
                _ = scheduler.sleep(self.interval) => {}
                _ = cancel.cancelled() => break,
            }
        }
        tracing::info!("presentation loop stopped");
    }

    /// Initialize, then run. Cancelling while the fetch is still pending
    /// abandons it and leaves the board in `Loading`.
    pub async fn start<S: Scheduler>(
        &mut self,
        feed: &dyn HeadlineFeed,
        scheduler: &mut S,
        cancel: &CancelToken,
    ) {
        tokio::select! {
            _ = self.initialize(feed) => {}
            _ = cancel.cancelled() => {
                tracing::info!("cancelled while loading headlines");
                return;
            }
        }
        self.run(scheduler, cancel).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::classify::{Mood, SentimentLabel};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<usize>);

    impl Picker for Scripted {
        fn pick(&mut self, len: usize) -> usize {
            self.0.pop_front().unwrap_or(0) % len
        }
    }

    struct FixedFeed(Vec<HeadlineRecord>);

    #[async_trait]
    impl HeadlineFeed for FixedFeed {
        async fn fetch_headlines(&self) -> Result<Vec<HeadlineRecord>> {
            Ok(self.0.clone())
        }
    }

    fn presenter(picks: &[usize]) -> (Presenter<Scripted>, watch::Receiver<BoardState>) {
        let (tx, rx) = watch::channel(BoardState::new());
        let p = Presenter::new(Scripted(picks.iter().copied().collect()), tx, DEFAULT_INTERVAL);
        (p, rx)
    }

    #[test]
    fn test_present_before_initialize_is_noop() {
        let (mut p, rx) = presenter(&[]);
        assert_eq!(p.present_next(), None);
        assert_eq!(rx.borrow().presented, 0);
        assert_eq!(rx.borrow().phase, Phase::Loading);
    }

    #[tokio::test]
    async fn test_present_replaces_text_and_sets_indicators() {
        let (mut p, rx) = presenter(&[1, 0]);
        let feed = FixedFeed(vec![
            HeadlineRecord::with_scores("calm one", -0.3, 0.1),
            HeadlineRecord::with_scores("wild one", 0.9, 0.95),
        ]);
        p.initialize(&feed).await;

        assert_eq!(p.present_next(), Some(1));
        {
            let s = rx.borrow();
            assert_eq!(s.headline, "wild one");
            assert_eq!(s.mood, Some(Mood::Stormy));
            assert_eq!(s.sentiment, Some(SentimentLabel::Positive));
        }

        assert_eq!(p.present_next(), Some(0));
        let s = rx.borrow();
        assert_eq!(s.headline, "calm one");
        assert_eq!(s.mood, Some(Mood::Sunny));
        assert_eq!(s.sentiment, Some(SentimentLabel::Negative));
        assert_eq!(s.presented, 2);
    }

    #[tokio::test]
    async fn test_missing_scores_keep_previous_indicators() {
        let (mut p, rx) = presenter(&[0, 1]);
        let feed = FixedFeed(vec![
            HeadlineRecord::with_scores("scored", 0.0, 0.5),
            HeadlineRecord::new("unscored"),
        ]);
        p.initialize(&feed).await;
        p.present_next();
        p.present_next();

        let s = rx.borrow();
        assert_eq!(s.headline, "unscored");
        assert_eq!(s.mood, Some(Mood::Cloudy));
        assert_eq!(s.sentiment, Some(SentimentLabel::Neutral));
    }

    #[tokio::test]
    async fn test_unscored_first_record_leaves_indicators_unset() {
        let (mut p, rx) = presenter(&[0]);
        p.initialize(&FixedFeed(vec![HeadlineRecord::new("plain")])).await;
        p.present_next();
        let s = rx.borrow();
        assert_eq!(s.headline, "plain");
        assert!(s.mood.is_none());
        assert!(s.sentiment.is_none());
    }
}
