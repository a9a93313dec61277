use crate::presenter::classify::{Mood, SentimentLabel};
use crate::presenter::LoadOutcome;
use std::collections::VecDeque;
use std::time::Instant;

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Cycling,
}

#[derive(Debug, Clone)]
pub struct BoardState {
    pub phase: Phase,
    pub outcome: Option<LoadOutcome>,
    /// The news-cloud text surface.
    pub headline: String,
    pub mood: Option<Mood>,
    pub sentiment: Option<SentimentLabel>,
    pub presented: u64,
    pub start_time: Instant,
    pub is_paused: bool,
    pub logs: VecDeque<LogEntry>,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub message: String,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            outcome: None,
            headline: String::new(),
            mood: None,
            sentiment: None,
            presented: 0,
            start_time: Instant::now(),
            is_paused: false,
            logs: VecDeque::with_capacity(MAX_LOGS),
        }
    }

    pub fn push_log(&mut self, level: &str, message: String) {
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        if self.logs.len() >= MAX_LOGS {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            time,
            level: level.to_string(),
            message,
        });
    }

    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        format!("{}h {:02}m", h, m)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
