use std::borrow::Cow;

use super::state::{BoardState, Phase};
use crate::presenter::classify::{Mood, SentimentLabel};
use crate::presenter::LoadOutcome;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const STORMY_BG: Color = Color::Rgb(38, 42, 64);
const CLOUDY_BG: Color = Color::Rgb(120, 128, 140);
const SUNNY_BG: Color = Color::Rgb(250, 214, 92);

pub fn draw(f: &mut Frame, state: &BoardState, spinner_frame: u8) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, state, chunks[0], spinner_frame);
    draw_news_cloud(f, state, chunks[1]);
    draw_sentiment(f, state, chunks[2]);
    draw_logs(f, state, chunks[3]);
    draw_footer(f, chunks[4]);
}

fn draw_header(f: &mut Frame, state: &BoardState, area: Rect, spinner_frame: u8) {
    let ch = SPINNER_FRAMES[(spinner_frame as usize) % SPINNER_FRAMES.len()];
    let activity = match (state.phase, state.is_paused) {
        (Phase::Loading, _) => Span::styled(
            format!("{} LOADING", ch),
            Style::default().fg(Color::Yellow),
        ),
        (Phase::Cycling, true) => Span::styled(
            "PAUSED",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        (Phase::Cycling, false) => Span::styled(
            format!("{} LIVE", ch),
            Style::default().fg(Color::Cyan),
        ),
    };

    let source = match state.outcome {
        Some(outcome @ LoadOutcome::Loaded(_)) => {
            Span::styled(outcome.describe(), Style::default().fg(Color::Green))
        }
        Some(LoadOutcome::Empty) => Span::styled("no headlines", Style::default().fg(Color::Yellow)),
        Some(LoadOutcome::Failed) => Span::styled("fetch failed", Style::default().fg(Color::Red)),
        None => Span::styled("-", Style::default().fg(Color::DarkGray)),
    };

    let sep = || Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let line = Line::from(vec![
        Span::raw(" "),
        activity,
        sep(),
        source,
        sep(),
        Span::raw(format!("Shown: {}", state.presented)),
        sep(),
        Span::raw(format!("Up {}", state.uptime())),
    ]);

    let block = Block::default()
        .title(" News Cloud ")
        .borders(Borders::ALL);
    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Colors for the news-cloud panel. No mood yet means terminal defaults.
fn mood_style(mood: Option<Mood>) -> Style {
    match mood {
        Some(Mood::Stormy) => Style::default().bg(STORMY_BG).fg(Color::White),
        Some(Mood::Cloudy) => Style::default().bg(CLOUDY_BG).fg(Color::Black),
        Some(Mood::Sunny) => Style::default().bg(SUNNY_BG).fg(Color::Black),
        None => Style::default(),
    }
}

fn draw_news_cloud(f: &mut Frame, state: &BoardState, area: Rect) {
    let style = mood_style(state.mood);

    let text = if state.phase == Phase::Loading && state.headline.is_empty() {
        "Loading headlines..."
    } else {
        state.headline.as_str()
    };

    // Push the headline towards the vertical middle of the panel.
    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let wrapped_rows = text.chars().count().div_ceil(inner_width).max(1);
    let pad = inner_height.saturating_sub(wrapped_rows) / 2;

    let mut lines: Vec<Line> = vec![Line::raw(""); pad];
    lines.push(Line::styled(text, Style::default().add_modifier(Modifier::BOLD)));

    let title = match state.mood {
        Some(mood) => format!(" {} ", mood.label()),
        None => " Headline ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(style);
    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn sentiment_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Neutral => Color::Gray,
    }
}

fn draw_sentiment(f: &mut Frame, state: &BoardState, area: Rect) {
    let line = match state.sentiment {
        Some(label) => Line::from(Span::styled(
            label.as_str(),
            Style::default().fg(sentiment_color(label)).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled("-", Style::default().fg(Color::DarkGray))),
    };
    let block = Block::default().title(" Sentiment ").borders(Borders::ALL);
    let para = Paragraph::new(line).block(block).alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn draw_logs(f: &mut Frame, state: &BoardState, area: Rect) {
    let max_width = area.width.saturating_sub(2) as usize; // borders
    let visible_lines = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = state
        .logs
        .iter()
        .rev()
        .take(visible_lines)
        .map(|l| {
            let color = match l.level.as_str() {
                "ERROR" => Color::Red,
                "WARN" => Color::Yellow,
                _ => Color::DarkGray,
            };
            let prefix = format!(" {} [{}] ", l.time, l.level);
            let msg_max = max_width.saturating_sub(prefix.chars().count());
            let msg = truncate_with_ellipsis(&l.message, msg_max);
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::raw(msg.into_owned()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let help = " q: quit | p: pause | r: resume ";
    let line = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    f.render_widget(line, area);
}

fn truncate_with_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    let char_count = s.chars().count();
    if char_count <= max_width {
        Cow::Borrowed(s)
    } else if max_width <= 3 {
        Cow::Owned(".".repeat(max_width))
    } else {
        let end = s
            .char_indices()
            .nth(max_width - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        Cow::Owned(format!("{}...", &s[..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(state: &BoardState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, state, 0)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text_of(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_small_width() {
        assert_eq!(truncate_with_ellipsis("hello", 2), "..");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_truncate_multibyte_chars() {
        // must not panic when the cut lands inside a multi-byte char
        let s = "Markets — stocks fall ≥ 3%";
        let result = truncate_with_ellipsis(s, 12);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), 12);
    }

    #[test]
    fn test_loading_board_shows_placeholder_text() {
        let buf = render(&BoardState::new());
        let text = text_of(&buf);
        assert!(text.contains("Loading headlines..."));
        assert!(text.contains("LOADING"));
    }

    #[test]
    fn test_cycling_board_shows_headline_sentiment_and_mood() {
        let mut state = BoardState::new();
        state.phase = Phase::Cycling;
        state.outcome = Some(LoadOutcome::Loaded(3));
        state.headline = "Storm hits coast".to_string();
        state.mood = Some(Mood::Stormy);
        state.sentiment = Some(SentimentLabel::Negative);
        state.push_log("INFO", "Loaded: 3 headlines".to_string());

        let buf = render(&state);
        let text = text_of(&buf);
        assert!(text.contains("Storm hits coast"));
        assert!(text.contains("Negative"));
        assert!(text.contains("Stormy"));
        assert!(text.contains("3 headlines"));
        assert!(buf.content().iter().any(|c| c.bg == STORMY_BG));
        assert!(!buf.content().iter().any(|c| c.bg == SUNNY_BG));
    }

    #[test]
    fn test_paused_board_header() {
        let mut state = BoardState::new();
        state.phase = Phase::Cycling;
        state.is_paused = true;
        let text = text_of(&render(&state));
        assert!(text.contains("PAUSED"));
    }

    #[test]
    fn test_failed_load_header() {
        let mut state = BoardState::new();
        state.phase = Phase::Cycling;
        state.outcome = Some(LoadOutcome::Failed);
        state.headline = "Error fetching headlines.".to_string();
        let text = text_of(&render(&state));
        assert!(text.contains("fetch failed"));
        assert!(text.contains("Error fetching headlines."));
    }

    #[test]
    fn test_mood_styles_are_distinct() {
        assert_eq!(mood_style(None), Style::default());
        assert_ne!(mood_style(Some(Mood::Stormy)), mood_style(Some(Mood::Sunny)));
        assert_ne!(mood_style(Some(Mood::Cloudy)), mood_style(Some(Mood::Sunny)));
    }
}
