pub mod filters;
pub mod panes;

use crate::analysis::{compute_dashboard, sentiment::LexiconModel, DashboardData};
use crate::dataset::Dataset;
use crossterm::event::{KeyCode, KeyEvent};
use filters::FilterPanel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, ListState, Paragraph},
    Frame,
};

/// Result of the background dataset load, delivered to the UI loop.
#[derive(Debug)]
pub enum LoadMessage {
    Loaded(&'static Dataset),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Years,
    Sources,
    Tweets,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Years => Focus::Sources,
            Focus::Sources => Focus::Tweets,
            Focus::Tweets => Focus::Years,
        }
    }
}

enum AppState {
    Loading,
    Failed(String),
    Ready(Ready),
}

struct Ready {
    dataset: &'static Dataset,
    filters: FilterPanel,
    focus: Focus,
    tweets_state: ListState,
    dashboard: Option<DashboardData>,
}

impl Ready {
    fn new(dataset: &'static Dataset, model: &LexiconModel) -> Self {
        let filters = FilterPanel::new(dataset.years().to_vec(), dataset.sources().to_vec());
        let mut tweets_state = ListState::default();
        tweets_state.select(Some(0));

        let mut ready = Self {
            dataset,
            filters,
            focus: Focus::Years,
            tweets_state,
            dashboard: None,
        };
        ready.recompute(model);
        ready
    }

    /// Re-run the whole pipeline for the current selection. The previous
    /// view is discarded; nothing is updated incrementally.
    fn recompute(&mut self, model: &LexiconModel) {
        self.dashboard = compute_dashboard(self.dataset.records(), &self.filters.criteria(), model);
        self.tweets_state.select(Some(0));
    }

    fn on_key(&mut self, key: KeyEvent, model: &LexiconModel) {
        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Up => match self.focus {
                Focus::Years => {
                    self.filters.year_up();
                    self.recompute(model);
                }
                Focus::Sources => self.filters.source_up(),
                Focus::Tweets => self.tweets_up(),
            },
            KeyCode::Down => match self.focus {
                Focus::Years => {
                    self.filters.year_down();
                    self.recompute(model);
                }
                Focus::Sources => self.filters.source_down(),
                Focus::Tweets => self.tweets_down(),
            },
            KeyCode::Char(' ') | KeyCode::Enter if self.focus == Focus::Sources => {
                self.filters.toggle_source();
                self.recompute(model);
            }
            KeyCode::Char('a') if self.focus == Focus::Sources => {
                self.filters.toggle_all_sources();
                self.recompute(model);
            }
            _ => {}
        }
    }

    fn tweets_up(&mut self) {
        if let Some(selected) = self.tweets_state.selected() {
            if selected > 0 {
                self.tweets_state.select(Some(selected - 1));
            }
        }
    }

    fn tweets_down(&mut self) {
        let len = self
            .dashboard
            .as_ref()
            .map(|d| d.top_tweets.len())
            .unwrap_or(0);
        if let Some(selected) = self.tweets_state.selected() {
            if selected < len.saturating_sub(1) {
                self.tweets_state.select(Some(selected + 1));
            }
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(40)])
            .split(area);

        self.filters.render(frame, chunks[0], self.focus);

        match &self.dashboard {
            Some(data) => self.render_dashboard(frame, chunks[1], data),
            None => panes::render_no_data(frame, chunks[1]),
        }
    }

    fn render_dashboard(&self, frame: &mut Frame, area: Rect, data: &DashboardData) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Percentage(40),
                Constraint::Min(8),
            ])
            .split(area);

        panes::render_metrics(frame, rows[0], data);
        panes::render_tweet_trend(frame, rows[1], data);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(38),
                Constraint::Percentage(28),
            ])
            .split(rows[2]);

        panes::render_hashtag_bars(frame, bottom[0], data);
        panes::render_top_tweets(
            frame,
            bottom[1],
            data,
            &self.tweets_state,
            self.focus == Focus::Tweets,
        );

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(4)])
            .split(bottom[2]);

        panes::render_sentiment(frame, side[0], data);
        panes::render_top_hashtags(frame, side[1], data);
    }
}

/// Dashboard application state machine: loading until the dataset message
/// arrives, then ready (or failed) for the rest of the process.
pub struct App {
    state: AppState,
    model: LexiconModel,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Loading,
            model: LexiconModel,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_load(&mut self, message: LoadMessage) {
        self.state = match message {
            LoadMessage::Loaded(dataset) => AppState::Ready(Ready::new(dataset, &self.model)),
            LoadMessage::Failed(error) => AppState::Failed(error),
        };
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {
                if let AppState::Ready(ready) = &mut self.state {
                    ready.on_key(key, &self.model);
                }
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(frame.area());

        match &self.state {
            AppState::Loading => render_notice(frame, chunks[0], "Loading tweet dataset...", Color::White),
            AppState::Failed(error) => {
                render_notice(frame, chunks[0], &format!("Error: {error}"), Color::Red)
            }
            AppState::Ready(ready) => ready.render(frame, chunks[0]),
        }

        let help = Paragraph::new(
            " Tab switch panel · ↑/↓ move · Space toggle source · a all sources · q quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[1]);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().title(" tweetboard ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
