use crate::dataset::FilterCriteria;
use crate::ui::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use std::collections::BTreeSet;

/// Sidebar filter controls: a year selector (the cursor is the selection,
/// selectbox-style) and a source multi-select backed by a checked set.
pub struct FilterPanel {
    years: Vec<i32>,
    sources: Vec<String>,
    selected_sources: BTreeSet<String>,
    year_state: ListState,
    source_state: ListState,
}

impl FilterPanel {
    pub fn new(years: Vec<i32>, sources: Vec<String>) -> Self {
        let mut year_state = ListState::default();
        year_state.select(Some(0));
        let mut source_state = ListState::default();
        source_state.select(Some(0));

        Self {
            years,
            sources,
            selected_sources: BTreeSet::new(),
            year_state,
            source_state,
        }
    }

    /// The active selection as pipeline criteria. Starts with no sources
    /// chosen, which is a valid, empty-result selection.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.selected_year().unwrap_or_default(),
            self.selected_sources.clone(),
        )
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.year_state
            .selected()
            .and_then(|i| self.years.get(i))
            .copied()
    }

    pub fn year_up(&mut self) {
        if let Some(selected) = self.year_state.selected() {
            if selected > 0 {
                self.year_state.select(Some(selected - 1));
            }
        }
    }

    pub fn year_down(&mut self) {
        if let Some(selected) = self.year_state.selected() {
            if selected < self.years.len().saturating_sub(1) {
                self.year_state.select(Some(selected + 1));
            }
        }
    }

    pub fn source_up(&mut self) {
        if let Some(selected) = self.source_state.selected() {
            if selected > 0 {
                self.source_state.select(Some(selected - 1));
            }
        }
    }

    pub fn source_down(&mut self) {
        if let Some(selected) = self.source_state.selected() {
            if selected < self.sources.len().saturating_sub(1) {
                self.source_state.select(Some(selected + 1));
            }
        }
    }

    /// Check or uncheck the source under the cursor.
    pub fn toggle_source(&mut self) {
        let name = self
            .source_state
            .selected()
            .and_then(|i| self.sources.get(i))
            .cloned();
        if let Some(name) = name {
            if !self.selected_sources.remove(&name) {
                self.selected_sources.insert(name);
            }
        }
    }

    /// Check every source, or uncheck all when everything is already checked.
    pub fn toggle_all_sources(&mut self) {
        if self.selected_sources.len() == self.sources.len() {
            self.selected_sources.clear();
        } else {
            self.selected_sources = self.sources.iter().cloned().collect();
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focus: Focus) {
        let year_height = (self.years.len() as u16 + 2).min(area.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(year_height), Constraint::Min(3)])
            .split(area);

        self.render_years(frame, chunks[0], focus == Focus::Years);
        self.render_sources(frame, chunks[1], focus == Focus::Sources);
    }

    fn render_years(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let items: Vec<ListItem> = self
            .years
            .iter()
            .map(|year| ListItem::new(Line::from(year.to_string())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Year ")
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = self.year_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_sources(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let items: Vec<ListItem> = self
            .sources
            .iter()
            .map(|source| {
                let checked = self.selected_sources.contains(source);
                let mark = if checked { "[x] " } else { "[ ] " };
                let style = if checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(source.as_str(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Sources ")
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = self.source_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}
