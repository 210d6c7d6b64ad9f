//! Rendering
//!
//! One frame: title, suggestion panel, status line, key hints. Everything
//! shown here comes from the session view snapshot.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Wrap};

use super::state::App;
use crate::session::{SessionState, SessionView};

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let view = self.session.view();

        let [title_area, body_area, status_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        render_title(frame, title_area);
        render_suggestions(frame, body_area, &view);
        render_status(frame, status_area, &view);
        render_hints(frame, hints_area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("kibitz", Style::new().add_modifier(Modifier::BOLD)),
        Span::raw(" - Klondike move advisor"),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, view: &SessionView) {
    let block = Block::bordered().title("Suggested moves");

    if view.is_initial_analysis {
        let paragraph = Paragraph::new("Analyzing your board...")
            .style(Style::new().fg(Color::Yellow))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    if view.current_suggestions.is_empty() {
        let text = match view.state {
            SessionState::Stopped => "Session stopped.",
            _ => "Share the window showing your solitaire game, then press s to start.",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::new().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = view
        .current_suggestions
        .iter()
        .enumerate()
        .map(|(index, suggestion)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}. ", index + 1),
                    Style::new().fg(Color::DarkGray),
                ),
                Span::raw(suggestion.as_str()),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &SessionView) {
    let status = if let Some(error) = &view.last_error {
        Line::styled(error.clone(), Style::new().fg(Color::Red))
    } else if view.is_background_loading {
        Line::styled(
            "Preparing next moves...",
            Style::new().fg(Color::Yellow),
        )
    } else if view.has_next_ready {
        Line::styled(
            "Next moves ready. Press n when you have played these.",
            Style::new().fg(Color::Green),
        )
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(status), area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new("s start | n next moves | r retry fetch | x stop | q quit")
        .style(Style::new().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
