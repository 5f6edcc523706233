//! Terminal view for REVAT.
//!
//! Pure rendering: reads application state and draws it with ratatui. The
//! view never mutates anything; the app decides when a redraw is needed.
//!
//! Layout: a one-line header with the progress indicator, the review text on
//! the left, one "button" panel per label vocabulary on the right, and a
//! footer with the status line and key help.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::app::RevatApp;
use crate::model::{Aspect, Sentiment};

/// Draw one frame of the application.
pub fn render(frame: &mut Frame<'_>, app: &RevatApp) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, header, app);

    let [review, aspects, sentiments] = Layout::horizontal([
        Constraint::Percentage(60),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ])
    .areas(body);

    render_review(frame, review, app);
    render_aspects(frame, aspects, app);
    render_sentiments(frame, sentiments, app);
    render_footer(frame, footer, app);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &RevatApp) {
    let session = app.session();
    let line = Line::from(vec![
        Span::styled("REVAT", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "  Review {}  remaining: {}",
            session.progress(),
            session.remaining()
        )),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_review(frame: &mut Frame<'_>, area: Rect, app: &RevatApp) {
    let title = format!(" Review {} ", app.session().progress());
    let paragraph = Paragraph::new(app.session().current_text())
        .block(Block::bordered().title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_aspects(frame: &mut Frame<'_>, area: Rect, app: &RevatApp) {
    let current = app.session().current_aspect();
    let lines: Vec<Line<'_>> = Aspect::all()
        .iter()
        .enumerate()
        .map(|(i, aspect)| option_line(format!("{}", i + 1), aspect.name(), current))
        .collect();
    let paragraph = Paragraph::new(lines).block(Block::bordered().title(" Aspect "));
    frame.render_widget(paragraph, area);
}

fn render_sentiments(frame: &mut Frame<'_>, area: Rect, app: &RevatApp) {
    let current = app.session().current_sentiment();
    let lines: Vec<Line<'_>> = Sentiment::all()
        .iter()
        .map(|sentiment| {
            let key = sentiment.name()[..1].to_lowercase();
            option_line(key, sentiment.name(), current)
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(Block::bordered().title(" Sentiment "));
    frame.render_widget(paragraph, area);
}

/// One selectable option with its hotkey; highlighted when it matches the
/// current row's stored label.
fn option_line(key: String, name: &'static str, current: &str) -> Line<'static> {
    let selected = current == name;
    let style = if selected {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(format!("[{key}] ")),
        Span::styled(name, style),
    ])
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &RevatApp) {
    let status = Line::from(app.status().unwrap_or(""));
    let help = Line::from(Span::styled(
        "1-5 aspect | p/n sentiment | Left/Right move | s save | q quit",
        Style::default().add_modifier(Modifier::DIM),
    ));
    frame.render_widget(Paragraph::new(vec![status, help]), area);
}
