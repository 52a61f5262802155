//! TUI rendering with ratatui
//!
//! Visualizations for the Primel solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::FeedbackKind;
use crate::output::formatters::create_progress_bar;
use crate::solver::Strategy;
use crate::solver::frequency::DigitFrequencies;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed individually at or below this count
const LISTED_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 PRIMEL SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Current guess info
            Constraint::Percentage(55), // Candidates
            Constraint::Min(4),         // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn kind_color(kind: FeedbackKind) -> Color {
    match kind {
        FeedbackKind::Correct => Color::Green,
        FeedbackKind::Present => Color::Yellow,
        FeedbackKind::Absent => Color::DarkGray,
    }
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Current Guess ({}) ", app.solver.strategy().name()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = app.current_guess else {
        f.render_widget(Paragraph::new("No suggestion available").block(block), area);
        return;
    };

    // Each digit takes the color of the feedback typed for it so far
    let mut digits = vec![Span::raw(if guess.manual { "Manual:    " } else { "Suggested: " })];
    for (i, digit) in guess.digits.as_slice().iter().enumerate() {
        let color = app
            .input_buffer
            .chars()
            .nth(i)
            .and_then(FeedbackKind::from_symbol)
            .map_or(Color::Yellow, kind_color);
        digits.push(Span::styled(
            digit.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let score = guess
        .score
        .map_or_else(|| "n/a".to_string(), |s| s.to_string());
    let content = vec![
        Line::from(digits),
        Line::from(format!("Score:     {score}")),
        Line::from(format!("Frequency: {}", guess.frequency_score)),
        Line::from(format!("Remaining: {} candidates", app.candidates_count())),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.solver.candidates();
    let count = candidates.len();

    let content = if count == 0 {
        vec![Line::from("No candidates remain")]
    } else if count <= LISTED_CANDIDATES {
        let frequencies = DigitFrequencies::from_candidates(candidates);
        let mut lines = vec![Line::from("Remaining (frequency score):")];
        for candidate in candidates {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    candidate.digits().to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" {:>3}", frequencies.score(candidate.digits())),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        lines
    } else {
        vec![
            Line::from(format!("{count} candidates remaining")),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (count as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.solver.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .take(5)
        .map(|(i, round)| {
            ListItem::new(format!(
                "{}: {} {} {} → {} (-{})",
                i + 1,
                round.guess,
                round.report.to_emoji(),
                round.candidates_before,
                round.candidates_after,
                round.eliminated()
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Information gauge
            Constraint::Min(7),    // Messages
            Constraint::Length(6), // Statistics
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = app.information_total();
    let bits_gained = app.information_gained();
    let ratio = if total_bits > 0.0 {
        (bits_gained / total_bits).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{bits_gained:.1}/{total_bits:.1} bits"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let mut lines = vec![Line::from(format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        lines.push(Line::from(format!(
            "{:2}: {} {count}",
            i + 1,
            create_progress_bar(count as f64, max as f64, 15)
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (c=correct p=present a=absent) | TAB for your own number ".to_string(),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualNumber => (
            format!(" Enter Number to Try ({} digits) | ESC to cancel ", app.width()),
            app.manual_number.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::WinCelebration => "q: Quit | n: New Game",
        InputMode::ManualNumber => "Enter: Use number | Esc: Cancel",
        InputMode::Feedback if app.input_buffer.is_empty() => {
            "q: Quit | u: Undo | n: New Game | Enter: Submit | TAB: Own Number"
        }
        InputMode::Feedback => "q: Quit | u: Undo | Backspace: Edit | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
