//! TUI application state and logic

use crate::core::{CandidateSet, Digits, EngineError, FeedbackReport};
use crate::output::formatters::information_bits;
use crate::solver::frequency::DigitFrequencies;
use crate::solver::{Score, Solver, Strategy, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept for the messages panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub solver: Solver<StrategyType>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub manual_number: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualNumber,
    WinCelebration,
}

/// The guess currently awaiting feedback
#[derive(Debug, Clone, Copy)]
pub struct GuessInfo {
    pub digits: Digits,
    /// Strategy score against the current candidates
    pub score: Option<Score>,
    pub frequency_score: usize,
    /// Whether the guess was typed in rather than suggested
    pub manual: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Games won per guess count (index 0 = one guess)
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if self.guess_distribution.len() < guesses {
            self.guess_distribution.resize(guesses, 0);
        }
        if let Some(slot) = guesses.checked_sub(1) {
            self.guess_distribution[slot] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(strategy: StrategyType, universe: CandidateSet) -> Self {
        Self {
            solver: Solver::new(strategy, universe),
            current_guess: None,
            input_buffer: String::new(),
            manual_number: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest a guess; you tell me how it scored.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type one of c/p/a per digit (e.g. 'cpaac') and press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        }
    }

    /// Digits per number
    #[must_use]
    pub fn width(&self) -> usize {
        self.solver.universe().width()
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.solver.count()
    }

    /// Bits gained so far: log2(initial / remaining)
    #[must_use]
    pub fn information_gained(&self) -> f64 {
        information_bits(self.solver.universe().len(), self.solver.count())
    }

    /// Bits needed to single out one number from the whole universe
    #[must_use]
    pub fn information_total(&self) -> f64 {
        information_bits(self.solver.universe().len(), 1)
    }

    pub fn compute_suggestion(&mut self) {
        match self.solver.next_guess() {
            Ok((candidate, score)) => {
                let digits = *candidate.digits();
                self.current_guess = Some(GuessInfo {
                    digits,
                    score: Some(score),
                    frequency_score: self.frequency_score(&digits),
                    manual: false,
                });
            }
            Err(_) => {
                self.current_guess = None;
                self.add_message("No valid guesses remaining!", MessageStyle::Error);
            }
        }
    }

    /// Frequency score of `digits` against the current candidates
    #[must_use]
    pub fn frequency_score(&self, digits: &Digits) -> usize {
        DigitFrequencies::from_candidates(self.solver.candidates()).score(digits)
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let Some(guess) = self.current_guess else {
            self.add_message("No guess to give feedback for", MessageStyle::Error);
            return;
        };

        let Some(report) = FeedbackReport::from_symbols(&guess.digits, feedback) else {
            self.add_message(
                &format!(
                    "Invalid feedback! Use exactly {} of c/p/a",
                    self.width()
                ),
                MessageStyle::Error,
            );
            return;
        };

        match self.solver.apply_feedback(&report) {
            Ok(round) if round.is_solved() => {
                let guesses = self.solver.history().len();
                self.stats.record_win(guesses);
                self.input_mode = InputMode::WinCelebration;

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(
                    &format!("We found the correct number ({})! {celebration}", guess.digits),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(round) => {
                self.compute_suggestion();
                self.add_message(
                    &format!(
                        "{} candidates remaining ({} ruled out)",
                        round.candidates_after,
                        round.eliminated()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(EngineError::EmptyCandidateSet) => {
                self.add_message(
                    "No candidates match that feedback - check it and try again.",
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }

        self.input_buffer.clear();
    }

    pub fn new_game(&mut self) {
        if self.input_mode != InputMode::WinCelebration && !self.solver.history().is_empty() {
            self.stats.total_games += 1;
        }

        self.solver.reset();
        self.current_guess = None;
        self.input_buffer.clear();
        self.manual_number.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if self.solver.undo() {
            self.input_buffer.clear();
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Replace the suggestion with the number typed in manual mode
    pub fn use_manual_number(&mut self) {
        let text = std::mem::take(&mut self.manual_number);

        let digits = match Digits::parse(&text, self.width()) {
            Ok(digits) => digits,
            Err(e) => {
                self.add_message(&format!("Invalid number: {e}"), MessageStyle::Error);
                return;
            }
        };

        let Some(candidate) = digits
            .to_number()
            .and_then(|n| self.solver.universe().get(n))
        else {
            self.add_message(
                &format!("{digits} is not a {}-digit prime!", self.width()),
                MessageStyle::Error,
            );
            return;
        };
        let digits = *candidate.digits();

        let score = self
            .solver
            .strategy()
            .score(&digits, self.solver.candidates())
            .ok();

        if let Some(suggested) = self.current_guess
            && let (Some(theirs), Some(ours)) = (suggested.score, score)
            && theirs.is_better_than(ours)
        {
            self.add_message(
                &format!("Note: suggested {} had a better {theirs}", suggested.digits),
                MessageStyle::Info,
            );
        }

        self.current_guess = Some(GuessInfo {
            digits,
            score,
            frequency_score: self.frequency_score(&digits),
            manual: true,
        });
        self.add_message(
            &format!(
                "Using: {digits}{}",
                score.map_or_else(String::new, |s| format!(" ({s})"))
            ),
            MessageStyle::Success,
        );
        self.input_mode = InputMode::Feedback;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('u') => self.undo_last(),
                // 'n' only starts over on an empty buffer
                KeyCode::Char('n') if self.input_buffer.is_empty() => self.new_game(),
                KeyCode::Char(c @ ('c' | 'p' | 'a')) => {
                    if self.input_buffer.len() < self.width() {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Tab => {
                    if self.candidates_count() > 0 {
                        self.input_mode = InputMode::ManualNumber;
                        let prompt = format!("Enter your own number ({} digits)", self.width());
                        self.add_message(&prompt, MessageStyle::Info);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = std::mem::take(&mut self.input_buffer);
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualNumber => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_number.clear();
                    self.add_message("Cancelled manual entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_number.clear();
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.manual_number.len() < self.width() {
                        self.manual_number.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.manual_number.pop();
                }
                KeyCode::Enter => self.use_manual_number(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore the terminal before reporting anything
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(())
}
