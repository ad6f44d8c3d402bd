//! Main UI Application
//!
//! Routes player input into the round engine and renders the display model.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::{ActionEvent, InstructionSource, RandomInstructions, RoundEngine};
use crate::input::{InputAction, ShakeDetector, KEYBOARD_JOLT};
use super::display::Display;

/// Main UI application
pub struct App<S = RandomInstructions> {
    engine: RoundEngine<S, Display>,
    shake: ShakeDetector,
}

impl<S: InstructionSource> App<S> {
    pub fn new(source: S, display: Display, shake: ShakeDetector) -> Self {
        Self {
            engine: RoundEngine::new(source, display),
            shake,
        }
    }

    pub fn engine(&self) -> &RoundEngine<S, Display> {
        &self.engine
    }

    /// Apply one input action. Returns true when the player wants to quit.
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Quit => return true,
            InputAction::Confirm => {
                if self.engine.started() {
                    self.engine.submit_action(ActionEvent::TapPerformed);
                } else if self.engine.sink().start_enabled() {
                    self.engine.start_session();
                }
            }
            InputAction::Tap => {
                if self.engine.started() {
                    self.engine.submit_action(ActionEvent::TapPerformed);
                }
            }
            InputAction::Jolt => {
                if self.engine.started() {
                    let (x, y, z) = KEYBOARD_JOLT;
                    if let Some(event) = self.shake.sample(x, y, z) {
                        self.engine.submit_action(event);
                    }
                }
            }
        }
        false
    }

    /// Draw the whole screen
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let display = self.engine.sink();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Reflex Rush ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);

        self.render_status(frame, rows[0], display);
        self.render_instruction(frame, rows[2], display);
        self.render_start_control(frame, rows[3], display);

        let help = Paragraph::new("[Enter/Space/click] press or swipe   [s] shake   [q] quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[4]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, display: &Display) {
        let mut spans = vec![
            Span::raw(display.level_text()),
            Span::raw("   "),
            Span::raw(display.score_text()),
            Span::raw("   "),
        ];
        for full in display.hearts() {
            let (glyph, color) = if *full { ("♥ ", Color::Red) } else { ("♡ ", Color::DarkGray) };
            spans.push(Span::styled(glyph, Style::default().fg(color)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_instruction(&self, frame: &mut Frame, area: Rect, display: &Display) {
        let color = if self.engine.over() { Color::Red } else { Color::Yellow };
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                display.instruction_text().to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];

        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }

    fn render_start_control(&self, frame: &mut Frame, area: Rect, display: &Display) {
        let style = if display.start_enabled() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = Paragraph::new(display.start_label().to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(button, centered_rect(20, area));
    }
}

impl App<RandomInstructions> {
    /// App drawing instructions at random, seeded when a seed is given
    pub fn with_seed(seed: Option<u64>, display: Display, shake: ShakeDetector) -> Self {
        Self::new(RandomInstructions::from_seed_option(seed), display, shake)
    }
}

/// Create a horizontally centered rectangle of the given width
fn centered_rect(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
