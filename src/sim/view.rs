use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::stats::SessionStats;
use crate::game::GameState;
use crate::hal::{self, FrameBuffer};

/// Draws the simulated LED matrix and the session status in the terminal
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        screen: &FrameBuffer,
        state: GameState,
        score: u32,
        stats: &SessionStats,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // LED matrix
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_status(state, score, stats), chunks[0]);
        frame.render_widget(self.render_matrix(screen, state), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_matrix(&self, screen: &FrameBuffer, state: GameState) -> Paragraph<'_> {
        let border = match state {
            GameState::Running => Color::White,
            GameState::Paused => Color::Yellow,
            GameState::GameOver => Color::Red,
        };

        Paragraph::new(matrix_lines(screen))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .title(" LED matrix "),
            )
            .alignment(Alignment::Center)
    }

    fn render_status(&self, state: GameState, score: u32, stats: &SessionStats) -> Paragraph<'_> {
        let (label, color) = match state {
            GameState::Running => ("RUNNING", Color::Green),
            GameState::Paused => ("PAUSED", Color::Yellow),
            GameState::GameOver => ("GAME OVER", Color::Red),
        };

        let text = vec![Line::from(vec![
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.high_score().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{} ({} died)", stats.rounds_played(), stats.deaths()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Longest: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.longest().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.round_ticks().to_string(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" d-pad | "),
            Span::styled("1/Space", Style::default().fg(Color::Green)),
            Span::raw(" start switch | "),
            Span::styled("2/R", Style::default().fg(Color::Yellow)),
            Span::raw(" reset switch | "),
            Span::styled("Q/Esc", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per pixel row, each pixel drawn as two full blocks so it looks square
fn matrix_lines(screen: &FrameBuffer) -> Vec<Line<'static>> {
    use hal::Display;

    let width = screen.width() as usize;
    screen
        .pixels()
        .chunks(width.max(1))
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .map(|&word| {
                    let c = hal::Color(word);
                    Span::styled(
                        "██",
                        Style::default().fg(Color::Rgb(c.red(), c.green(), c.blue())),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Collision, StepInfo};
    use crate::hal::Display;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_matrix_lines_follow_pixels() {
        let mut screen = FrameBuffer::new(3, 2);
        screen.set_pixel(2, 1, hal::Color(0xFF0000));

        let lines = matrix_lines(&screen);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.spans.len() == 3));
        assert_eq!(lines[1].spans[2].style.fg, Some(Color::Rgb(0xFF, 0, 0)));
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_render_shows_status_and_bindings() {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let screen = FrameBuffer::new(40, 30);
        let mut stats = SessionStats::new();
        stats.record(
            &StepInfo {
                started: true,
                ..Default::default()
            },
            3,
        );
        for length in 4..=10 {
            stats.record(
                &StepInfo {
                    ate_food: true,
                    ..Default::default()
                },
                length,
            );
        }
        stats.record(
            &StepInfo {
                collision: Some(Collision::Wall),
                ..Default::default()
            },
            10,
        );

        terminal
            .draw(|frame| {
                TerminalView::new().render(frame, &screen, GameState::GameOver, 3, &stats)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Score: 3"));
        assert!(text.contains("Best: 7"));
        assert!(text.contains("Rounds: 1 (1 died)"));
        assert!(text.contains("Longest: 10"));
        assert!(text.contains("1/Space"));
        assert!(text.contains("2/R"));
        assert!(text.contains("Q/Esc"));
    }
}
