use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep_until};
use tracing::info;

use super::keys::{KeyAction, KeyMap};
use super::stats::SessionStats;
use super::view::TerminalView;
use crate::game::{GameConfig, GameEngine};
use crate::hal::{Display, FrameBuffer, LatchedInput};

/// Stretch applied to core delays. The firmware targets an instruction-set
/// simulator where its waits run far longer than their nominal milliseconds.
const HOST_TIME_SCALE: u32 = 4;

/// Terminal redraw period (about 30 FPS)
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

type HostEngine = GameEngine<FrameBuffer, LatchedInput, StdRng>;

/// Plays the game core against an in-memory LED matrix shown in the terminal
pub struct Simulator {
    engine: HostEngine,
    stats: SessionStats,
    view: TerminalView,
    keys: KeyMap,
    should_quit: bool,
}

impl Simulator {
    pub fn new(config: GameConfig) -> Result<Self> {
        let screen = FrameBuffer::new(config.matrix_width, config.matrix_height);
        let engine = GameEngine::new(config, screen, LatchedInput::new(), StdRng::from_entropy())
            .context("Failed to build game engine")?;

        Ok(Self {
            engine,
            stats: SessionStats::new(),
            view: TerminalView::new(),
            keys: KeyMap::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let screen = self.engine.display();
        info!(
            width = screen.width(),
            height = screen.height(),
            "simulator started"
        );

        // Run game loop with cleanup
        let result = self.run_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut next_step = Instant::now();
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One firmware loop iteration, then wait out its delay
                _ = sleep_until(next_step) => {
                    let delay = self.step();
                    next_step = Instant::now() + delay * HOST_TIME_SCALE;
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.view.render(
                            frame,
                            self.engine.display(),
                            self.engine.state(),
                            self.engine.score(),
                            &self.stats,
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            high_score = self.stats.high_score(),
            rounds = self.stats.rounds_played(),
            food = self.stats.food_eaten(),
            "simulator stopped"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.keys.handle_key_event(key) {
                KeyAction::Pad(direction) => self.engine.input_mut().press(direction),
                KeyAction::ToggleSwitch(mask) => self.engine.input_mut().toggle_switch(mask),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// Run one engine iteration, keep the session stats in step, and return its delay
    fn step(&mut self) -> Duration {
        let result = self.engine.tick();

        if let Some(end) = self.stats.record(&result.info, self.engine.snake().len()) {
            info!(
                ?end,
                ticks = self.stats.round_ticks(),
                rounds = self.stats.rounds_played(),
                "round ended"
            );
        }

        result.delay
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
