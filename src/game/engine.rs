use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use super::{
    collision::{collides_food, fatal_collision},
    config::{ConfigError, GameConfig},
    food::Food,
    snake::Snake,
    state::{Bounds, Collision, GameState},
};
use crate::hal::{Display, Input, Pacer, SWITCH_START, SwitchCommand};
use crate::render::Renderer;

/// What happened during one loop iteration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// A start edge began a new round
    pub started: bool,
    /// The reset switch cleared the board
    pub reset: bool,
    /// The snake ate food this step
    pub ate_food: bool,
    /// Fatal collision that ended the round, if any
    pub collision: Option<Collision>,
}

/// Result of one loop iteration
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// How long the caller should wait before the next iteration
    pub delay: Duration,
    pub info: StepInfo,
}

/// The game loop and its state machine
///
/// Owns the snake, the food, the score and the device ports. Every call to
/// [`GameEngine::tick`] runs one full iteration: sample input, apply switch
/// commands, and while running, steer, erase the tail, advance, check
/// collisions, feed, draw, and report the pacing delay.
pub struct GameEngine<D, I, R> {
    config: GameConfig,
    bounds: Bounds,
    renderer: Renderer,
    display: D,
    input: I,
    rng: R,
    snake: Snake,
    /// None while placement is waiting for a free cell
    food: Option<Food>,
    state: GameState,
    score: u32,
    previous_switches: u32,
}

impl<D: Display, I: Input, R: Rng> GameEngine<D, I, R> {
    /// Validate the configuration against the display and draw the initial board.
    ///
    /// The switch register is sampled once here so a start switch that is
    /// already on at power-up does not begin a round.
    pub fn new(
        config: GameConfig,
        display: D,
        mut input: I,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        if display.width() != bounds.width() || display.height() != bounds.height() {
            return Err(ConfigError::DisplayMismatch {
                width: bounds.width(),
                height: bounds.height(),
                actual_width: display.width(),
                actual_height: display.height(),
            });
        }

        let previous_switches = input.sample().switch_bits();
        let mut engine = Self {
            renderer: Renderer::new(bounds.block(), config.palette),
            snake: Snake::new(config.start, bounds.block()),
            food: None,
            state: GameState::GameOver,
            score: 0,
            previous_switches,
            config,
            bounds,
            display,
            input,
            rng,
        };
        engine.reset_board();
        Ok(engine)
    }

    /// Run one loop iteration and report how long to wait before the next
    pub fn tick(&mut self) -> StepResult {
        let input = self.input.sample();
        let switches = input.switch_bits();
        let mut info = StepInfo::default();
        let mut delay = Duration::ZERO;

        match input.command() {
            Some(SwitchCommand::Start)
                if self.state == GameState::GameOver && self.previous_switches != SWITCH_START =>
            {
                self.reset_board();
                self.state = GameState::Running;
                info.started = true;
                info!("round started");
            }
            Some(SwitchCommand::Reset) => {
                self.state = GameState::GameOver;
                self.reset_board();
                info.reset = true;
                delay += self.config.reset_delay;
                info!("board reset");
            }
            _ => {}
        }
        self.previous_switches = switches;

        if self.state != GameState::Running {
            return StepResult {
                delay: delay + self.config.idle_delay,
                info,
            };
        }

        if let Some(direction) = input.steer(self.snake.direction()) {
            self.snake.turn(direction);
        }

        self.renderer.erase_tail(&mut self.display, &self.snake);
        self.snake.advance();

        if let Some(collision) = fatal_collision(&self.snake, &self.bounds) {
            self.state = GameState::GameOver;
            info.collision = Some(collision);
            info!(score = self.score, ?collision, "game over");
            return StepResult { delay, info };
        }

        match self.food {
            Some(food) if collides_food(&self.snake, &food) => {
                self.snake.grow();
                self.score += 1;
                info.ate_food = true;
                debug!(score = self.score, length = self.snake.len(), "food eaten");
                self.food = None;
                self.place_food();
            }
            Some(_) => {}
            None => self.place_food(),
        }

        self.renderer.draw_snake(&mut self.display, &self.snake);
        if let Some(food) = &self.food {
            self.renderer.draw_food(&mut self.display, food);
        }

        StepResult {
            delay: self.config.tick_delay,
            info,
        }
    }

    /// Run one iteration and wait out its delay on `pacer`
    pub fn step_paced<P: Pacer + ?Sized>(&mut self, pacer: &mut P) -> StepInfo {
        let result = self.tick();
        pacer.wait(result.delay);
        result.info
    }

    /// Firmware entry point: iterate forever
    pub fn run<P: Pacer + ?Sized>(&mut self, pacer: &mut P) -> ! {
        loop {
            self.step_paced(pacer);
        }
    }

    /// Reinitialize snake, score and food, then repaint the whole board
    fn reset_board(&mut self) {
        self.score = 0;
        self.snake.initialize(self.config.start);
        self.food = None;
        self.place_food();

        self.renderer.clear(&mut self.display, &self.bounds);
        self.renderer.draw_snake(&mut self.display, &self.snake);
        if let Some(food) = &self.food {
            self.renderer.draw_food(&mut self.display, food);
        }
    }

    fn place_food(&mut self) {
        self.food = Food::place(
            &mut self.rng,
            &self.snake,
            &self.bounds,
            self.config.food_retry_limit,
        );
        match &self.food {
            Some(food) => debug!(position = ?food.position(), "food placed"),
            None => warn!(
                length = self.snake.len(),
                "no free cell found for food; retrying next tick"
            ),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
