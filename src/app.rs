use crate::consts::{TOAST_DESCRIPTION, TOAST_DURATION, TOAST_TITLE};
use crate::game::{CellSource, Game, StepOutcome};
use crate::input::Command;
use crate::ticker::Ticker;
use crate::toast::Toast;
use macroquad::logging::{debug, info, warn};

/// Owns the game and everything that drives it between frames.
pub struct App<S: CellSource> {
    game: Game,
    ticker: Ticker,
    toast: Option<Toast>,
    source: S,
}

impl<S: CellSource> App<S> {
    pub fn new(source: S, now: f64) -> Self {
        let game = Game::new();
        let ticker = Ticker::new(game.speed(), now);
        Self {
            game,
            ticker,
            toast: None,
            source,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The notification, if it is still on screen
    pub fn toast(&self, now: f64) -> Option<&Toast> {
        self.toast.as_ref().filter(|t| t.is_visible(now))
    }

    pub fn apply(&mut self, command: Command, now: f64) {
        match command {
            Command::Turn(direction) => {
                if !self.game.request_direction(direction) {
                    debug!("ignored turn to {:?}", direction);
                }
            }
            Command::Restart => {
                if self.game.is_over() {
                    self.game.restart();
                    self.ticker = Ticker::new(self.game.speed(), now);
                    self.toast = None;
                    info!("game restarted");
                }
            }
            Command::DismissToast => {
                if let Some(toast) = self.toast.as_mut() {
                    toast.dismiss();
                }
            }
        }
    }

    /// Runs the tick if one is due and returns what it did.
    pub fn update(&mut self, now: f64) -> Option<StepOutcome> {
        self.ticker.set_period(self.game.speed(), now);
        if self.game.is_over() || !self.ticker.poll(now) {
            return None;
        }

        let outcome = self.game.step(&mut self.source);
        match outcome {
            StepOutcome::Grew { apple } => {
                debug!("apple eaten, length {}, next apple at {}", self.game.snake().len(), apple);
            }
            StepOutcome::Collided => {
                self.log_game_over("self collision");
                self.toast = Some(Toast::new(TOAST_TITLE, TOAST_DESCRIPTION, TOAST_DURATION, now));
            }
            StepOutcome::BoardFull => self.log_game_over("board full"),
            StepOutcome::Moved | StepOutcome::Halted => {}
        }
        Some(outcome)
    }

    fn log_game_over(&self, reason: &str) {
        match serde_json::to_string(&self.game.snapshot()) {
            Ok(state) => info!("game over ({}): {}", reason, state),
            Err(err) => warn!("game over ({}), snapshot failed: {}", reason, err),
        }
    }
}
