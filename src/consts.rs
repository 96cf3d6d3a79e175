//! Game constants. None of these are configurable at runtime.
use crate::direction::Direction;
use macroquad::color::Color;
use std::time::Duration;

pub const GRID_SIZE: usize = 20;
pub const GRID_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Time between snake movements
pub const TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Head first
pub const INITIAL_SNAKE: [usize; 3] = [2, 1, 0];
pub const INITIAL_APPLE: usize = 5;
pub const INITIAL_DIRECTION: Direction = Direction::Right;

// Tiles are drawn at a fixed size with a uniform border
pub const TILE_SIZE: f32 = 20.0;
pub const TILE_BORDER: f32 = 1.0;

pub const BUTTON_WIDTH: f32 = 80.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_MARGIN: f32 = 4.0;
pub const RESTART_WIDTH: f32 = 150.0;
pub const SECTION_GAP: f32 = 16.0;

pub const TOAST_WIDTH: f32 = 320.0;
pub const TOAST_HEIGHT: f32 = 64.0;
pub const TOAST_CLOSE_SIZE: f32 = 20.0;
pub const TOAST_DURATION: Duration = Duration::from_secs(9);
pub const TOAST_TITLE: &str = "Game Over";
pub const TOAST_DESCRIPTION: &str = "You ate yourself!";

// Palette
pub const SNAKE_COLOR: Color = Color::new(0.22, 0.63, 0.41, 1.0); // green
pub const APPLE_COLOR: Color = Color::new(0.90, 0.24, 0.24, 1.0); // red
pub const EMPTY_COLOR: Color = Color::new(0.89, 0.91, 0.94, 1.0); // light gray
pub const BORDER_COLOR: Color = Color::new(0.93, 0.95, 0.97, 1.0);
pub const BACKGROUND_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const BUTTON_COLOR: Color = Color::new(0.93, 0.95, 0.97, 1.0);
pub const BUTTON_DISABLED_COLOR: Color = Color::new(0.93, 0.95, 0.97, 0.4);
pub const BUTTON_TEXT_COLOR: Color = Color::new(0.10, 0.13, 0.17, 1.0);
pub const RESTART_COLOR: Color = Color::new(0.19, 0.59, 0.58, 1.0); // teal
pub const TOAST_ERROR_COLOR: Color = Color::new(0.77, 0.19, 0.19, 1.0);
pub const TOAST_TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
