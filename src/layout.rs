//! Screen geometry. Pure arithmetic so it can be tested without a window.
use crate::consts::{
    BUTTON_HEIGHT, BUTTON_MARGIN, BUTTON_WIDTH, RESTART_WIDTH, SECTION_GAP, TILE_SIZE,
    TOAST_CLOSE_SIZE, TOAST_HEIGHT, TOAST_WIDTH,
};
use crate::direction::Direction;
use crate::grid::Grid;
use macroquad::math::{Rect, Vec2, vec2};

#[derive(Clone, Debug)]
pub struct Layout {
    grid: Grid,
    /// Top-left corner of the board
    pub origin: Vec2,
    pub buttons: [(Direction, Rect); 4],
    pub restart: Rect,
    pub toast: Rect,
    pub toast_close: Rect,
}

impl Layout {
    /// Board centered horizontally, with the direction buttons, the
    /// restart button and the toast slot stacked underneath. The whole
    /// column is centered vertically, so the toast never covers the board.
    pub fn compute(screen_w: f32, screen_h: f32, grid: Grid) -> Self {
        let board = grid.size() as f32 * TILE_SIZE;
        let column_h = board
            + SECTION_GAP
            + BUTTON_HEIGHT
            + SECTION_GAP
            + BUTTON_HEIGHT
            + SECTION_GAP
            + TOAST_HEIGHT;
        let top = ((screen_h - column_h) * 0.5).max(0.0);
        let origin = vec2(((screen_w - board) * 0.5).max(0.0), top);

        let slot = BUTTON_WIDTH + 2.0 * BUTTON_MARGIN;
        let row_x = (screen_w - slot * Direction::ALL.len() as f32) * 0.5;
        let row_y = top + board + SECTION_GAP;
        let buttons = std::array::from_fn(|i| {
            let rect = Rect::new(
                row_x + i as f32 * slot + BUTTON_MARGIN,
                row_y,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            );
            (Direction::ALL[i], rect)
        });

        let restart = Rect::new(
            (screen_w - RESTART_WIDTH) * 0.5,
            row_y + BUTTON_HEIGHT + SECTION_GAP,
            RESTART_WIDTH,
            BUTTON_HEIGHT,
        );

        let toast = Rect::new(
            (screen_w - TOAST_WIDTH) * 0.5,
            restart.y + restart.h + SECTION_GAP,
            TOAST_WIDTH,
            TOAST_HEIGHT,
        );
        let toast_close = Rect::new(
            toast.x + toast.w - TOAST_CLOSE_SIZE - 6.0,
            toast.y + 6.0,
            TOAST_CLOSE_SIZE,
            TOAST_CLOSE_SIZE,
        );

        Self {
            grid,
            origin,
            buttons,
            restart,
            toast,
            toast_close,
        }
    }

    pub fn tile_rect(&self, cell: usize) -> Rect {
        let (row, col) = self.grid.row_col(cell);
        Rect::new(
            self.origin.x + col as f32 * TILE_SIZE,
            self.origin.y + row as f32 * TILE_SIZE,
            TILE_SIZE,
            TILE_SIZE,
        )
    }

    pub fn button_at(&self, point: Vec2) -> Option<Direction> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(d, _)| *d)
    }
}
