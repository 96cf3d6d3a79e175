use crate::consts::{
    APPLE_COLOR, BACKGROUND_COLOR, BORDER_COLOR, BUTTON_COLOR, BUTTON_DISABLED_COLOR,
    BUTTON_TEXT_COLOR, EMPTY_COLOR, RESTART_COLOR, SNAKE_COLOR, TILE_BORDER, TOAST_ERROR_COLOR,
    TOAST_TEXT_COLOR,
};
use crate::game::Game;
use crate::input::Command;
use crate::layout::Layout;
use crate::toast::Toast;
use macroquad::prelude::*;

fn draw_button(rect: Rect, label: &str, fill: Color, text: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    let m = measure_text(label, None, 20, 1.0);
    draw_text(
        label,
        rect.x + (rect.w - m.width) * 0.5,
        rect.y + (rect.h + m.height) * 0.5,
        20.0,
        text,
    );
}

pub fn draw_board(game: &Game, layout: &Layout) {
    for cell in 0..game.grid().cell_count() {
        let r = layout.tile_rect(cell);
        let fill = if game.occupies(cell) {
            SNAKE_COLOR
        } else if cell == game.apple() {
            APPLE_COLOR
        } else {
            EMPTY_COLOR
        };
        draw_rectangle(r.x, r.y, r.w, r.h, fill);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, TILE_BORDER, BORDER_COLOR);
    }
}

/// Direction buttons are greyed out once the game is over; the restart
/// button only appears then.
pub fn draw_controls(game: &Game, layout: &Layout) {
    let (fill, text) = if game.is_over() {
        (BUTTON_DISABLED_COLOR, GRAY)
    } else {
        (BUTTON_COLOR, BUTTON_TEXT_COLOR)
    };
    for (direction, rect) in &layout.buttons {
        draw_button(*rect, direction.label(), fill, text);
    }
    if game.is_over() {
        draw_button(layout.restart, "Restart Game", RESTART_COLOR, WHITE);
    }
}

pub fn draw_toast(toast: &Toast, layout: &Layout) {
    let r = layout.toast;
    draw_rectangle(r.x, r.y, r.w, r.h, TOAST_ERROR_COLOR);
    draw_text(&toast.title, r.x + 12.0, r.y + 26.0, 24.0, TOAST_TEXT_COLOR);
    draw_text(&toast.description, r.x + 12.0, r.y + 50.0, 18.0, TOAST_TEXT_COLOR);

    let c = layout.toast_close;
    draw_line(c.x, c.y, c.x + c.w, c.y + c.h, 2.0, TOAST_TEXT_COLOR);
    draw_line(c.x + c.w, c.y, c.x, c.y + c.h, 2.0, TOAST_TEXT_COLOR);
}

pub fn draw(game: &Game, toast: Option<&Toast>, layout: &Layout) {
    clear_background(BACKGROUND_COLOR);
    draw_board(game, layout);
    draw_controls(game, layout);
    if let Some(toast) = toast {
        draw_toast(toast, layout);
    }
}

/// Turns a click at `point` into a command. Disabled and hidden buttons
/// do not respond.
pub fn hit_test(game: &Game, toast_visible: bool, layout: &Layout, point: Vec2) -> Option<Command> {
    if toast_visible && layout.toast_close.contains(point) {
        return Some(Command::DismissToast);
    }
    if game.is_over() {
        return layout.restart.contains(point).then_some(Command::Restart);
    }
    layout.button_at(point).map(Command::Turn)
}

pub fn poll_mouse(game: &Game, toast_visible: bool, layout: &Layout) -> Option<Command> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    let (x, y) = mouse_position();
    hit_test(game, toast_visible, layout, vec2(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::game::{CellSource, StepOutcome};

    struct Fixed(usize);

    impl CellSource for Fixed {
        fn pick(&mut self, _: usize) -> usize {
            self.0
        }
    }

    fn layout(game: &Game) -> Layout {
        Layout::compute(800.0, 600.0, game.grid())
    }

    fn crashed() -> Game {
        let grid = crate::grid::Grid::new(20);
        let mut game = Game::from_parts(grid, &[1, 21, 20, 0], 100, Direction::Left).unwrap();
        assert_eq!(game.step(&mut Fixed(50)), StepOutcome::Collided);
        game
    }

    #[test]
    fn direction_buttons_turn_while_running() {
        let game = Game::new();
        let l = layout(&game);
        let (d, rect) = l.buttons[0];
        assert_eq!(hit_test(&game, false, &l, rect.center()), Some(Command::Turn(d)));
        assert_eq!(hit_test(&game, false, &l, l.restart.center()), None);
    }

    #[test]
    fn only_restart_responds_after_game_over() {
        let game = crashed();
        let l = layout(&game);
        for (_, rect) in l.buttons {
            assert_eq!(hit_test(&game, false, &l, rect.center()), None);
        }
        assert_eq!(hit_test(&game, false, &l, l.restart.center()), Some(Command::Restart));
    }

    #[test]
    fn close_box_dismisses_visible_toast() {
        let game = crashed();
        let l = layout(&game);
        let p = l.toast_close.center();
        assert_eq!(hit_test(&game, true, &l, p), Some(Command::DismissToast));
        assert_eq!(hit_test(&game, false, &l, p), None);
    }
}
