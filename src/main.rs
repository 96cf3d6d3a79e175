use macroquad::logging::info;
use macroquad::Window;
use macroquad::prelude::*;
use snake_torus::App;
use snake_torus::game::MacroquadRng;
use snake_torus::input::poll_keyboard;
use snake_torus::layout::Layout;
use snake_torus::render;
use snake_torus::settings::Settings;

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.window_title.clone(),
        window_width: 800,
        window_height: 600,
        high_dpi: settings.high_dpi,
        ..Default::default()
    }
}

async fn run(seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| (macroquad::miniquad::date::now() * 1_000_000.0) as u64);
    macroquad::rand::srand(seed);
    info!("session started, seed {}", seed);

    let mut app = App::new(MacroquadRng, get_time());

    // Input first, then the tick, then draw from whatever state results.
    loop {
        let now = get_time();
        let layout = Layout::compute(screen_width(), screen_height(), app.game().grid());

        for command in poll_keyboard() {
            app.apply(command, now);
        }
        let toast_visible = app.toast(now).is_some();
        if let Some(command) = render::poll_mouse(app.game(), toast_visible, &layout) {
            app.apply(command, now);
        }

        app.update(now);
        render::draw(app.game(), app.toast(now), &layout);

        next_frame().await;
    }
}

fn main() {
    // Read once: the window config and the session seed both come from here.
    let settings = Settings::load();
    Window::from_config(window_conf(&settings), run(settings.seed));
}
