use game::{App, GameConfig};
use macroquad::{
    input::{
        is_mouse_button_pressed, is_quit_requested, mouse_position, prevent_quit, MouseButton,
    },
    time::get_frame_time,
    window::{next_frame, Conf},
};
use rand::thread_rng;

mod cards;
mod game;
mod layout;
mod ui;

pub type Res<T> = Result<T, String>;

pub fn err<T, S: ToString>(message: S) -> Res<T> {
    Err(message.to_string())
}

fn window_conf() -> Conf {
    Conf {
        window_title: String::from("NBA Pack Opener"),
        window_width: layout::WINDOW_WIDTH,
        window_height: layout::WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    const USAGE: &str = "Usage: pack-opener [data path]";

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match std::env::args().nth(1) {
        Some(arg) if arg == "-h" || arg == "--help" => {
            println!("{USAGE}");
            return;
        }
        Some(data) => GameConfig::with_data_dir(data),
        None => GameConfig::new(),
    };
    tracing::debug!("Starting with {config:?}.");

    let mut app = match App::load(&config) {
        Ok(app) => app,
        Err(e) => panic!("Failed to load game data: {e}"),
    };

    // Closing the window saves first.
    prevent_quit();

    let rng = &mut thread_rng();
    loop {
        app.update(get_frame_time());
        ui::draw(&app);

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            app.handle_click(x, y, rng);
        }

        if is_quit_requested() {
            app.persist();
            break;
        }

        next_frame().await;
    }
}
