mod game;
mod player;
mod render;

use std::path::Path;

use log::{error, info};
use macroquad::prelude::*;
use touch_gamepad::touch::GamepadConfig;

use game::GameState;

const CONFIG_PATH: &str = "touch-gamepad.toml";

fn window_conf() -> Conf {
    Conf {
        window_title: "🕹️ Touch Gamepad".to_owned(),
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        ..Default::default()
    }
}

fn load_config() -> touch_gamepad::Result<GamepadConfig> {
    if Path::new(CONFIG_PATH).exists() {
        GamepadConfig::load(CONFIG_PATH)
    } else {
        info!("no {CONFIG_PATH}, using default gamepad config");
        Ok(GamepadConfig::default())
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    let mut game = match GameState::new(&config) {
        Ok(game) => game,
        Err(err) => {
            error!("could not set up the virtual gamepad: {err}");
            return;
        }
    };

    loop {
        let dt = get_frame_time();

        // Update game state
        game.update(dt);

        // Draw everything
        game.draw();

        next_frame().await
    }
}
