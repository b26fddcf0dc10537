// Engine modules: assets, playback timing, input

pub mod assets;
pub mod game_loop;
pub mod input;
