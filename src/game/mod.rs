// Game-side modules: sprites and the demo walker

pub mod sprites;
pub mod walker;
