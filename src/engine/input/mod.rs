// Input handling system
//
// - `action`: demo actions and default key bindings
// - `config`: key binding configuration and remapping
// - `manager`: tracks held actions from winit keyboard events
//
// ```ignore
// let mut input = InputManager::default();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per tick
// let movement = input.movement();
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;

pub use action::Action;
pub use config::InputConfig;
pub use manager::{InputManager, MovementInput};
