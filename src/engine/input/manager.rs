// Input manager - turns window key events into action state

use super::action::Action;
use super::config::InputConfig;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Snapshot of which movement directions are held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementInput {
    /// Check if no direction is held
    pub fn is_idle(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Tracks held and freshly pressed actions
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,

    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions pressed since the last update
    just_pressed: HashSet<Action>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key codes
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a key press or release
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(key) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                // Key repeats don't count as new presses
                if !repeat && self.pressed.insert(action) {
                    self.just_pressed.insert(action);
                }
            }
            ElementState::Released => {
                self.pressed.remove(&action);
            }
        }
    }

    /// Clear per-tick state; call once per tick after reading input
    pub fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Check if an action is held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last update
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Held movement directions
    pub fn movement(&self) -> MovementInput {
        MovementInput {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            up: self.is_pressed(Action::MoveUp),
            down: self.is_pressed(Action::MoveDown),
        }
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}
