// Key binding configuration and remapping

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);

        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Unbind a key
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Unbind every key for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(keys) = self.action_to_keys.remove(&action) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Get all keys bound to an action
    pub fn get_keys(&self, action: Action) -> Vec<KeyCode> {
        self.action_to_keys
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_keys.contains_key(&action)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_keys.clear();
    }

    /// Reset to default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (key, action) in default_bindings() {
            self.bind(key, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InputConfig::default();
        assert_eq!(config.get_action(KeyCode::ArrowLeft), Some(Action::MoveLeft));
        assert_eq!(config.get_action(KeyCode::KeyW), Some(Action::MoveUp));
        assert_eq!(config.get_action(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_rebind_key_moves_action() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::KeyA, Action::MoveRight);

        assert_eq!(config.get_action(KeyCode::KeyA), Some(Action::MoveRight));
        assert_eq!(config.get_keys(Action::MoveLeft), vec![KeyCode::ArrowLeft]);
        assert_eq!(config.get_keys(Action::MoveRight).len(), 3);
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::default();
        config.unbind_action(Action::Quit);

        assert!(!config.has_binding(Action::Quit));
        assert_eq!(config.get_action(KeyCode::Escape), None);
    }

    #[test]
    fn test_unbind_last_key_drops_action() {
        let mut config = InputConfig::new();
        config.bind(KeyCode::KeyP, Action::Pause);
        config.unbind_key(KeyCode::KeyP);

        assert!(!config.has_binding(Action::Pause));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        config.bind(KeyCode::KeyQ, Action::Quit);

        config.reset_to_defaults();
        assert_eq!(config.get_action(KeyCode::KeyQ), None);
        assert_eq!(config.get_action(KeyCode::Escape), Some(Action::Quit));
    }
}
