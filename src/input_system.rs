use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

use crate::game::{GameState, TickInput};

/// One-shot actions the player can trigger
///
/// Held movement keys are not actions; they are sampled from the keyboard
/// state once per tick (see [`held_movement`]).
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    Jump,
    Restart,
    /// Left mouse click at logical screen coordinates
    Click(i32, i32),
    Quit,
}

/// Input context determines which actions are available
///
/// Each game state only listens for the inputs that mean something there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Title screen - start button clicks
    Start,
    /// Normal gameplay - jumping
    Playing,
    /// Game over screen - restart key
    GameOver,
}

impl From<GameState> for InputContext {
    fn from(state: GameState) -> Self {
        match state {
            GameState::Start => InputContext::Start,
            GameState::Playing => InputContext::Playing,
            GameState::GameOver => InputContext::GameOver,
        }
    }
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Input processing happens in phases:
/// 1. Update the InputContext from the current GameState
/// 2. Poll SDL2 events
/// 3. Filter events based on context
/// 4. Return actions to the game loop
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting on the title screen
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Start,
        }
    }

    /// Call before poll_events() so events are filtered for the right screen
    pub fn update_context(&mut self, state: GameState) {
        self.context = InputContext::from(state);
    }

    /// Drain all pending SDL2 events into GameActions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = self.translate_key(key) {
                        actions.push(action);
                    }
                }
                Event::MouseButtonDown {
                    mouse_btn, x, y, ..
                } => {
                    if let Some(action) = self.translate_click(mouse_btn, x, y) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }

    /// Map a key press to an action for the current context
    pub fn translate_key(&self, key: Keycode) -> Option<GameAction> {
        match (self.context, key) {
            (_, Keycode::Escape) => Some(GameAction::Quit),
            (InputContext::Playing, Keycode::Space) => Some(GameAction::Jump),
            (InputContext::GameOver, Keycode::R) => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Map a mouse press to an action; only the title screen takes clicks
    pub fn translate_click(&self, button: MouseButton, x: i32, y: i32) -> Option<GameAction> {
        match (self.context, button) {
            (InputContext::Start, MouseButton::Left) => Some(GameAction::Click(x, y)),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample the arrow keys currently held down
pub fn held_movement(keyboard: &KeyboardState) -> TickInput {
    TickInput {
        left: keyboard.is_scancode_pressed(Scancode::Left),
        right: keyboard.is_scancode_pressed(Scancode::Right),
        jump: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_in(context: InputContext) -> InputSystem {
        InputSystem { context }
    }

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Start);
    }

    #[test]
    fn test_context_follows_game_state() {
        let mut input = InputSystem::new();

        input.update_context(GameState::Playing);
        assert_eq!(input.context, InputContext::Playing);

        input.update_context(GameState::GameOver);
        assert_eq!(input.context, InputContext::GameOver);

        input.update_context(GameState::Start);
        assert_eq!(input.context, InputContext::Start);
    }

    #[test]
    fn test_space_jumps_only_while_playing() {
        assert_eq!(
            system_in(InputContext::Playing).translate_key(Keycode::Space),
            Some(GameAction::Jump)
        );
        assert_eq!(system_in(InputContext::Start).translate_key(Keycode::Space), None);
        assert_eq!(system_in(InputContext::GameOver).translate_key(Keycode::Space), None);
    }

    #[test]
    fn test_r_restarts_only_on_game_over() {
        assert_eq!(
            system_in(InputContext::GameOver).translate_key(Keycode::R),
            Some(GameAction::Restart)
        );
        assert_eq!(system_in(InputContext::Playing).translate_key(Keycode::R), None);
        assert_eq!(system_in(InputContext::Start).translate_key(Keycode::R), None);
    }

    #[test]
    fn test_escape_quits_in_every_context() {
        for context in [InputContext::Start, InputContext::Playing, InputContext::GameOver] {
            assert_eq!(
                system_in(context).translate_key(Keycode::Escape),
                Some(GameAction::Quit)
            );
        }
    }

    #[test]
    fn test_clicks_only_on_title_screen() {
        assert_eq!(
            system_in(InputContext::Start).translate_click(MouseButton::Left, 320, 280),
            Some(GameAction::Click(320, 280))
        );
        assert_eq!(
            system_in(InputContext::Start).translate_click(MouseButton::Right, 320, 280),
            None
        );
        assert_eq!(
            system_in(InputContext::Playing).translate_click(MouseButton::Left, 320, 280),
            None
        );
    }
}
