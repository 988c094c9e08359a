// GameSession: the Start -> Playing -> GameOver -> Playing state machine
//
// The session owns the world and the current GameState. Input arrives as
// GameActions (one-shot) plus held movement keys once per tick; the session
// decides which actions mean anything in the current state.

use log::{debug, info};

use crate::collision::Bounds;
use crate::input_system::GameAction;

use super::constants::START_BUTTON;
use super::types::{GameEvent, GameState, TickInput};
use super::world::GameWorld;

pub struct GameSession {
    state: GameState,
    pub world: GameWorld,
    start_button: Bounds,
    /// Jump pressed since the last tick
    pending_jump: bool,
    running: bool,
}

impl GameSession {
    pub fn new() -> Self {
        let (x, y, w, h) = START_BUTTON;
        GameSession {
            state: GameState::Start,
            world: GameWorld::new(),
            start_button: Bounds::new(x, y, w, h),
            pending_jump: false,
            running: true,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// False once a quit has been requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start_button(&self) -> Bounds {
        self.start_button
    }

    /// Route a one-shot action according to the current state
    pub fn handle_action(&mut self, action: &GameAction) {
        match action {
            GameAction::Quit => self.quit(),
            GameAction::Click(x, y) => {
                self.click(*x as f32, *y as f32);
            }
            GameAction::Jump => {
                if self.state == GameState::Playing {
                    self.pending_jump = true;
                }
            }
            GameAction::Restart => {
                self.restart();
            }
        }
    }

    /// Start the game if the click lands on the start button.
    ///
    /// Only meaningful on the start screen. Returns `true` if the game started.
    pub fn click(&mut self, x: f32, y: f32) -> bool {
        if self.state != GameState::Start || !self.start_button.contains_point(x, y) {
            return false;
        }
        info!("Start button pressed, game starting");
        self.state = GameState::Playing;
        true
    }

    /// Leave the game-over screen and play again from the level start.
    ///
    /// Only honoured in `GameOver`. Returns `true` if the restart happened.
    pub fn restart(&mut self) -> bool {
        if self.state != GameState::GameOver {
            return false;
        }
        self.world.reset_after_death();
        self.pending_jump = false;
        self.state = GameState::Playing;
        info!("Restarted (high score {})", self.world.high_score());
        true
    }

    pub fn quit(&mut self) {
        if self.running {
            info!("Quit requested in {:?} state", self.state);
        }
        self.running = false;
    }

    /// Advance one tick. The world only moves while `Playing`.
    pub fn tick(&mut self, left: bool, right: bool) -> Vec<GameEvent> {
        if self.state != GameState::Playing || !self.running {
            return Vec::new();
        }

        let input = TickInput {
            left,
            right,
            jump: std::mem::take(&mut self.pending_jump),
        };
        let events = self.world.step(&input);

        for event in &events {
            match event {
                GameEvent::Died { enemy } => self.enter_game_over(*enemy),
                GameEvent::Scored { enemy } => {
                    debug!("Cleared enemy {}, score {}", enemy, self.world.score());
                }
                GameEvent::Jumped => {}
            }
        }

        events
    }

    fn enter_game_over(&mut self, enemy: usize) {
        self.world.scoreboard.record_high_score();
        self.state = GameState::GameOver;
        info!(
            "Hit enemy {} at {:?}: game over with score {} (high score {})",
            enemy,
            self.world.player.position(),
            self.world.score(),
            self.world.high_score()
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session() -> GameSession {
        let mut session = GameSession::new();
        assert!(session.click(400.0, 290.0));
        session
    }

    /// Walk right into the enemies until the game ends
    fn run_until_game_over(session: &mut GameSession) {
        for _ in 0..600 {
            session.tick(false, true);
            if session.state() == GameState::GameOver {
                return;
            }
        }
        panic!("player never touched an enemy");
    }

    #[test]
    fn test_starts_on_title_screen() {
        let mut session = GameSession::new();
        assert_eq!(session.state(), GameState::Start);

        // Nothing moves before the game starts
        let before = session.world.player.position();
        assert!(session.tick(false, true).is_empty());
        assert_eq!(session.world.player.position(), before);
    }

    #[test]
    fn test_click_outside_button_ignored() {
        let mut session = GameSession::new();

        assert!(!session.click(10.0, 10.0));
        session.handle_action(&GameAction::Click(299, 280));
        assert_eq!(session.state(), GameState::Start);

        session.handle_action(&GameAction::Click(300, 260));
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut session = GameSession::new();
        assert!(!session.restart());
        assert_eq!(session.state(), GameState::Start);

        let mut session = playing_session();
        session.handle_action(&GameAction::Restart);
        assert_eq!(session.state(), GameState::Playing);
        assert!(!session.restart());
    }

    #[test]
    fn test_jump_action_reaches_player() {
        let mut session = playing_session();
        session.tick(false, false);
        assert!(session.world.player.grounded);

        session.handle_action(&GameAction::Jump);
        let events = session.tick(false, false);

        assert_eq!(events, vec![GameEvent::Jumped]);
        assert!(session.world.player.velocity_y < 0.0);

        // The request is consumed by the tick
        let events = session.tick(false, false);
        assert!(events.is_empty());
    }

    #[test]
    fn test_jump_ignored_outside_playing() {
        let mut session = GameSession::new();
        session.handle_action(&GameAction::Jump);
        session.click(400.0, 290.0);
        session.tick(false, false);

        assert!(session.world.player.grounded);
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut session = playing_session();
        run_until_game_over(&mut session);

        let frozen_player = session.world.player.clone();
        let frozen_enemies = session.world.enemies.clone();
        for _ in 0..30 {
            assert!(session.tick(true, false).is_empty());
        }

        assert_eq!(session.world.player, frozen_player);
        assert_eq!(session.world.enemies, frozen_enemies);
    }

    #[test]
    fn test_death_updates_high_score() {
        let mut session = playing_session();
        session.world.scoreboard.high_score = 2;
        session.world.scoreboard.score = 5;
        run_until_game_over(&mut session);

        // Final score is still shown on the game-over screen
        assert_eq!(session.world.score(), 5);
        assert_eq!(session.world.high_score(), 5);

        session.restart();
        session.world.scoreboard.score = 1;
        run_until_game_over(&mut session);
        assert_eq!(session.world.high_score(), 5);
    }

    #[test]
    fn test_quit_honoured_in_every_state() {
        let mut session = GameSession::new();
        session.handle_action(&GameAction::Quit);
        assert!(!session.is_running());

        let mut session = playing_session();
        session.handle_action(&GameAction::Quit);
        assert!(!session.is_running());
        assert!(session.tick(false, true).is_empty());

        let mut session = playing_session();
        run_until_game_over(&mut session);
        session.handle_action(&GameAction::Quit);
        assert!(!session.is_running());
    }

    #[test]
    fn test_full_round_trip() {
        let mut session = GameSession::new();
        assert_eq!(session.state(), GameState::Start);

        session.handle_action(&GameAction::Click(400, 290));
        assert_eq!(session.state(), GameState::Playing);

        session.world.scoreboard.score = 3;
        run_until_game_over(&mut session);
        assert_eq!(session.state(), GameState::GameOver);
        assert_eq!(session.world.high_score(), 3);

        session.handle_action(&GameAction::Restart);
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.world.score(), 0);
        assert_eq!(session.world.high_score(), 3);
        assert_eq!(session.world.player.position(), (50.0, 350.0));
        for enemy in &session.world.enemies {
            assert_eq!((enemy.body.x, enemy.body.y), enemy.start_position());
            assert!(enemy.speed > 0.0);
            assert!(!enemy.scored);
        }
    }
}
