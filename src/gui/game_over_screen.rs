//! Game Over Screen Component
//!
//! Replaces the playing field after the player touches an enemy. Shows the
//! final score and the high score and waits for the restart key; there is no
//! timer, the session stays in GameOver until R is pressed.

use crate::text::draw_centered_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub background_color: Color,

    /// "GAME OVER" text color
    pub title_color: Color,

    /// Score lines color
    pub score_color: Color,

    /// Instruction text color
    pub instruction_color: Color,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            background_color: Color::RGB(0, 0, 0),
            title_color: Color::RGB(255, 255, 255),
            score_color: Color::RGB(255, 255, 100),
            instruction_color: Color::RGB(150, 150, 160),
        }
    }
}

/// Lines shown on the game over screen, top to bottom
pub fn game_over_lines(score: u32, high_score: u32) -> [String; 4] {
    [
        "GAME OVER".to_string(),
        format!("SCORE: {}", score),
        format!("HIGH SCORE: {}", high_score),
        "PRESS R TO RESTART".to_string(),
    ]
}

pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, score: u32, high_score: u32) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.clear();

        // Use logical size (game coordinates), not physical window size
        let (screen_width, screen_height) = canvas.logical_size();
        let center_x = (screen_width / 2) as i32;
        let center_y = (screen_height / 2) as i32;

        let [title, score_line, high_score_line, instructions] = game_over_lines(score, high_score);

        draw_centered_text(canvas, &title, center_x, center_y - 100, self.style.title_color, 5)?;
        draw_centered_text(canvas, &score_line, center_x, center_y - 30, self.style.score_color, 3)?;
        draw_centered_text(canvas, &high_score_line, center_x, center_y + 5, self.style.score_color, 3)?;
        draw_centered_text(
            canvas,
            &instructions,
            center_x,
            center_y + 70,
            self.style.instruction_color,
            2,
        )?;

        Ok(())
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
