//! Title Screen Component
//!
//! Shows the game logo above a single START button. Clicking inside the
//! button begins play; the hit-test itself lives on `GameSession` so this
//! component only needs the button bounds for drawing.

use crate::collision::Bounds;
use crate::render::to_rect;
use crate::text::{draw_centered_text, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Configuration for title screen appearance
#[derive(Debug, Clone)]
pub struct StartScreenStyle {
    pub background_color: Color,

    /// Logo box (x, y, width, height) in logical pixels
    pub logo_area: (i32, i32, u32, u32),

    pub button_color: Color,

    pub border_color: Color,

    /// Border thickness (draws double border if > 1)
    pub border_thickness: u32,

    pub label_color: Color,

    pub label_scale: u32,
}

impl Default for StartScreenStyle {
    fn default() -> Self {
        StartScreenStyle {
            background_color: Color::RGB(92, 148, 252),
            logo_area: (250, 40, 300, 180),
            button_color: Color::RGB(200, 40, 30),
            border_color: Color::RGB(255, 255, 255),
            border_thickness: 2,
            label_color: Color::RGB(255, 255, 255),
            label_scale: 4,
        }
    }
}

pub struct StartScreen {
    style: StartScreenStyle,
}

impl StartScreen {
    pub fn new() -> Self {
        StartScreen {
            style: StartScreenStyle::default(),
        }
    }

    /// Render logo and button
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        logo: &Texture,
        button: &Bounds,
    ) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.clear();

        let (x, y, w, h) = self.style.logo_area;
        canvas.copy(logo, None, Rect::new(x, y, w, h))?;

        let button_rect = to_rect(button);
        canvas.set_draw_color(self.style.button_color);
        canvas.fill_rect(button_rect)?;

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(button_rect)?;
        if self.style.border_thickness > 1 && button_rect.width() > 4 && button_rect.height() > 4 {
            canvas.draw_rect(Rect::new(
                button_rect.x() + 2,
                button_rect.y() + 2,
                button_rect.width() - 4,
                button_rect.height() - 4,
            ))?;
        }

        let label_height = (GLYPH_HEIGHT * self.style.label_scale) as i32;
        draw_centered_text(
            canvas,
            "START",
            button_rect.center().x(),
            button_rect.center().y() - label_height / 2,
            self.style.label_color,
            self.style.label_scale,
        )?;

        Ok(())
    }
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}
