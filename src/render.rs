/// World and HUD rendering
///
/// Draws the playing field in a fixed order: scrolling background, platforms,
/// enemies, player, then the score overlay. Simulation positions are `f32`;
/// everything is rounded to whole pixels only here, at the SDL boundary.
///
/// # Usage Example
///
/// ```rust
/// let textures = Textures::load(&texture_creator, &asset_paths)?;
/// render_world(&mut canvas, &textures, &session.world)?;
/// render_hud(&mut canvas, &session.world)?;
/// ```
use crate::assets::{
    AssetError, AssetPaths, BACKGROUND_TEXTURE, BLOCK_TEXTURE, BLUE_ENEMY_TEXTURE, LOGO_TEXTURE,
    PLAYER_TEXTURE, RED_ENEMY_TEXTURE,
};
use crate::collision::Bounds;
use crate::enemy::EnemyKind;
use crate::game::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::GameWorld;
use crate::text::draw_simple_text;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

const HUD_COLOR: Color = Color::RGB(0, 0, 0);
const HUD_SCALE: u32 = 2;

/// Every sprite the game draws, loaded once at startup
pub struct Textures<'a> {
    pub player: Texture<'a>,
    pub background: Texture<'a>,
    pub block: Texture<'a>,
    pub red_enemy: Texture<'a>,
    pub blue_enemy: Texture<'a>,
    pub logo: Texture<'a>,
}

impl<'a> Textures<'a> {
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        assets: &AssetPaths,
    ) -> Result<Self, AssetError> {
        Ok(Textures {
            player: load_texture(texture_creator, assets, PLAYER_TEXTURE)?,
            background: load_texture(texture_creator, assets, BACKGROUND_TEXTURE)?,
            block: load_texture(texture_creator, assets, BLOCK_TEXTURE)?,
            red_enemy: load_texture(texture_creator, assets, RED_ENEMY_TEXTURE)?,
            blue_enemy: load_texture(texture_creator, assets, BLUE_ENEMY_TEXTURE)?,
            logo: load_texture(texture_creator, assets, LOGO_TEXTURE)?,
        })
    }

    fn enemy(&self, kind: EnemyKind) -> &Texture<'a> {
        match kind {
            EnemyKind::Red => &self.red_enemy,
            EnemyKind::Blue => &self.blue_enemy,
        }
    }
}

/// Generic texture loading helper
///
/// Loads a texture from the asset directory with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    assets: &AssetPaths,
    name: &str,
) -> Result<Texture<'a>, AssetError> {
    let path = assets.path(name);
    texture_creator
        .load_texture(&path)
        .map_err(|reason| AssetError::LoadFailed { path, reason })
}

/// Round a simulation rectangle to the pixel grid
pub fn to_rect(bounds: &Bounds) -> Rect {
    Rect::new(
        bounds.x.round() as i32,
        bounds.y.round() as i32,
        bounds.width.round().max(1.0) as u32,
        bounds.height.round().max(1.0) as u32,
    )
}

/// The two background copies: one at the scroll offset, one just right of it
pub fn background_rects(background_x: f32) -> [Rect; 2] {
    let x = background_x.round() as i32;
    let (w, h) = (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    [Rect::new(x, 0, w, h), Rect::new(x + w as i32, 0, w, h)]
}

/// Draw background, platforms, enemies and the player
pub fn render_world(
    canvas: &mut Canvas<Window>,
    textures: &Textures,
    world: &GameWorld,
) -> Result<(), String> {
    for rect in background_rects(world.background_x) {
        canvas.copy(&textures.background, None, rect)?;
    }

    for block in &world.blocks {
        canvas.copy(&textures.block, None, to_rect(&block.body.bounds()))?;
    }

    for enemy in &world.enemies {
        canvas.copy(textures.enemy(enemy.kind), None, to_rect(&enemy.body.bounds()))?;
    }

    canvas.copy(&textures.player, None, to_rect(&world.player.body.bounds()))?;

    Ok(())
}

/// Score and high score, top-left
pub fn render_hud(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    draw_simple_text(
        canvas,
        &format!("SCORE: {}", world.score()),
        10,
        10,
        HUD_COLOR,
        HUD_SCALE,
    )?;
    draw_simple_text(
        canvas,
        &format!("HIGH SCORE: {}", world.high_score()),
        10,
        40,
        HUD_COLOR,
        HUD_SCALE,
    )?;
    Ok(())
}
