/// Collision detection and resolution for the platformer
///
/// This module provides AABB (Axis-Aligned Bounding Box) detection plus the
/// three responses the game needs: landing on platforms, clamping to the floor
/// and clamping to the side walls. Contact with enemies is detection only.
///
/// # Architecture
///
/// - `Bounds`: floating-point rectangle (x, y, width, height), top-left origin
/// - `Collidable` trait: implemented by moving entities (player, enemies)
/// - `StaticCollidable` trait: implemented by immovable platforms
/// - Resolution functions: pure functions over an `Entity` and its velocity
///
/// Intersection is strict: rectangles that only share an edge do not collide.
/// A player resting exactly on a platform top is therefore not "inside" it until
/// gravity pulls it down again on the next tick.
use crate::entity::Entity;

/// Floating-point axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point-in-rectangle test (used for hit-testing mouse clicks).
    ///
    /// Left/top edges are inclusive, right/bottom exclusive, so adjacent
    /// buttons never both claim the same pixel.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Trait for moving entities that participate in collision detection.
///
/// Player and enemies implement this so contact checks can be written once:
///
/// ```rust
/// if let Some(index) = first_collision(&world.player, &world.enemies) {
///     // player touched enemy `index`
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn get_bounds(&self) -> Bounds;
}

/// Trait for static (non-moving) world objects.
///
/// Static objects never move during resolution; only the moving body is
/// pushed out of them.
pub trait StaticCollidable {
    fn get_bounds(&self) -> Bounds;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Touching edges are NOT an intersection.
pub fn aabb_intersect(a: &Bounds, b: &Bounds) -> bool {
    let x_overlap = a.x < b.right() && a.right() > b.x;
    let y_overlap = a.y < b.bottom() && a.bottom() > b.y;

    x_overlap && y_overlap
}

/// Returns the index of the first entity in `entities` that `entity` overlaps.
pub fn first_collision<T: Collidable>(entity: &impl Collidable, entities: &[T]) -> Option<usize> {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .position(|other| aabb_intersect(&entity_bounds, &other.get_bounds()))
}

/// Lands a falling body on the first platform it overlaps.
///
/// Only a downward-moving body (`vy > 0`) can land. On landing the body's
/// bottom is snapped to the platform top and `vy` is zeroed. Platforms are laid
/// out without overlap, so the first match wins and the rest are skipped.
///
/// Returns `true` if a landing happened this call.
pub fn land_on_platforms<P: StaticCollidable>(body: &mut Entity, vy: &mut f32, platforms: &[P]) -> bool {
    if *vy <= 0.0 {
        return false;
    }

    let body_bounds = body.bounds();
    for platform in platforms {
        let platform_bounds = platform.get_bounds();
        if aabb_intersect(&body_bounds, &platform_bounds) {
            body.set_bottom(platform_bounds.y);
            *vy = 0.0;
            return true;
        }
    }

    false
}

/// Stops a body from sinking below the floor line.
///
/// Fires when the bottom edge is at or below `floor_y`, regardless of what
/// the platform pass decided. Returns `true` if the clamp fired.
pub fn clamp_to_floor(body: &mut Entity, vy: &mut f32, floor_y: f32) -> bool {
    if body.bottom() >= floor_y {
        body.set_bottom(floor_y);
        *vy = 0.0;
        return true;
    }
    false
}

/// Hard-clamps a body horizontally into `[0, screen_width]`.
pub fn clamp_to_walls(body: &mut Entity, screen_width: f32) {
    if body.left() < 0.0 {
        body.x = 0.0;
    }
    if body.right() > screen_width {
        body.set_right(screen_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Platform(Bounds);

    impl StaticCollidable for Platform {
        fn get_bounds(&self) -> Bounds {
            self.0
        }
    }

    struct Body(Bounds);

    impl Collidable for Body {
        fn get_bounds(&self) -> Bounds {
            self.0
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let a = Bounds::new(0.0, 0.0, 32.0, 32.0);
        let b = Bounds::new(16.0, 16.0, 32.0, 32.0);

        assert!(aabb_intersect(&a, &b));
        assert!(aabb_intersect(&b, &a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let a = Bounds::new(0.0, 0.0, 32.0, 32.0);
        let right = Bounds::new(32.0, 0.0, 32.0, 32.0);
        let below = Bounds::new(0.0, 32.0, 32.0, 32.0);

        assert!(!aabb_intersect(&a, &right));
        assert!(!aabb_intersect(&a, &below));
    }

    #[test]
    fn test_aabb_intersect_separated_and_contained() {
        let large = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let small = Bounds::new(25.0, 25.0, 50.0, 50.0);
        let far = Bounds::new(200.0, 200.0, 10.0, 10.0);

        assert!(aabb_intersect(&large, &small));
        assert!(!aabb_intersect(&large, &far));
    }

    #[test]
    fn test_contains_point_edges() {
        let button = Bounds::new(300.0, 260.0, 200.0, 60.0);

        assert!(button.contains_point(300.0, 260.0));
        assert!(button.contains_point(499.0, 319.0));
        assert!(!button.contains_point(500.0, 280.0));
        assert!(!button.contains_point(350.0, 320.0));
        assert!(!button.contains_point(10.0, 10.0));
    }

    #[test]
    fn test_first_collision_reports_index() {
        let player = Body(Bounds::new(100.0, 100.0, 40.0, 60.0));
        let others = vec![
            Body(Bounds::new(0.0, 0.0, 10.0, 10.0)),
            Body(Bounds::new(120.0, 140.0, 80.0, 80.0)),
        ];

        assert_eq!(first_collision(&player, &others), Some(1));
        assert_eq!(first_collision(&player, &others[..1]), None);
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        let platforms = vec![Platform(Bounds::new(400.0, 250.0, 60.0, 40.0))];
        let mut body = Entity::new(410.0, 195.0, 40.0, 60.0); // bottom 255
        let mut vy = 5.0;

        assert!(land_on_platforms(&mut body, &mut vy, &platforms));
        assert_eq!(body.bottom(), 250.0);
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn test_no_landing_while_rising() {
        let platforms = vec![Platform(Bounds::new(400.0, 250.0, 60.0, 40.0))];
        let mut body = Entity::new(410.0, 240.0, 40.0, 60.0);
        let mut vy = -3.0;

        assert!(!land_on_platforms(&mut body, &mut vy, &platforms));
        assert_eq!(body.y, 240.0);
        assert_eq!(vy, -3.0);
    }

    #[test]
    fn test_first_platform_wins() {
        let platforms = vec![
            Platform(Bounds::new(0.0, 100.0, 60.0, 40.0)),
            Platform(Bounds::new(0.0, 90.0, 60.0, 40.0)),
        ];
        let mut body = Entity::new(10.0, 50.0, 40.0, 60.0); // bottom 110, overlaps both
        let mut vy = 2.0;

        assert!(land_on_platforms(&mut body, &mut vy, &platforms));
        assert_eq!(body.bottom(), 100.0);
    }

    #[test]
    fn test_floor_clamp() {
        let mut body = Entity::new(50.0, 350.5, 40.0, 60.0);
        let mut vy = 0.5;

        assert!(clamp_to_floor(&mut body, &mut vy, 400.0));
        assert_eq!(body.bottom(), 400.0);
        assert_eq!(vy, 0.0);

        // Resting exactly on the floor still counts as clamped
        let mut vy = 0.0;
        assert!(clamp_to_floor(&mut body, &mut vy, 400.0));

        let mut airborne = Entity::new(50.0, 100.0, 40.0, 60.0);
        let mut vy = 3.0;
        assert!(!clamp_to_floor(&mut airborne, &mut vy, 400.0));
        assert_eq!(vy, 3.0);
    }

    #[test]
    fn test_wall_clamp() {
        let mut body = Entity::new(-4.0, 0.0, 40.0, 60.0);
        clamp_to_walls(&mut body, 800.0);
        assert_eq!(body.x, 0.0);

        let mut body = Entity::new(765.0, 0.0, 40.0, 60.0);
        clamp_to_walls(&mut body, 800.0);
        assert_eq!(body.right(), 800.0);
    }
}
