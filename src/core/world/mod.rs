//=========================================================================
// Level World
//
// Everything that exists inside one level instance.
//
// Responsibilities:
// - Hold the player, enemies and categorized sprites of the level
// - Remember the spawn point and map extent used by progression rules
//
// Notes:
// A level world is rebuilt from its description on every setup; nothing
// carries over between instances except what the session keeps.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod animation;
pub mod category;
pub mod entity;

//=== Public API ==========================================================

pub use animation::{update_animation, AnimationTable};
pub use category::{Category, CategorySets, Sprite, SpriteHandle, TravelBounds};
pub use entity::{
    Animation, AnimationState, EnemyKind, Entity, EntityKind, Facing, PatrolBounds,
};

//=== Rect ================================================================

/// Axis-aligned rectangle around a center point, y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x - self.width * 0.5
    }

    pub fn right(&self) -> f32 {
        self.x + self.width * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.height * 0.5
    }

    pub fn top(&self) -> f32 {
        self.y + self.height * 0.5
    }

    /// Strict overlap; touching edges do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }
}

//=== LevelWorld ==========================================================

/// One built level instance.
#[derive(Debug, Clone)]
pub struct LevelWorld {
    pub index: u32,
    pub spawn: (f32, f32),
    /// Horizontal extent in pixels; reaching it completes the level.
    pub map_width: f32,
    pub background_color: Option<(u8, u8, u8)>,

    pub categories: CategorySets,
    pub enemies: Vec<Entity>,
    /// Foreground/background sprites, presentation only.
    pub decorations: Vec<Sprite>,

    pub player: Entity,
}

impl LevelWorld {
    /// Creates an empty level with the player standing on the spawn point.
    pub fn new(index: u32, spawn: (f32, f32), map_width: f32, player: Entity) -> Self {
        Self {
            index,
            spawn,
            map_width,
            background_color: None,
            categories: CategorySets::new(),
            enemies: Vec::new(),
            decorations: Vec::new(),
            player,
        }
    }

    /// Puts the player back on the spawn point at rest.
    pub fn respawn_player(&mut self) {
        let spawn = self.spawn;
        self.player.place_at(spawn);
    }

    /// Collision boxes of a category, enemies included.
    pub fn bounds_of(&self, category: Category) -> Vec<(SpriteHandle, Rect)> {
        match category {
            Category::Enemy => self
                .enemies
                .iter()
                .filter(|e| self.categories.contains(Category::Enemy, e.handle))
                .map(|e| (e.handle, e.hitbox()))
                .collect(),
            other => self
                .categories
                .iter(other)
                .map(|s| (s.handle, s.bounds))
                .collect(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> LevelWorld {
        let player = Entity::player(SpriteHandle(0), (50.0, 60.0), (32.0, 64.0), 2);
        LevelWorld::new(1, (50.0, 60.0), 1000.0, player)
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 4.0, 8.0);
        assert_eq!((r.left(), r.right()), (8.0, 12.0));
        assert_eq!((r.bottom(), r.top()), (16.0, 24.0));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(9.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn respawn_resets_position_and_velocity() {
        let mut w = world();
        w.player.x = 700.0;
        w.player.change_y = -12.0;

        w.respawn_player();

        assert_eq!(w.player.position(), (50.0, 60.0));
        assert_eq!(w.player.velocity(), (0.0, 0.0));
    }

    #[test]
    fn enemy_bounds_follow_entities() {
        let mut w = world();
        let mut enemy = Entity::enemy(
            SpriteHandle(5),
            EnemyKind::Robot,
            Rect::new(100.0, 10.0, 20.0, 20.0),
            None,
            2.0,
        );
        w.categories.register(enemy.handle, Category::Enemy).unwrap();
        enemy.x = 120.0;
        w.enemies.push(enemy);

        let bounds = w.bounds_of(Category::Enemy);
        assert_eq!(bounds, vec![(SpriteHandle(5), Rect::new(120.0, 10.0, 20.0, 20.0))]);
    }
}
