//=========================================================================
// Collision Categories
//=========================================================================
//
// Named, disjoint sprite groups used for overlap queries.
//
// Architecture:
//   CategorySets
//     ├─ members: HashMap<SpriteHandle, Category>   (who is where)
//     └─ sprites: HashMap<Category, BTreeMap<SpriteHandle, Sprite>>
//
// A handle lives in exactly one category. Removal is permanent for the
// lifetime of the level instance; a level reset rebuilds everything.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::Rect;
use crate::error::{GameError, GameResult};

//=== SpriteHandle ========================================================

/// Stable identifier of one sprite or entity within a level instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteHandle(pub u32);

impl fmt::Display for SpriteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== Category ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Collectible,
    Hazard,
    Enemy,
    LevelEnd,
    Platform,
    MovingPlatform,
    Ladder,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Collectible,
        Category::Hazard,
        Category::Enemy,
        Category::LevelEnd,
        Category::Platform,
        Category::MovingPlatform,
        Category::Ladder,
    ];

    /// Maps a level layer name to its category.
    ///
    /// Returns `Ok(None)` for decoration layers and an error for anything
    /// unrecognized.
    pub fn from_layer(name: &str) -> GameResult<Option<Self>> {
        let category = match name {
            "Coins" => Self::Collectible,
            "Don't Touch" => Self::Hazard,
            "Enemies" => Self::Enemy,
            "End" => Self::LevelEnd,
            "Platforms" => Self::Platform,
            "Moving Platforms" => Self::MovingPlatform,
            "Ladders" => Self::Ladder,
            "Foreground" | "Background" => return Ok(None),
            other => {
                return Err(GameError::UnknownCategory {
                    tag: other.to_string(),
                })
            }
        };
        Ok(Some(category))
    }

    /// Layer name used in level files.
    pub fn layer_name(self) -> &'static str {
        match self {
            Self::Collectible => "Coins",
            Self::Hazard => "Don't Touch",
            Self::Enemy => "Enemies",
            Self::LevelEnd => "End",
            Self::Platform => "Platforms",
            Self::MovingPlatform => "Moving Platforms",
            Self::Ladder => "Ladders",
        }
    }
}

//=== TravelBounds ========================================================

/// Edges a moving platform turns around at. Absent edges never turn it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct TravelBounds {
    #[serde(default)]
    pub left: Option<f32>,
    #[serde(default)]
    pub right: Option<f32>,
    #[serde(default)]
    pub bottom: Option<f32>,
    #[serde(default)]
    pub top: Option<f32>,
}

//=== Sprite ==============================================================

/// Static (or moving) sprite placed by the level.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub handle: SpriteHandle,
    pub bounds: Rect,
    /// Score awarded when collected.
    pub points: u32,
    /// Per-frame velocity for moving platforms; zero otherwise.
    pub velocity: (f32, f32),
    pub travel: TravelBounds,
}

impl Sprite {
    pub fn new(handle: SpriteHandle, bounds: Rect) -> Self {
        Self {
            handle,
            bounds,
            points: 1,
            velocity: (0.0, 0.0),
            travel: TravelBounds::default(),
        }
    }

    //--- step() -----------------------------------------------------------
    //
    // Moves one frame, then reverses each axis whose leading edge has
    // reached or crossed its travel bound.
    //
    pub fn step(&mut self) {
        let (mut dx, mut dy) = self.velocity;
        self.bounds.x += dx;
        self.bounds.y += dy;

        let travel = self.travel;
        if travel.left.is_some_and(|left| self.bounds.left() <= left) {
            dx = dx.abs();
        } else if travel.right.is_some_and(|right| self.bounds.right() >= right) {
            dx = -dx.abs();
        }
        if travel.bottom.is_some_and(|bottom| self.bounds.bottom() <= bottom) {
            dy = dy.abs();
        } else if travel.top.is_some_and(|top| self.bounds.top() >= top) {
            dy = -dy.abs();
        }

        self.velocity = (dx, dy);
    }
}

//=== CategorySets ========================================================

/// Disjoint category membership for every handle of a level.
///
/// Enemy-category handles are registered for disjointness only; the
/// enemy entities themselves live in the level world.
#[derive(Debug, Clone, Default)]
pub struct CategorySets {
    members: HashMap<SpriteHandle, Category>,
    sprites: HashMap<Category, BTreeMap<SpriteHandle, Sprite>>,
}

impl CategorySets {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Insertion --------------------------------------------------------

    /// Adds a sprite to a category.
    ///
    /// Fails if the handle already belongs to any category.
    pub fn insert(&mut self, category: Category, sprite: Sprite) -> GameResult<()> {
        self.register(sprite.handle, category)?;
        self.sprites
            .entry(category)
            .or_default()
            .insert(sprite.handle, sprite);
        Ok(())
    }

    /// Records membership without storing sprite data (enemy entities).
    pub fn register(&mut self, handle: SpriteHandle, category: Category) -> GameResult<()> {
        if self.members.contains_key(&handle) {
            return Err(GameError::DuplicateHandle(handle.0));
        }
        self.members.insert(handle, category);
        Ok(())
    }

    //--- Removal ----------------------------------------------------------

    /// Removes a handle from `category`.
    ///
    /// Returns `None` if the handle is not (or no longer) in that
    /// category, which makes repeated removal a no-op.
    pub fn take(&mut self, category: Category, handle: SpriteHandle) -> Option<Sprite> {
        if self.members.get(&handle) != Some(&category) {
            return None;
        }
        let sprite = self.sprites.get_mut(&category)?.remove(&handle)?;
        self.members.remove(&handle);
        Some(sprite)
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, category: Category, handle: SpriteHandle) -> bool {
        self.members.get(&handle) == Some(&category)
    }

    pub fn get(&self, handle: SpriteHandle) -> Option<&Sprite> {
        let category = self.members.get(&handle)?;
        self.sprites.get(category)?.get(&handle)
    }

    /// Iterates the stored sprites of a category in handle order.
    pub fn iter(&self, category: Category) -> impl Iterator<Item = &Sprite> {
        self.sprites
            .get(&category)
            .into_iter()
            .flat_map(|set| set.values())
    }

    pub fn iter_mut(&mut self, category: Category) -> impl Iterator<Item = &mut Sprite> {
        self.sprites
            .get_mut(&category)
            .into_iter()
            .flat_map(|set| set.values_mut())
    }

    /// Number of handles registered in a category.
    pub fn len(&self, category: Category) -> usize {
        self.members.values().filter(|c| **c == category).count()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: u32) -> Sprite {
        Sprite::new(SpriteHandle(id), Rect::new(id as f32, 0.0, 10.0, 10.0))
    }

    #[test]
    fn layer_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_layer(category.layer_name()).unwrap(), Some(category));
        }
    }

    #[test]
    fn decoration_layers_have_no_category() {
        assert_eq!(Category::from_layer("Foreground").unwrap(), None);
        assert_eq!(Category::from_layer("Background").unwrap(), None);
    }

    #[test]
    fn unknown_layer_is_error() {
        let err = Category::from_layer("Lava").unwrap_err();
        assert!(matches!(err, GameError::UnknownCategory { tag } if tag == "Lava"));
    }

    #[test]
    fn handle_belongs_to_one_category() {
        let mut sets = CategorySets::new();
        sets.insert(Category::Collectible, coin(1)).unwrap();

        let err = sets.insert(Category::Hazard, coin(1)).unwrap_err();
        assert!(matches!(err, GameError::DuplicateHandle(1)));
        assert!(sets.contains(Category::Collectible, SpriteHandle(1)));
        assert!(!sets.contains(Category::Hazard, SpriteHandle(1)));
    }

    #[test]
    fn take_is_at_most_once() {
        let mut sets = CategorySets::new();
        sets.insert(Category::Collectible, coin(3)).unwrap();

        assert!(sets.take(Category::Collectible, SpriteHandle(3)).is_some());
        assert!(sets.take(Category::Collectible, SpriteHandle(3)).is_none());
        assert_eq!(sets.len(Category::Collectible), 0);
    }

    #[test]
    fn take_from_wrong_category_is_noop() {
        let mut sets = CategorySets::new();
        sets.insert(Category::Hazard, coin(4)).unwrap();

        assert!(sets.take(Category::Collectible, SpriteHandle(4)).is_none());
        assert!(sets.contains(Category::Hazard, SpriteHandle(4)));
    }

    #[test]
    fn iter_is_handle_ordered() {
        let mut sets = CategorySets::new();
        sets.insert(Category::Collectible, coin(9)).unwrap();
        sets.insert(Category::Collectible, coin(2)).unwrap();
        sets.insert(Category::Collectible, coin(5)).unwrap();

        let ids: Vec<_> = sets.iter(Category::Collectible).map(|s| s.handle.0).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn platform_reverses_at_travel_bounds() {
        let mut lift = Sprite::new(SpriteHandle(1), Rect::new(0.0, 50.0, 20.0, 10.0));
        lift.velocity = (0.0, 4.0);
        lift.travel = TravelBounds {
            bottom: Some(40.0),
            top: Some(62.0),
            ..TravelBounds::default()
        };

        lift.step();
        assert_eq!(lift.bounds.y, 54.0);
        assert_eq!(lift.velocity, (0.0, 4.0));

        lift.step();
        assert_eq!(lift.bounds.top(), 63.0);
        assert_eq!(lift.velocity, (0.0, -4.0));

        for _ in 0..4 {
            lift.step();
        }
        assert_eq!(lift.bounds.bottom(), 37.0);
        assert_eq!(lift.velocity, (0.0, 4.0));
    }

    #[test]
    fn unbounded_axis_keeps_moving() {
        let mut belt = Sprite::new(SpriteHandle(2), Rect::new(0.0, 0.0, 10.0, 10.0));
        belt.velocity = (3.0, 0.0);
        belt.travel.left = Some(-100.0);

        for _ in 0..10 {
            belt.step();
        }
        assert_eq!(belt.bounds.x, 30.0);
        assert_eq!(belt.velocity, (3.0, 0.0));
    }

    #[test]
    fn registered_handles_count_without_sprite_data() {
        let mut sets = CategorySets::new();
        sets.register(SpriteHandle(7), Category::Enemy).unwrap();

        assert_eq!(sets.len(Category::Enemy), 1);
        assert_eq!(sets.iter(Category::Enemy).count(), 0);
        assert!(sets.take(Category::Enemy, SpriteHandle(7)).is_none());
        assert_eq!(sets.len(Category::Enemy), 1);
    }
}
