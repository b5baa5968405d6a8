//=========================================================================
// Overlap Queries
//=========================================================================
//
// Which sprites of a category does an entity currently touch?
//
// `BoundsOverlap` tests the entity's hitbox against every member of the
// category. It is the fallback when no spatial backend is attached.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::world::{Category, Entity, LevelWorld, SpriteHandle};

//=== OverlapQuery ========================================================

pub trait OverlapQuery: Send {
    /// Handles of `category` members overlapping `entity`, in a stable order.
    fn overlaps(&self, entity: &Entity, category: Category, world: &LevelWorld)
        -> Vec<SpriteHandle>;
}

//=== BoundsOverlap =======================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsOverlap;

impl OverlapQuery for BoundsOverlap {
    fn overlaps(
        &self,
        entity: &Entity,
        category: Category,
        world: &LevelWorld,
    ) -> Vec<SpriteHandle> {
        let hitbox = entity.hitbox();
        world
            .bounds_of(category)
            .into_iter()
            .filter(|(handle, bounds)| *handle != entity.handle && hitbox.intersects(bounds))
            .map(|(handle, _)| handle)
            .collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
