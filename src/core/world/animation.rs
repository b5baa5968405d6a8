//=========================================================================
// Animation
//=========================================================================
//
// Per-frame animation state selection and frame tables.
//
// Tables resolve to texture names only; the presenter owns decoding and
// mirroring for left-facing sprites.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::entity::{Animation, AnimationState, EnemyKind, Entity, EntityKind, Facing};

//=== AnimationTable ======================================================

/// Texture names for every animation state of one entity kind.
#[derive(Debug, PartialEq, Eq)]
pub struct AnimationTable {
    pub idle: &'static str,
    pub jump: &'static str,
    pub fall: &'static str,
    /// Frame 0 is hanging still, frame 1 is climbing.
    pub climb: [&'static str; 2],
    pub walk: &'static [&'static str],
}

static PLAYER: AnimationTable = AnimationTable {
    idle: "player/idle1",
    jump: "player/jump1",
    fall: "player/fall",
    climb: ["player/ladder0", "player/ladder1"],
    walk: &["player/walk0", "player/walk1", "player/walk2"],
};

static ROBOT: AnimationTable = AnimationTable {
    idle: "robot/idle",
    jump: "robot/jump",
    fall: "robot/fall",
    climb: ["robot/idle", "robot/idle"],
    walk: &["robot/walk0", "robot/walk1", "robot/walk2", "robot/walk3"],
};

static ZOMBIE: AnimationTable = AnimationTable {
    idle: "zombie/idle",
    jump: "zombie/jump",
    fall: "zombie/fall",
    climb: ["zombie/idle", "zombie/idle"],
    walk: &["zombie/walk0", "zombie/walk1"],
};

static HEADCRAB: AnimationTable = AnimationTable {
    idle: "headcrab/idle",
    jump: "headcrab/leap",
    fall: "headcrab/leap",
    climb: ["headcrab/idle", "headcrab/idle"],
    walk: &["headcrab/walk0", "headcrab/walk1", "headcrab/walk2"],
};

impl AnimationTable {
    /// Looks up the table for an entity kind.
    pub fn for_kind(kind: EntityKind) -> &'static AnimationTable {
        match kind {
            EntityKind::Player => &PLAYER,
            EntityKind::Enemy(EnemyKind::Robot) => &ROBOT,
            EntityKind::Enemy(EnemyKind::Zombie) => &ZOMBIE,
            EntityKind::Enemy(EnemyKind::Headcrab) => &HEADCRAB,
        }
    }

    /// Texture name for an animation frame.
    pub fn texture(&self, animation: Animation) -> &'static str {
        match animation.state {
            AnimationState::Idle => self.idle,
            AnimationState::Jump => self.jump,
            AnimationState::Fall => self.fall,
            AnimationState::Climb => self.climb[animation.frame.min(1)],
            AnimationState::Walk => self.walk[animation.frame % self.walk.len()],
        }
    }
}

//=== update_animation() ==================================================
//
// Priority: ladder, rising, falling, standing, walking. Walking is the
// only state that advances a frame counter.
//
pub fn update_animation(entity: &mut Entity) {
    if entity.change_x < 0.0 {
        entity.facing = Facing::Left;
    } else if entity.change_x > 0.0 {
        entity.facing = Facing::Right;
    }

    let previous = entity.animation;

    entity.animation = if entity.on_ladder {
        let frame = usize::from(entity.change_y.abs() > 1.0);
        Animation {
            state: AnimationState::Climb,
            frame,
        }
    } else if entity.change_y > 0.0 {
        still(AnimationState::Jump)
    } else if entity.change_y < 0.0 {
        still(AnimationState::Fall)
    } else if entity.change_x == 0.0 {
        still(AnimationState::Idle)
    } else {
        let walk_len = AnimationTable::for_kind(entity.kind).walk.len();
        let frame = if previous.state == AnimationState::Walk {
            (previous.frame + 1) % walk_len
        } else {
            0
        };
        Animation {
            state: AnimationState::Walk,
            frame,
        }
    };
}

fn still(state: AnimationState) -> Animation {
    Animation { state, frame: 0 }
}

//=========================================================================
// Unit Tests
//=========================================================================
