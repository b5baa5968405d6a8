//=========================================================================
// Kinematic Update
//=========================================================================
//
// Velocity selection from latched intents and contact flags.
//
// Vertical rules, first match wins:
//   1. on a ladder        → climb speed × (up − down), 0 without intent
//   2. jump pressed       → jump speed, if grounded or charges remain
//
// Ground contact refills charges to the configured maximum first.
//   3. otherwise          → untouched (the backend applies gravity)
//
// Horizontal: left only, right only, or 0.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Contacts;
use crate::config::MovementConfig;
use crate::core::input::{InputLatch, Intent};
use crate::core::world::{Category, CategorySets, Entity};

//=== update_player() =====================================================
//
// Returns `true` when a jump was initiated this frame.
//
pub fn update_player(
    player: &mut Entity,
    latch: &InputLatch,
    contacts: Contacts,
    movement: &MovementConfig,
) -> bool {
    let mut jumped = false;

    // Ground contact restores every charge, including on a jump frame
    if contacts.grounded {
        player.jumps_remaining = movement.max_jumps;
    }

    if contacts.on_ladder {
        player.change_y = movement.climb_speed * latch.vertical_axis();
    } else if latch.is_pressed(Intent::Jump)
        && (contacts.grounded || player.jumps_remaining > 0)
    {
        player.change_y = movement.jump_speed;
        player.jumps_remaining = player.jumps_remaining.saturating_sub(1);
        jumped = true;
    }

    player.change_x = movement.move_speed * latch.horizontal_axis();
    player.crouching = !contacts.on_ladder && latch.is_down(Intent::ClimbDown);

    jumped
}

//=== update_enemies() ====================================================
//
// Turns patrolling enemies around at their bounds, then moves every
// enemy by its velocity.
//
pub fn update_enemies(enemies: &mut [Entity]) {
    for enemy in enemies.iter_mut() {
        if let Some(bounds) = enemy.patrol {
            let speed = enemy.change_x.abs();
            if enemy.x <= bounds.left {
                enemy.change_x = speed;
            } else if enemy.x >= bounds.right {
                enemy.change_x = -speed;
            }
        }
        enemy.advance();
    }
}

//=== update_platforms() ==================================================
//
// Steps every moving platform, turning it around at its travel bounds.
//
pub fn update_platforms(categories: &mut CategorySets) {
    for platform in categories.iter_mut(Category::MovingPlatform) {
        platform.step();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::{EnemyKind, PatrolBounds, Rect, Sprite, SpriteHandle, TravelBounds};

    //--- Test Helpers -----------------------------------------------------
    fn player() -> Entity {
        Entity::player(SpriteHandle(0), (0.0, 0.0), (32.0, 64.0), 2)
    }

    fn latch_with(held: &[Intent]) -> InputLatch {
        let mut latch = InputLatch::new();
        for intent in held {
            latch.press(*intent);
        }
        latch
    }

    fn grounded() -> Contacts {
        Contacts { on_ladder: false, grounded: true }
    }

    fn airborne() -> Contacts {
        Contacts::default()
    }

    fn ladder() -> Contacts {
        Contacts { on_ladder: true, grounded: false }
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn horizontal_from_held_intents() {
        let movement = MovementConfig::default();
        let mut p = player();

        update_player(&mut p, &latch_with(&[Intent::MoveLeft]), grounded(), &movement);
        assert_eq!(p.change_x, -10.0);

        update_player(&mut p, &latch_with(&[Intent::MoveRight]), grounded(), &movement);
        assert_eq!(p.change_x, 10.0);

        update_player(
            &mut p,
            &latch_with(&[Intent::MoveLeft, Intent::MoveRight]),
            grounded(),
            &movement,
        );
        assert_eq!(p.change_x, 0.0);

        update_player(&mut p, &latch_with(&[]), grounded(), &movement);
        assert_eq!(p.change_x, 0.0);
    }

    #[test]
    fn ladder_without_vertical_intent_stops() {
        let movement = MovementConfig::default();
        let mut p = player();
        p.change_y = -7.5;

        update_player(&mut p, &latch_with(&[Intent::MoveRight]), ladder(), &movement);

        assert_eq!(p.change_y, 0.0);
    }

    #[test]
    fn ladder_climbs_and_cancels() {
        let movement = MovementConfig::default();
        let mut p = player();

        update_player(&mut p, &latch_with(&[Intent::ClimbUp]), ladder(), &movement);
        assert_eq!(p.change_y, 10.0);

        update_player(&mut p, &latch_with(&[Intent::ClimbDown]), ladder(), &movement);
        assert_eq!(p.change_y, -10.0);

        update_player(
            &mut p,
            &latch_with(&[Intent::ClimbUp, Intent::ClimbDown]),
            ladder(),
            &movement,
        );
        assert_eq!(p.change_y, 0.0);
    }

    #[test]
    fn jump_is_ignored_on_ladder() {
        let movement = MovementConfig::default();
        let mut p = player();

        let jumped = update_player(&mut p, &latch_with(&[Intent::Jump]), ladder(), &movement);

        assert!(!jumped);
        assert_eq!(p.change_y, 0.0);
    }

    #[test]
    fn multi_jump_consumes_charges() {
        let movement = MovementConfig::default();
        let mut p = player();
        let jump = latch_with(&[Intent::Jump]);

        assert!(update_player(&mut p, &jump, grounded(), &movement));
        assert_eq!(p.jumps_remaining, 1);
        assert_eq!(p.change_y, 15.0);

        p.change_y = 2.0;
        assert!(update_player(&mut p, &jump, airborne(), &movement));
        assert_eq!(p.jumps_remaining, 0);
        assert_eq!(p.change_y, 15.0);

        p.change_y = 2.0;
        assert!(!update_player(&mut p, &jump, airborne(), &movement));
        assert_eq!(p.jumps_remaining, 0);
        assert_eq!(p.change_y, 2.0, "Third press must not change velocity");
    }

    #[test]
    fn held_jump_does_not_repeat() {
        let movement = MovementConfig::default();
        let mut p = player();
        let mut latch = latch_with(&[Intent::Jump]);

        assert!(update_player(&mut p, &latch, grounded(), &movement));
        latch.begin_frame();
        assert!(!update_player(&mut p, &latch, airborne(), &movement));
    }

    #[test]
    fn grounded_refills_charges() {
        let movement = MovementConfig::default();
        let mut p = player();
        p.jumps_remaining = 0;

        update_player(&mut p, &latch_with(&[]), grounded(), &movement);
        assert_eq!(p.jumps_remaining, 2);

        p.jumps_remaining = 0;
        assert!(update_player(&mut p, &latch_with(&[Intent::Jump]), grounded(), &movement));
        assert_eq!(p.jumps_remaining, 1);
    }

    #[test]
    fn jump_on_landing_frame_keeps_air_jump() {
        let movement = MovementConfig::default();
        let mut p = player();
        let jump = latch_with(&[Intent::Jump]);

        assert!(update_player(&mut p, &jump, grounded(), &movement));
        assert_eq!(p.jumps_remaining, 1);

        // Lands with one charge left and jumps again straight away
        assert!(update_player(&mut p, &jump, grounded(), &movement));
        assert_eq!(p.jumps_remaining, 1);

        p.change_y = -3.0;
        assert!(update_player(&mut p, &jump, airborne(), &movement));
        assert_eq!(p.change_y, 15.0);
        assert_eq!(p.jumps_remaining, 0);
    }

    #[test]
    fn single_jump_config_allows_ground_jump_only() {
        let movement = MovementConfig {
            max_jumps: 0,
            ..MovementConfig::default()
        };
        let mut p = player();
        let jump = latch_with(&[Intent::Jump]);

        assert!(update_player(&mut p, &jump, grounded(), &movement));
        assert_eq!(p.jumps_remaining, 0);

        p.change_y = 4.0;
        assert!(!update_player(&mut p, &jump, airborne(), &movement));
        assert_eq!(p.change_y, 4.0);
    }

    #[test]
    fn climb_down_off_ladder_crouches() {
        let movement = MovementConfig::default();
        let mut p = player();

        update_player(&mut p, &latch_with(&[Intent::ClimbDown]), grounded(), &movement);
        assert!(p.crouching);

        update_player(&mut p, &latch_with(&[Intent::ClimbDown]), ladder(), &movement);
        assert!(!p.crouching);
    }

    #[test]
    fn enemies_turn_at_patrol_bounds() {
        let patrol = PatrolBounds { left: 0.0, right: 10.0 };
        let mut enemy = Entity::enemy(
            SpriteHandle(1),
            EnemyKind::Robot,
            Rect::new(9.0, 0.0, 10.0, 10.0),
            Some(patrol),
            2.0,
        );
        let mut enemies = vec![enemy.clone()];

        update_enemies(&mut enemies);
        assert_eq!(enemies[0].x, 11.0);

        update_enemies(&mut enemies);
        assert_eq!(enemies[0].change_x, -2.0);
        assert_eq!(enemies[0].x, 9.0);

        enemy.x = -1.0;
        enemy.change_x = -2.0;
        let mut enemies = vec![enemy];
        update_enemies(&mut enemies);
        assert_eq!(enemies[0].change_x, 2.0);
        assert_eq!(enemies[0].x, 1.0);
    }

    #[test]
    fn only_moving_platforms_move() {
        let mut categories = CategorySets::new();
        let mut lift = Sprite::new(SpriteHandle(1), Rect::new(100.0, 0.0, 64.0, 16.0));
        lift.velocity = (5.0, 0.0);
        lift.travel = TravelBounds {
            right: Some(140.0),
            ..TravelBounds::default()
        };
        categories.insert(Category::MovingPlatform, lift).unwrap();

        let mut slab = Sprite::new(SpriteHandle(2), Rect::new(0.0, 0.0, 64.0, 16.0));
        slab.velocity = (5.0, 0.0);
        categories.insert(Category::Platform, slab).unwrap();

        update_platforms(&mut categories);
        update_platforms(&mut categories);

        let lift = categories.get(SpriteHandle(1)).unwrap();
        assert_eq!(lift.bounds.x, 110.0);
        assert_eq!(lift.velocity, (-5.0, 0.0));
        assert_eq!(categories.get(SpriteHandle(2)).unwrap().bounds.x, 0.0);
    }

    #[test]
    fn stationary_enemies_stay_put() {
        let mut enemies = vec![Entity::enemy(
            SpriteHandle(1),
            EnemyKind::Zombie,
            Rect::new(5.0, 5.0, 10.0, 10.0),
            None,
            2.0,
        )];
        update_enemies(&mut enemies);
        assert_eq!(enemies[0].position(), (5.0, 5.0));
    }
}
