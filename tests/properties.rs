//! Property tests for the simulation primitives

use glam::Vec2;
use proptest::prelude::*;

use pushball::consts::*;
use pushball::sim::{
    Ball, Bounds, Enemy, Rect, ScriptedRandom, Zone, apply_friction, chase_multiplier,
    resolve_ball_ball, resolve_ball_walls, speed_modifier,
};

fn bounds() -> Bounds {
    Bounds::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

fn zone_mod() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.5f32), Just(1.0f32), Just(1.5f32)]
}

proptest! {
    /// Property: friction never speeds a ball up
    #[test]
    fn prop_friction_never_increases_speed(
        speed in 0.0f32..1000.0,
        angle in 0.0f32..std::f32::consts::TAU,
        dt in 1e-3f32..0.05,
        speed_mod in zone_mod(),
    ) {
        let zones = [Zone::new(Rect::new(0.0, 0.0, 800.0, 600.0), speed_mod, "zone")];
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), BALL_RADIUS);
        ball.vel = Vec2::from_angle(angle) * speed;

        apply_friction(&mut ball, &zones, dt);
        prop_assert!(ball.speed() <= speed + 1e-3);
    }

    /// Property: after friction a ball is either stopped or at least MIN_VELOCITY
    #[test]
    fn prop_velocity_floor(
        speed in 0.0f32..50.0,
        angle in 0.0f32..std::f32::consts::TAU,
        dt in 1e-3f32..0.05,
    ) {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), USER_BALL_RADIUS);
        ball.vel = Vec2::from_angle(angle) * speed;

        apply_friction(&mut ball, &[], dt);
        prop_assert!(ball.vel == Vec2::ZERO || ball.speed() >= MIN_VELOCITY);
    }

    /// Property: wall resolution always leaves the ball fully inside
    #[test]
    fn prop_walls_contain_ball(
        x in -200.0f32..1000.0,
        y in -200.0f32..800.0,
        vx in -800.0f32..800.0,
        vy in -800.0f32..800.0,
    ) {
        let mut ball = Ball::new(Vec2::new(x, y), BALL_RADIUS);
        ball.vel = Vec2::new(vx, vy);

        resolve_ball_walls(&mut ball, &bounds());
        prop_assert!(bounds().contains_circle(ball.pos, ball.radius));
        prop_assert!(ball.speed() <= Vec2::new(vx, vy).length() + 1e-3);
    }

    /// Property: enemies never move faster than 1.5x base speed while chasing
    #[test]
    fn prop_chase_speed_is_capped(
        ex in 18.0f32..782.0,
        ey in 18.0f32..582.0,
        tx in 0.0f32..800.0,
        ty in 0.0f32..600.0,
        dt in 1e-3f32..0.05,
        ticks in 1usize..300,
    ) {
        let mut enemy = Enemy::new(Vec2::new(ex, ey), 18.0, 0.0);
        let target = Vec2::new(tx, ty);
        let mut rng = ScriptedRandom::constant(0.0);
        let cap = ENEMY_BASE_SPEED * (1.0 + ENEMY_SPEED_INCREASE);

        for _ in 0..ticks {
            let before = enemy.pos;
            enemy.update(true, target, dt, &bounds(), &mut rng);
            prop_assert!(before.distance(enemy.pos) <= cap * dt + 1e-3);
        }
        prop_assert!(enemy.chase_speed() <= cap + 1e-3);
    }

    /// Property: the multiplier is flat at 1.5 once the chase has run its course
    #[test]
    fn prop_chase_multiplier_saturates(ms in ENEMY_MAX_CHASE_TIME..1e6f32) {
        prop_assert_eq!(chase_multiplier(ms), 1.0 + ENEMY_SPEED_INCREASE);
    }

    /// Property: overlapping zones resolve to the first one authored
    #[test]
    fn prop_first_zone_wins(
        x in 100.0f32..200.0,
        y in 100.0f32..200.0,
        first in zone_mod(),
        second in zone_mod(),
    ) {
        let zones = [
            Zone::new(Rect::new(50.0, 50.0, 200.0, 200.0), first, "a"),
            Zone::new(Rect::new(100.0, 100.0, 200.0, 200.0), second, "b"),
        ];
        prop_assert_eq!(speed_modifier(&zones, Vec2::new(x, y)), first);
    }

    /// Property: ball-ball contact conserves total velocity and separates the balls
    #[test]
    fn prop_ball_contact_separates(
        ax in 300.0f32..340.0,
        ay in 280.0f32..320.0,
        bx in 300.0f32..340.0,
        by in 280.0f32..320.0,
        avx in -500.0f32..500.0,
        bvx in -500.0f32..500.0,
    ) {
        let mut a = Ball::new(Vec2::new(ax, ay), USER_BALL_RADIUS);
        let mut b = Ball::new(Vec2::new(bx, by), BALL_RADIUS);
        a.vel = Vec2::new(avx, 0.0);
        b.vel = Vec2::new(bvx, 0.0);
        let momentum = a.vel + b.vel;

        if resolve_ball_ball(&mut a, &mut b) {
            prop_assert!(a.pos.distance(b.pos) >= a.radius + b.radius - 1e-2);
            prop_assert!(((a.vel + b.vel) - momentum).length() < 1e-2);
        }
    }
}
