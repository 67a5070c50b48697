// Velocity sampling, fling decay and tween interpolation.

use showcase_core::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn drag_sample_velocity_is_delta_over_time() {
    let first = DragSample::new(100.0, 1000.0);
    let next = first.advance(70.0, 1010.0, 1.0);
    assert!(approx(next.velocity, -3.0));
    assert_eq!(next.position_x, 70.0);
    assert_eq!(next.timestamp_ms, 1010.0);
}

#[test]
fn drag_sample_floors_interval() {
    let first = DragSample::new(0.0, 500.0);
    // Same timestamp: interval floored at 1ms instead of dividing by zero.
    let same = first.advance(4.0, 500.0, 1.0);
    assert!(approx(same.velocity, 4.0));
    // Out-of-order timestamps are floored too.
    let backwards = first.advance(4.0, 490.0, 1.0);
    assert!(approx(backwards.velocity, 4.0));
}

#[test]
fn momentum_step_moves_against_pointer_velocity() {
    let config = CarouselConfig::default();
    let step = momentum_step(2.0, 16.0, &config);
    assert!(approx(step.offset_delta, -2.0 * 16.0 * 1.15));
    assert!(approx(step.velocity, 2.0 * 0.94));

    let step = momentum_step(-1.0, 8.0, &config);
    assert!(step.offset_delta > 0.0);
    assert!(approx(step.velocity, -0.94f64.powf(0.5)));
}

#[test]
fn momentum_velocity_strictly_decreases_and_terminates() {
    let config = CarouselConfig::default();
    for start in [0.02, -0.5, 1.7, -6.0, 25.0] {
        let mut velocity: f64 = start;
        let mut frames = 0usize;
        while velocity.abs() >= config.min_velocity {
            let next = momentum_step(velocity, 16.0, &config).velocity;
            assert!(next.abs() < velocity.abs(), "start={start} frame={frames}");
            assert_eq!(next.signum(), velocity.signum());
            velocity = next;
            frames += 1;
            assert!(frames < 10_000, "fling from {start} never settles");
        }
        assert_eq!(Some(frames), frames_to_rest(start, 16.0, &config));
    }
}

#[test]
fn frames_to_rest_edge_cases() {
    let config = CarouselConfig::default();
    assert_eq!(frames_to_rest(0.005, 16.0, &config), Some(0));
    assert_eq!(frames_to_rest(1.0, 0.0, &config), None);
    assert!(frames_to_rest(1.0, 32.0, &config) < frames_to_rest(1.0, 16.0, &config));
}

#[test]
fn tween_interpolates_from_start_to_target() {
    let tween = Tween::new(100.0, 400.0, 1_000.0, 300.0);
    assert_eq!(tween.sample(900.0), 100.0);
    assert_eq!(tween.sample(1_000.0), 100.0);
    assert_eq!(tween.sample(1_300.0), 400.0);
    assert_eq!(tween.sample(5_000.0), 400.0);
    assert!(!tween.is_done(1_299.0));
    assert!(tween.is_done(1_300.0));
    assert_eq!(tween.target(), 400.0);

    let mut prev = tween.sample(1_000.0);
    for t in (1_010..=1_300).step_by(10) {
        let v = tween.sample(t as f64);
        assert!(v >= prev, "tween went backwards at {t}");
        prev = v;
    }
    // Ease-out: more than half the distance covered at the halfway time.
    assert!(tween.sample(1_150.0) > 250.0);
}

#[test]
fn tween_shift_moves_both_ends() {
    let tween = Tween::new(100.0, 400.0, 0.0, 300.0).shifted(-50.0);
    assert_eq!(tween.sample(0.0), 50.0);
    assert_eq!(tween.target(), 350.0);
}

#[test]
fn tween_duration_has_a_floor() {
    let tween = Tween::new(0.0, 10.0, 0.0, 0.0);
    assert!(!tween.is_done(0.5));
    assert!(tween.is_done(1.0));
}
