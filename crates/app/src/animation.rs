//! Pure time-to-offset curves for the renderer. The simulation is strictly
//! tile-to-tile; everything smooth on screen comes from these functions.

/// Seconds an accepted step takes to ease from `pos` to `target_pos`.
pub const MOVE_DURATION: f32 = 0.3;

/// Seconds a rejected step shakes the actor toward the blocked tile.
pub const WIGGLE_DURATION: f32 = 0.15;

/// Peak wiggle displacement, in tiles.
pub const WIGGLE_DISTANCE: f32 = 0.3;

/// Swing-out easing: overshoots the destination slightly before settling.
/// Input and output are both normalized progress; outside [0, 1] the curve
/// clamps to its endpoints.
pub fn swing_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let scale = 2.0;
    let a = t - 1.0;
    a * a * ((scale + 1.0) * a + scale) + 1.0
}

/// Fractional render position of a moving actor, per axis. `from` and `to`
/// are tile coordinates; `elapsed` is seconds since the step was accepted.
pub fn move_offset(from: f32, to: f32, elapsed: f32) -> f32 {
    let progress = (elapsed / MOVE_DURATION).min(1.0);
    from + (to - from) * swing_out(progress)
}

/// Displacement along the bump direction for a rejected step. A full sine
/// period scaled by a linear fade, so the actor lunges, rebounds, and comes
/// to rest exactly where it started.
pub fn wiggle_offset(elapsed: f32) -> f32 {
    let progress = (elapsed / WIGGLE_DURATION).min(1.0);
    let intensity = 1.0 - progress;
    (progress * std::f32::consts::TAU).sin() * WIGGLE_DISTANCE * intensity
}
