//! Frame-time accumulation for clip playback.
//!
//! `accumulate_time` is a pure function: it owns no state, and the caller
//! threads the frame cursor through it tick by tick. Trigger strings are
//! appended, never cleared, so a caller can collect one tick's triggers from
//! a whole subtree in a single Vec.

/// Fixed system frame rate. Frame values everywhere in this crate are
/// fractional positions measured at this rate, not wall-clock seconds.
pub const FRAMES_PER_SECOND: f64 = 30.0;

/// Ordered trigger identifiers emitted during a tick
/// (`"<nodeId>OnLoop"` / `"<nodeId>OnDone"`).
pub type Triggers = Vec<String>;

/// Advance a clip's playback position by `dt` seconds.
///
/// Non-looping clips clamp to `end_frame` and emit `"<id>OnDone"` on every
/// tick that reaches or passes it. Looping clips treat `end_frame` and
/// `start_frame` as distinct frames with one extra frame of separation
/// between them: a cursor may come to rest anywhere in `[end, end + 1)`
/// without wrapping, and only a tick that crosses `end + 1` wraps back to
/// `start_frame` (plus the fractional carry past the gap) and emits
/// `"<id>OnLoop"`.
///
/// Negative time scales clamp to zero; a zero scale leaves the cursor
/// untouched and emits nothing.
pub fn accumulate_time(
    start_frame: f64,
    end_frame: f64,
    time_scale: f64,
    current_frame: f64,
    dt: f64,
    loop_flag: bool,
    node_id: &str,
    triggers: &mut Triggers,
) -> f64 {
    debug_assert!(end_frame >= start_frame, "inverted frame range");

    let time_scale = time_scale.max(0.0);
    if time_scale == 0.0 {
        return current_frame;
    }

    let mut frame = current_frame + dt * time_scale * FRAMES_PER_SECOND;
    if loop_flag {
        if frame >= end_frame + 1.0 {
            let span = end_frame - start_frame + 1.0;
            frame = start_frame + (frame - (end_frame + 1.0)).rem_euclid(span);
            triggers.push(format!("{node_id}OnLoop"));
        }
    } else if frame >= end_frame {
        frame = end_frame;
        triggers.push(format!("{node_id}OnDone"));
    }
    frame
}
