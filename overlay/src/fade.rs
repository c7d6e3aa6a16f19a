//! Linger and fade-out alpha
//!
//! The tracker stays fully opaque for a configured linger window after the
//! last skill change, then either cuts off or fades out linearly over the
//! tail of the window. Time is measured in 20 ms client ticks.

/// Milliseconds per client tick.
pub const MILLIS_PER_CLIENT_TICK: u64 = 20;

/// Upper bound on the fade window, in ticks.
const MAX_FADE_SPAN_TICKS: u32 = 33;

/// Portion of the linger window spent fading.
const FADE_PORTION: f32 = 0.33;

/// Opacity for the tracker given the time since the last skill change.
///
/// `linger_ticks == 0` disables the linger window entirely; the tracker is
/// then always fully opaque. Total over all inputs.
pub fn compute(linger_ticks: u32, fade_out: bool, millis_since_update: u64) -> u8 {
    if linger_ticks == 0 {
        return 0xff;
    }

    let ticks = (millis_since_update / MILLIS_PER_CLIENT_TICK) as i64;
    if fade_out {
        let span = MAX_FADE_SPAN_TICKS.min((FADE_PORTION * linger_ticks as f32) as u32);
        let threshold = (linger_ticks - span) as i64;
        if span == 0 {
            // Degenerate window: nothing to interpolate over.
            return if ticks > threshold { 0 } else { 0xff };
        }
        let point = ticks - threshold;
        let fraction = (point as f32 / span as f32).clamp(0.0, 1.0);
        (255.0 - fraction * 255.0).max(0.0) as u8
    } else if ticks > linger_ticks as i64 {
        0
    } else {
        0xff
    }
}
