use std::time::Instant;

/// Seconds elapsed since `t0`, for timing log lines.
#[must_use]
pub fn elapsed_secs(t0: Instant) -> f32 {
	t0.elapsed().as_secs_f32()
}
