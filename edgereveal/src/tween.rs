/// A linear tween of a reveal offset, sampled by the adapter's clock.
///
/// The duration is the distance travelled in display units, in milliseconds (1 unit/ms).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: i32,
    pub to: i32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Tween {
    pub fn new(from: i32, to: i32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    /// A tween whose duration equals the distance between `from` and `to`.
    pub fn by_distance(from: i32, to: i32, start_ms: u64) -> Self {
        Self::new(from, to, start_ms, u64::from(from.abs_diff(to)))
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> i32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * t) as i32
    }
}
