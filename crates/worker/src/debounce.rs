use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

/// Deadline table with one pending slot per key.
///
/// The host supplies the clock, which keeps the table deterministic and
/// lets tests drive it with synthetic instants.
#[derive(Debug, Clone)]
pub struct Debouncer<K> {
	deadlines: FxHashMap<K, Instant>,
}

impl<K> Default for Debouncer<K> {
	fn default() -> Self {
		Self {
			deadlines: FxHashMap::default(),
		}
	}
}

impl<K> Debouncer<K>
where
	K: Copy + Eq + Hash + Debug,
{
	pub fn new() -> Self {
		Self::default()
	}

	/// Schedules `key` to fire `delay` after `now`, replacing any pending
	/// deadline for it. Returns true if a pending deadline was replaced.
	pub fn arm(&mut self, key: K, delay: Duration, now: Instant) -> bool {
		let replaced = self.deadlines.insert(key, now + delay).is_some();
		tracing::trace!(?key, ?delay, replaced, "debounce.arm");
		replaced
	}

	/// Drops the pending deadline for `key`. Returns true if there was one.
	pub fn cancel(&mut self, key: K) -> bool {
		self.deadlines.remove(&key).is_some()
	}

	pub fn is_pending(&self, key: K) -> bool {
		self.deadlines.contains_key(&key)
	}

	/// Returns the deadline of `key`, if armed.
	pub fn deadline(&self, key: K) -> Option<Instant> {
		self.deadlines.get(&key).copied()
	}

	/// Returns the earliest pending deadline.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.deadlines.values().min().copied()
	}

	/// Returns the number of pending keys.
	pub fn pending(&self) -> usize {
		self.deadlines.len()
	}

	/// Removes and returns every key whose deadline is at or before `now`,
	/// earliest deadline first.
	pub fn take_expired(&mut self, now: Instant) -> Vec<K> {
		let mut expired: Vec<(Instant, K)> = self
			.deadlines
			.iter()
			.filter(|&(_, &deadline)| deadline <= now)
			.map(|(&key, &deadline)| (deadline, key))
			.collect();
		if expired.is_empty() {
			return Vec::new();
		}

		expired.sort_by_key(|&(deadline, _)| deadline);
		for (_, key) in &expired {
			self.deadlines.remove(key);
		}
		tracing::trace!(count = expired.len(), "debounce.fire");
		expired.into_iter().map(|(_, key)| key).collect()
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	const DELAY: Duration = Duration::from_millis(128);

	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	enum Key {
		A,
		B,
	}

	#[test]
	fn five_arms_fire_once() {
		let t0 = Instant::now();
		let mut debouncer = Debouncer::new();
		for i in 0..5 {
			debouncer.arm(Key::A, DELAY, t0 + Duration::from_millis(i * 20));
		}

		// The first arm's deadline has passed but it was superseded.
		assert!(debouncer.take_expired(t0 + DELAY).is_empty());
		assert_eq!(debouncer.take_expired(t0 + Duration::from_millis(80) + DELAY), vec![Key::A]);
		assert!(debouncer.take_expired(t0 + Duration::from_secs(10)).is_empty());
		assert!(!debouncer.is_pending(Key::A));
	}

	#[test]
	fn keys_are_independent() {
		let t0 = Instant::now();
		let mut debouncer = Debouncer::new();
		debouncer.arm(Key::B, DELAY, t0 + Duration::from_millis(10));
		debouncer.arm(Key::A, DELAY, t0);
		assert_eq!(debouncer.next_deadline(), Some(t0 + DELAY));

		assert_eq!(debouncer.take_expired(t0 + Duration::from_secs(1)), vec![Key::A, Key::B]);
	}

	#[test]
	fn cancel_drops_pending_job() {
		let t0 = Instant::now();
		let mut debouncer = Debouncer::new();
		assert!(!debouncer.arm(Key::A, DELAY, t0));
		assert!(debouncer.arm(Key::A, DELAY, t0));
		assert!(debouncer.cancel(Key::A));
		assert!(!debouncer.cancel(Key::A));
		assert_eq!(debouncer.next_deadline(), None);
		assert!(debouncer.take_expired(t0 + DELAY).is_empty());
	}

	proptest! {
		#[test]
		fn bursts_inside_the_window_coalesce(gaps in proptest::collection::vec(0u64..128, 1..20)) {
			let t0 = Instant::now();
			let mut debouncer = Debouncer::new();
			let mut now = t0;
			let mut fires = 0;
			for gap in gaps {
				now += Duration::from_millis(gap);
				fires += debouncer.take_expired(now).len();
				debouncer.arm(Key::A, DELAY, now);
			}
			fires += debouncer.take_expired(now + DELAY).len();
			prop_assert_eq!(fires, 1);
		}
	}
}
