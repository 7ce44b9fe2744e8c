use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::debounce::Debouncer;

type FireHandler<C> = Box<dyn FnMut(&mut C)>;

/// A [`Debouncer`] with one fire handler per key.
///
/// Handlers receive the host context `C` mutably when their key fires. Keys
/// without a handler still fire and are simply dropped.
pub struct Scheduler<K, C> {
	debouncer: Debouncer<K>,
	handlers: FxHashMap<K, FireHandler<C>>,
}

impl<K, C> Default for Scheduler<K, C> {
	fn default() -> Self {
		Self {
			debouncer: Debouncer::default(),
			handlers: FxHashMap::default(),
		}
	}
}

impl<K, C> Scheduler<K, C>
where
	K: Copy + Eq + Hash + Debug,
{
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the handler run when `key` fires, replacing any previous one.
	pub fn on_fire(&mut self, key: K, handler: impl FnMut(&mut C) + 'static) {
		self.handlers.insert(key, Box::new(handler));
	}

	/// See [`Debouncer::arm`].
	pub fn arm(&mut self, key: K, delay: Duration, now: Instant) -> bool {
		self.debouncer.arm(key, delay, now)
	}

	/// See [`Debouncer::cancel`].
	pub fn cancel(&mut self, key: K) -> bool {
		self.debouncer.cancel(key)
	}

	pub fn is_pending(&self, key: K) -> bool {
		self.debouncer.is_pending(key)
	}

	pub fn next_deadline(&self) -> Option<Instant> {
		self.debouncer.next_deadline()
	}

	/// Runs the handlers of every key expired at `now`, earliest first, and
	/// returns how many keys fired.
	///
	/// A handler may not re-arm through `ctx`; it has no access to the
	/// scheduler. Re-arming happens on the next host event.
	pub fn run_expired(&mut self, now: Instant, ctx: &mut C) -> usize {
		let expired = self.debouncer.take_expired(now);
		for key in &expired {
			match self.handlers.get_mut(key) {
				Some(handler) => handler(ctx),
				None => tracing::trace!(?key, "debounce.unhandled"),
			}
		}
		expired.len()
	}
}

impl<K: Debug, C> Debug for Scheduler<K, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Scheduler")
			.field("debouncer", &self.debouncer)
			.field("handlers", &self.handlers.len())
			.finish()
	}
}
