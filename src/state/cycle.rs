//! Auto-cycling carousel controller.
//!
//! `CycleController` owns an ordered list of display items and rotates a
//! current index through them on a fixed interval, unless suppressed by a
//! pause source (pointer hover, user autoplay toggle) or by a temporary
//! manual-navigation window. It is the single shared implementation behind
//! the laptop and phone display surfaces.
//!
//! The controller is pure state: it never talks to a clock or a scheduler.
//! The shell's event loop calls [`CycleController::on_timer`] with the
//! current instant on every poll timeout, and the controller decides
//! whether its armed deadline has been reached. Scheduling is therefore a
//! single `Option<Instant>` slot, which makes "at most one pending tick"
//! structural rather than something to enforce.

use std::time::{Duration, Instant};

// ===== PauseSource =====

/// An external trigger that suppresses automatic advancement.
///
/// Sources are tracked independently so that one source's resume can never
/// override another source's active pause. Automatic advancement requires
/// *all* sources to be clear (and no manual-navigation window to be open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseSource {
    /// Pointer is hovering over the display surface.
    Hover,
    /// User explicitly switched autoplay off (sticky until switched back).
    UserToggle,
}

/// Set of currently active pause sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PauseSources {
    hover: bool,
    user_toggle: bool,
}

impl PauseSources {
    fn set(&mut self, source: PauseSource, active: bool) {
        match source {
            PauseSource::Hover => self.hover = active,
            PauseSource::UserToggle => self.user_toggle = active,
        }
    }

    fn contains(self, source: PauseSource) -> bool {
        match source {
            PauseSource::Hover => self.hover,
            PauseSource::UserToggle => self.user_toggle,
        }
    }

    fn any(self) -> bool {
        self.hover || self.user_toggle
    }
}

// ===== CycleController =====

/// Auto-advancing carousel over a fixed item list.
///
/// # State Machine
///
/// - **Running**: no pause source active, no manual window open, and more
///   than one item; exactly one tick deadline is armed.
/// - **Paused**: at least one suppressor active; the deadline slot is
///   empty. Cancelling on pause is mandatory: a tick that was due before
///   the pause can never fire after it.
///
/// Manual navigation is valid in every state and wraps circularly. With
/// the default configuration it leaves the armed schedule untouched; see
/// [`CycleController::with_manual_pause`] for the temporary-suppression
/// variant used by the phone surface.
///
/// # Invariants
///
/// - `current_index < items.len()` whenever the list is non-empty, across
///   every automatic and manual transition.
/// - The deadline slot is armed only while nothing suppresses advancement
///   and `items.len() > 1` (a single item has nothing to cycle to).
///
/// Dropping the controller drops the deadline with it; there is no
/// callback that could outlive the value.
#[derive(Debug, Clone)]
pub struct CycleController<T> {
    items: Vec<T>,
    current: usize,
    interval: Duration,
    /// When set, every manual navigation opens a suppression window of
    /// this length that expires on its own.
    manual_pause: Option<Duration>,
    sources: PauseSources,
    /// Open manual-navigation window, if any. Latest navigation wins;
    /// windows extend rather than stack.
    manual_until: Option<Instant>,
    /// The single pending tick deadline. `None` while suppressed.
    next_tick: Option<Instant>,
}

impl<T> CycleController<T> {
    /// Create a controller over `items`, advancing every `interval`.
    ///
    /// Starts at index 0 with the first tick armed `interval` after
    /// `now`, provided there is more than one item. An empty list yields
    /// a controller with no current item; every operation on it is a safe
    /// no-op. `interval` must be non-zero.
    pub fn new(items: Vec<T>, interval: Duration, now: Instant) -> Self {
        debug_assert!(!interval.is_zero(), "cycle interval must be non-zero");
        let next_tick = (items.len() > 1).then(|| now + interval);
        Self {
            items,
            current: 0,
            interval,
            manual_pause: None,
            sources: PauseSources::default(),
            manual_until: None,
            next_tick,
        }
    }

    /// Enable the temporary pause-on-manual-navigation refinement.
    ///
    /// After any manual navigation, automatic advancement is suppressed
    /// for `window` and then resumes on its own (unless a pause source is
    /// still active). Used by the phone surface with an 8 s window; the
    /// laptop surface leaves this unset and manual navigation never
    /// touches the running schedule.
    pub fn with_manual_pause(mut self, window: Duration) -> Self {
        self.manual_pause = Some(window);
        self
    }

    /// Deliver a timer event.
    ///
    /// Called by the shell on every poll timeout. Expires the manual
    /// window first, then fires the armed tick if its deadline has been
    /// reached, advancing one step and re-arming `interval` ahead.
    /// Returns whether any observable state changed.
    pub fn on_timer(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(until) = self.manual_until {
            if now >= until {
                self.manual_until = None;
                self.try_arm(now);
                // The autoplay indicator flips back on.
                changed = true;
            }
        }

        if let Some(deadline) = self.next_tick {
            if now >= deadline {
                self.current = (self.current + 1) % self.items.len();
                self.next_tick = Some(now + self.interval);
                changed = true;
            }
        }

        changed
    }

    /// Activate a pause source, cancelling any pending tick.
    ///
    /// Idempotent: pausing an already-active source changes nothing.
    pub fn pause(&mut self, source: PauseSource) {
        self.sources.set(source, true);
        self.next_tick = None;
    }

    /// Clear a pause source, re-arming the tick if nothing else
    /// suppresses advancement.
    ///
    /// Idempotent: the deadline slot is only filled when empty, so a
    /// repeated resume can never produce a second pending tick.
    pub fn resume(&mut self, source: PauseSource, now: Instant) {
        self.sources.set(source, false);
        self.try_arm(now);
    }

    /// Advance to the next item, wrapping past the end.
    ///
    /// No-op on an empty list. Does not reset a running schedule; with
    /// [`with_manual_pause`](Self::with_manual_pause) configured it opens
    /// the suppression window instead.
    pub fn go_to_next(&mut self, now: Instant) {
        if self.items.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.items.len();
        self.note_manual_navigation(now);
    }

    /// Step back to the previous item, wrapping past the start.
    ///
    /// Same schedule semantics as [`go_to_next`](Self::go_to_next).
    pub fn go_to_previous(&mut self, now: Instant) {
        if self.items.is_empty() {
            return;
        }
        self.current = (self.current + self.items.len() - 1) % self.items.len();
        self.note_manual_navigation(now);
    }

    /// Jump directly to `index`.
    ///
    /// An out-of-range index is silently ignored and leaves all state
    /// unchanged, including the manual window.
    pub fn go_to_index(&mut self, index: usize, now: Instant) {
        if index >= self.items.len() {
            return;
        }
        self.current = index;
        self.note_manual_navigation(now);
    }

    /// Currently displayed item, or `None` for an empty list.
    pub fn current_item(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    /// Current position. Always a valid index while the list is
    /// non-empty; 0 for an empty list (with no current item).
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of items in the carousel.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// The full item list, in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Configured advance interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether any suppressor (source or manual window) is active.
    pub fn is_paused(&self) -> bool {
        self.sources.any() || self.manual_until.is_some()
    }

    /// Whether `source` specifically is active.
    pub fn is_paused_by(&self, source: PauseSource) -> bool {
        self.sources.contains(source)
    }

    /// Whether a tick is currently armed, i.e. the carousel will advance
    /// on its own. Always false for lists of one item or fewer.
    pub fn is_cycling(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Record a manual interaction: when the manual-pause refinement is
    /// configured, open (or extend) the suppression window and cancel the
    /// pending tick.
    fn note_manual_navigation(&mut self, now: Instant) {
        if let Some(window) = self.manual_pause {
            self.manual_until = Some(now + window);
            self.next_tick = None;
        }
    }

    /// Arm the tick deadline if the slot is empty and nothing suppresses
    /// advancement.
    fn try_arm(&mut self, now: Instant) {
        if self.next_tick.is_none()
            && self.items.len() > 1
            && !self.sources.any()
            && self.manual_until.is_none()
        {
            self.next_tick = Some(now + self.interval);
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
