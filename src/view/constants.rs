//! Rendering constants shared across the view.

use std::time::Duration;

/// Event-poll timeout for the main loop. Doubles as the timer tick
/// granularity for the carousels and form deadlines, so it must stay
/// well below the cycle interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Indicator dot for the current carousel item.
pub const DOT_ACTIVE: &str = "●";

/// Indicator dot for the other carousel items.
pub const DOT_INACTIVE: &str = "○";

/// Width of a skill proficiency bar, in cells.
pub const SKILL_BAR_WIDTH: usize = 10;

/// Filled cell of a skill proficiency bar.
pub const BAR_FILLED: &str = "█";

/// Empty cell of a skill proficiency bar.
pub const BAR_EMPTY: &str = "░";
