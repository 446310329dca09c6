// Defaults and bounds for generated instances and sessions

use std::ops::RangeInclusive;

/// Display canvas the generated node positions fall inside
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const CANVAS_MARGIN: f64 = 50.0;

/// Value ranges for generated arrays
pub const SORT_VALUES: RangeInclusive<i64> = 10..=100;
pub const COUNT_SORT_VALUES: RangeInclusive<i64> = 1..=15;
pub const RADIX_SORT_VALUES: RangeInclusive<i64> = 1..=999;
pub const SEARCH_VALUES: RangeInclusive<i64> = 1..=99;
pub const TREE_VALUES: RangeInclusive<i64> = 1..=99;
pub const HEAP_VALUES: RangeInclusive<i64> = 1..=99;

/// Session-boundary clamps
pub const ARRAY_SIZE_MAX: usize = 40;
pub const NODE_COUNT_MIN: usize = 1;
pub const NODE_COUNT_MAX: usize = 25;
pub const EXTRA_EDGES_MAX: usize = 30;
pub const TREE_NODES_MAX: usize = 31;
pub const DELAY_MIN_MS: u64 = 10;
pub const DELAY_MAX_MS: u64 = 2000;

/// Largest heap the heap session accepts (a full four-level tree)
pub const HEAP_CAPACITY: usize = 15;

/// Values inserted by a "build random heap" operation
pub const HEAP_BUILD_COUNT: usize = 7;

/// Superseded states kept for stepping backward
pub const DEFAULT_HISTORY_LIMIT: usize = 4096;
