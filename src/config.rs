#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug // Verbose engine output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(debug_assertions)]
pub fn trace_level() -> tracing::Level {
    tracing::Level::DEBUG
}

#[cfg(not(debug_assertions))]
pub fn trace_level() -> tracing::Level {
    tracing::Level::INFO
}

/// Pinned section timing. Phase bounds are fractions of local progress.
pub mod pin {
    /// Viewport heights reserved by every pinned section on this page.
    pub const SCROLL_EXTENT: f64 = 1.3;
    /// Pinned sections must reserve at least one viewport height.
    pub const MIN_SCROLL_EXTENT: f64 = 1.0;
    /// End of the entrance phase.
    pub const ENTRANCE_END: f64 = 0.3;
    /// Start of the exit phase.
    pub const EXIT_START: f64 = 0.7;
    /// Seconds a pinned timeline takes to catch up with the scroll position.
    pub const SCRUB_LAG_S: f64 = 0.6;
    /// Progress gap below which the catch-up lands on its target.
    pub const CATCH_UP_EPSILON: f64 = 1e-4;
}

/// Global snap rule tuning.
pub mod snap {
    /// Tolerance added on both sides of a pinned range, as a fraction of the
    /// total scrollable distance.
    pub const RANGE_BUFFER: f64 = 0.02;
    pub const MIN_DURATION_S: f64 = 0.15;
    pub const MAX_DURATION_S: f64 = 0.35;
    /// Normalized distance at which the snap duration reaches its maximum.
    pub const FULL_DURATION_DISTANCE: f64 = 0.05;
    /// Scroll must stay idle this long (ms) before a gesture counts as ended.
    pub const IDLE_MS: u32 = 120;
    /// Tween tick (ms), roughly one frame at 60 Hz.
    pub const TICK_MS: u32 = 16;
    /// Distances below this many pixels are not worth animating.
    pub const MIN_TRAVEL_PX: f64 = 1.0;
}

pub mod nav {
    /// Header switches to its solid style past this scroll offset (px).
    pub const SOLID_AFTER_PX: f64 = 100.0;
    /// Delay between mobile menu items fading in (ms).
    pub const MENU_STAGGER_MS: u32 = 50;
}

/// Scrubbed reveals in flowing sections. Lines are fractions of the viewport
/// height measured from its top.
pub mod reveal {
    pub const HEADING: (f64, f64) = (0.80, 0.55);
    pub const GRID: (f64, f64) = (0.75, 0.40);
    pub const TRUST: (f64, f64) = (0.85, 0.70);
    pub const CONTACT_INFO: (f64, f64) = (0.70, 0.40);
    pub const CONTACT_FORM: (f64, f64) = (0.65, 0.35);
}
