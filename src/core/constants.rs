// Sequence tuning constants shared by the scheduler, the easing curves and
// the per-frame projector. All fractions are in scroll-progress units unless
// the name says otherwise.

// Sign bands
pub const SIGN_SCROLL_BUDGET: f32 = 0.55; // shared by every sign
pub const LAST_SIGN_BONUS: f32 = 0.08; // appended to the final sign only
pub const SIGN_FADE_FRACTION: f32 = 0.25; // of each slot, for fade-in and again for fade-out

// Autoplay easing breakpoints (normalized time)
pub const EASE_RAMP_END: f64 = 0.02;
pub const EASE_CRUISE_END: f64 = 0.70;
pub const EASE_RAMP_DISTANCE: f64 = 0.11; // position left for ramp + arrival
pub const AUTOPLAY_APPROACH_SHARE: f64 = 0.80; // time spent approaching the last sign

// Durations (milliseconds)
pub const AUTOPLAY_DURATION_MS: f64 = 22_000.0;
pub const SKIP_DURATION_MS: f64 = 3_500.0;

// Skip curve: quadratic lead-in, cubic soft landing
pub const SKIP_LEAD_IN: f64 = 0.3;

// Camera travel
pub const TUNNEL_SEGMENTS: usize = 50;
pub const TUNNEL_SEGMENT_SPACING: f32 = 2.0;
pub const TUNNEL_DEPTH: f32 = TUNNEL_SEGMENTS as f32 * TUNNEL_SEGMENT_SPACING;
pub const CAMERA_TRAVEL_BEYOND: f32 = 20.0; // keep flying past the last segment

// Tunnel wireframe fade
pub const TUNNEL_FADE_START: f32 = 0.60;
pub const TUNNEL_FADE_SPAN: f32 = 0.25;

// Starfield reveal
pub const STARFIELD_START: f32 = 0.70;
pub const STARFIELD_SPAN: f32 = 0.20;
pub const STARFIELD_MIN_SCALE: f32 = 0.01;
pub const STARFIELD_SCALE_SPAN: f32 = 8.0;
pub const STARFIELD_BEHIND_TUNNEL: f32 = 10.0;

// Logo + call to action
pub const LOGO_START: f32 = 0.65;
pub const LOGO_SPAN: f32 = 0.30;
pub const LOGO_MIN_SCALE: f32 = 0.15;

// Tagline drops in between the last sign and the logo
pub const TAGLINE_MOVE_SPAN: f32 = 0.20;
pub const TAGLINE_DROP_PX: f32 = 60.0;

// Subline trails the logo
pub const SUBLINE_DELAY: f32 = 0.05;
pub const SUBLINE_SPAN: f32 = 0.15;
pub const SUBLINE_DROP_PX: f32 = 30.0;

// Floating bar stops taking pointer input below this opacity
pub const BAR_INTERACTIVE_MIN_OPACITY: f32 = 0.1;

// Tunnel wireframe shape
pub const TUNNEL_SHRINK_PER_SEGMENT: f32 = 0.15; // deeper frames draw smaller than the frustum
pub const TUNNEL_DEPTH_EPSILON: f32 = 0.1;

// Starfield asset
pub const STAR_COUNT: usize = 8000;
pub const STAR_CUBE_SIZE: f32 = 30.0;
pub const STAR_SIZE_MIN: f32 = 0.15;
pub const STAR_SIZE_SPAN: f32 = 0.5;
pub const STAR_ALPHA_MIN: f32 = 0.15;
