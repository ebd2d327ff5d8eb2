// Render and DOM tuning for the web front-end.

// Camera
pub const CAMERA_FOV_Y_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Starfield asset seed; fixed so every visit sees the same sky
pub const STAR_SEED: u64 = 0x5EED_57A2;

// Element ids
pub const CANVAS_ID: &str = "canvas";
pub const SCROLL_SPACER_ID: &str = "scroll-spacer";
pub const FLOATING_BAR_ID: &str = "floating-bar";
pub const ENTER_BUTTON_ID: &str = "floating-bar-enter";
pub const CONTROLS_ID: &str = "floating-bar-controls";
pub const PAUSE_BUTTON_ID: &str = "floating-bar-pause";
pub const SKIP_BUTTON_ID: &str = "floating-bar-skip";
pub const LOGO_OVERLAY_ID: &str = "logo-overlay";
pub const TAGLINE_ID: &str = "cta-tagline";
pub const SUBLINE_ID: &str = "cta-subline";
pub const CTA_ROW_ID: &str = "cta-row";

// Selectors and classes
pub const SIGN_SELECTOR: &str = ".sign";
pub const PAUSE_ICON_SELECTOR: &str = ".pause-icon";
pub const PLAY_ICON_SELECTOR: &str = ".play-icon";
pub const CONTACT_LINK_SELECTOR: &str = ".contact-link";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
