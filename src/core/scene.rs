use super::bands::{Band, BandSchedule};
use super::constants::*;
use super::ease::smoothstep;
use smallvec::SmallVec;

/// Static inputs to the projector, derived once from the band layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneParams {
    bands: Vec<Band>,
    tagline_start: f32,
}

impl SceneParams {
    pub fn new(schedule: &BandSchedule) -> Self {
        Self {
            bands: schedule.bands().to_vec(),
            tagline_start: schedule.end(),
        }
    }

    #[inline]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

/// Opacity plus vertical offset of a text line that drops into place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reveal {
    pub opacity: f32,
    pub offset_y_px: f32,
}

/// Every visual channel for one scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    pub camera_z: f32,
    pub sign_opacity: SmallVec<[f32; 8]>,
    pub bar_opacity: f32,
    pub bar_interactive: bool,
    pub tunnel_opacity: f32,
    pub star_opacity: f32,
    pub star_scale: f32,
    pub star_z: f32,
    pub tagline: Reveal,
    pub subline: Reveal,
    pub logo_opacity: f32,
    pub logo_scale: f32,
    pub cta_visible: bool,
}

#[inline]
fn unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Linear 0→1 over `[start, start + span]`; a non-positive span is a step at `start`.
#[inline]
fn ramp(progress: f32, start: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return if progress >= start { 1.0 } else { 0.0 };
    }
    unit((progress - start) / span)
}

/// Sign opacity inside its band: smooth fade-in (skipped for the first sign),
/// plateau, smooth fade-out. Zero outside the band or for an empty band.
pub fn sign_opacity(band: &Band, progress: f32) -> f32 {
    if band.is_empty() || progress < band.start || progress > band.end {
        return 0.0;
    }
    let mut opacity = if band.is_first {
        1.0
    } else {
        smoothstep(progress, band.start, band.start + band.fade)
    };
    if progress > band.fade_out_start() {
        opacity = opacity.min(1.0 - smoothstep(progress, band.fade_out_start(), band.end));
    }
    unit(opacity)
}

/// Map scroll progress to every visual channel.
pub fn project(progress: f32, params: &SceneParams) -> SceneState {
    let p = unit(progress);

    let signs = params.bands.iter().map(|b| sign_opacity(b, p)).collect();

    // Bar stays up while signs show and fades out with the last one.
    let bar_opacity = match params.bands.last() {
        Some(last) if p >= last.fade_out_start() => {
            1.0 - smoothstep(p, last.fade_out_start(), last.end)
        }
        _ => 1.0,
    };

    let tunnel_opacity = 1.0 - ramp(p, TUNNEL_FADE_START, TUNNEL_FADE_SPAN);

    // Ease-out cubic so the expansion settles.
    let star_raw = ramp(p, STARFIELD_START, STARFIELD_SPAN);
    let star = 1.0 - (1.0 - star_raw).powi(3);

    let tagline_fade = ramp(p, params.tagline_start, LOGO_START - params.tagline_start);
    let tagline_move = ramp(p, params.tagline_start, TAGLINE_MOVE_SPAN);

    let subline = ramp(p, LOGO_START + SUBLINE_DELAY, SUBLINE_SPAN);

    let logo = ramp(p, LOGO_START, LOGO_SPAN);

    SceneState {
        camera_z: -(p * (TUNNEL_DEPTH + CAMERA_TRAVEL_BEYOND)),
        sign_opacity: signs,
        bar_opacity: unit(bar_opacity),
        bar_interactive: unit(bar_opacity) >= BAR_INTERACTIVE_MIN_OPACITY,
        tunnel_opacity: unit(tunnel_opacity),
        star_opacity: unit(star),
        star_scale: STARFIELD_MIN_SCALE + unit(star) * STARFIELD_SCALE_SPAN,
        star_z: -TUNNEL_DEPTH - STARFIELD_BEHIND_TUNNEL,
        tagline: Reveal {
            opacity: tagline_fade,
            offset_y_px: -(1.0 - tagline_move) * TAGLINE_DROP_PX,
        },
        subline: Reveal {
            opacity: subline,
            offset_y_px: -(1.0 - subline) * SUBLINE_DROP_PX,
        },
        logo_opacity: logo,
        logo_scale: LOGO_MIN_SCALE + logo * (1.0 - LOGO_MIN_SCALE),
        cta_visible: logo >= 1.0,
    }
}
