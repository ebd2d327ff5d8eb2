use crate::constants::*;
use crate::core::{BarMode, SceneState};
use crate::dom;
use web_sys as web;

/// Every HTML element the sequence writes to. All are looked up once at
/// startup; a missing one aborts init.
pub struct Overlay {
    pub signs: Vec<web::HtmlElement>,
    pub floating_bar: web::HtmlElement,
    pub enter_button: web::HtmlElement,
    pub controls: web::HtmlElement,
    pub pause_button: web::HtmlElement,
    pub skip_button: web::HtmlElement,
    pause_icon: web::HtmlElement,
    play_icon: web::HtmlElement,
    logo_img: web::HtmlElement,
    contact_link: web::HtmlElement,
    tagline: web::HtmlElement,
    subline: web::HtmlElement,
    cta_row: web::HtmlElement,
    pub scroll_spacer: web::HtmlElement,
}

impl Overlay {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        let pause_button = dom::require_by_id(document, PAUSE_BUTTON_ID)?;
        let logo_overlay = dom::require_by_id(document, LOGO_OVERLAY_ID)?;
        Ok(Self {
            signs: dom::query_all(document, SIGN_SELECTOR)?,
            floating_bar: dom::require_by_id(document, FLOATING_BAR_ID)?,
            enter_button: dom::require_by_id(document, ENTER_BUTTON_ID)?,
            controls: dom::require_by_id(document, CONTROLS_ID)?,
            skip_button: dom::require_by_id(document, SKIP_BUTTON_ID)?,
            pause_icon: dom::require_child(&pause_button, PAUSE_ICON_SELECTOR)?,
            play_icon: dom::require_child(&pause_button, PLAY_ICON_SELECTOR)?,
            pause_button,
            logo_img: dom::require_child(&logo_overlay, "img")?,
            contact_link: dom::require_child(&logo_overlay, CONTACT_LINK_SELECTOR)?,
            tagline: dom::require_by_id(document, TAGLINE_ID)?,
            subline: dom::require_by_id(document, SUBLINE_ID)?,
            cta_row: dom::require_by_id(document, CTA_ROW_ID)?,
            scroll_spacer: dom::require_by_id(document, SCROLL_SPACER_ID)?,
        })
    }

    /// Text length of every sign, used to weight the scroll bands.
    pub fn sign_lengths(&self) -> Vec<usize> {
        self.signs
            .iter()
            .map(|el| el.text_content().map_or(0, |t| t.chars().count()))
            .collect()
    }

    pub fn apply_scene(&self, state: &SceneState) {
        for (el, opacity) in self.signs.iter().zip(state.sign_opacity.iter()) {
            dom::set_opacity(el, *opacity);
        }

        dom::set_opacity(&self.floating_bar, state.bar_opacity);
        _ = self.floating_bar.style().set_property(
            "pointer-events",
            if state.bar_interactive { "auto" } else { "none" },
        );

        dom::set_opacity(&self.tagline, state.tagline.opacity);
        dom::set_transform(
            &self.tagline,
            &format!("translateY({}px)", state.tagline.offset_y_px),
        );
        dom::set_opacity(&self.subline, state.subline.opacity);
        dom::set_transform(
            &self.subline,
            &format!("translateY({}px)", state.subline.offset_y_px),
        );

        dom::set_opacity(&self.logo_img, state.logo_opacity);
        dom::set_transform(&self.logo_img, &format!("scale({})", state.logo_scale));
        dom::set_class(&self.cta_row, VISIBLE_CLASS, state.cta_visible);
        dom::set_class(&self.contact_link, VISIBLE_CLASS, state.cta_visible);
    }

    pub fn apply_bar_mode(&self, mode: BarMode) {
        dom::set_class(&self.enter_button, HIDDEN_CLASS, mode.controls_visible());
        dom::set_class(&self.controls, ACTIVE_CLASS, mode.controls_visible());
        let paused = mode == BarMode::Paused;
        dom::set_class(&self.pause_icon, HIDDEN_CLASS, paused);
        dom::set_class(&self.play_icon, HIDDEN_CLASS, !paused);
    }

    /// True when `target` sits inside the floating bar.
    pub fn bar_contains(&self, target: Option<&web::Node>) -> bool {
        self.floating_bar.contains(target)
    }
}
