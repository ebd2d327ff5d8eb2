use crate::autoplay::Autoplay;
use crate::core::ManualInput;
use crate::dom;
use crate::overlay::Overlay;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Enter, pause/play and skip buttons on the floating bar.
pub fn wire_bar_buttons(document: &web::Document, overlay: &Overlay, autoplay: &Autoplay) {
    let (doc, ap) = (document.clone(), autoplay.clone());
    dom::add_click_listener(&overlay.enter_button, move || ap.enter(&doc));

    let ap = autoplay.clone();
    dom::add_click_listener(&overlay.pause_button, move || ap.toggle_pause());

    let (doc, ap) = (document.clone(), autoplay.clone());
    dom::add_click_listener(&overlay.skip_button, move || ap.skip(&doc));
}

/// Manual wheel or touch scrolling cancels autoplay; touches that start on
/// the floating bar are button presses and are ignored.
pub fn wire_manual_input(overlay: Rc<Overlay>, autoplay: &Autoplay) {
    let Some(window) = web::window() else {
        return;
    };

    let ap = autoplay.clone();
    let wheel = Closure::wrap(Box::new(move |_ev: web::WheelEvent| {
        ap.manual_input(ManualInput::Wheel);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
    wheel.forget();

    let ap = autoplay.clone();
    let touch = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside_bar = overlay.bar_contains(target.as_ref());
        log::debug!("[input] touchstart inside_bar={}", inside_bar);
        ap.manual_input(ManualInput::Touch { inside_bar });
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchstart", touch.as_ref().unchecked_ref());
    touch.forget();
}
