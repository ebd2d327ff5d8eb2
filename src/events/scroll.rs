use crate::core::{project, SceneParams, SceneState, ScrollMetrics};
use crate::dom;
use crate::overlay::Overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reads the page scroll position, projects it, and publishes the result to
/// the DOM overlay and to the render loop.
pub struct ScrollSync {
    pub overlay: Rc<Overlay>,
    pub params: SceneParams,
    pub scene: Rc<RefCell<SceneState>>,
}

impl ScrollSync {
    pub fn metrics(&self) -> ScrollMetrics {
        let viewport_height = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        ScrollMetrics {
            scroll_y: dom::scroll_y(),
            spacer_top: self.overlay.scroll_spacer.offset_top() as f64,
            spacer_height: self.overlay.scroll_spacer.offset_height() as f64,
            viewport_height,
        }
    }

    pub fn sync(&self) {
        let progress = self.metrics().progress();
        let state = project(progress, &self.params);
        self.overlay.apply_scene(&state);
        *self.scene.borrow_mut() = state;
    }
}

/// Sync on every scroll event, and once now so a mid-page reload starts in
/// the right place.
pub fn wire_scroll_sync(sync: Rc<ScrollSync>) {
    sync.sync();
    let closure = Closure::wrap(Box::new(move || {
        sync.sync();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the canvas backing store matched to the (visual) viewport.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, sync: Rc<ScrollSync>) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        // Spacer-relative progress depends on the viewport height.
        sync.sync();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        if let Some(vv) = window.visual_viewport() {
            _ = vv.add_event_listener_with_callback(
                "resize",
                resize_closure.as_ref().unchecked_ref(),
            );
        }
    }
    resize_closure.forget();
}
