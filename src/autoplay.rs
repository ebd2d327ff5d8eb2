use crate::core::{AutoplayControls, BarMode, FrameOutcome, ManualInput, TaskId};
use crate::dom;
use crate::overlay::Overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct DriverState {
    controls: AutoplayControls,
    raf_handle: Option<i32>,
    scheduled: Option<TaskId>,
}

impl DriverState {
    fn cancel_frame(&mut self) {
        if let Some(handle) = self.raf_handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
        self.scheduled = None;
    }
}

/// Drives `AutoplayControls` from `requestAnimationFrame` and mirrors the
/// bar mode into the DOM. Cloning shares the same driver.
#[derive(Clone)]
pub struct Autoplay {
    state: Rc<RefCell<DriverState>>,
    overlay: Rc<Overlay>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl Autoplay {
    pub fn new(controls: AutoplayControls, overlay: Rc<Overlay>) -> Self {
        let this = Self {
            state: Rc::new(RefCell::new(DriverState {
                controls,
                raf_handle: None,
                scheduled: None,
            })),
            overlay,
            tick: Rc::new(RefCell::new(None)),
        };
        let driver = this.clone();
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            driver.on_frame(ts);
        }) as Box<dyn FnMut(f64)>));
        this.overlay.apply_bar_mode(BarMode::Entry);
        this
    }

    pub fn enter(&self, document: &web::Document) {
        let (now, from, to) = (dom::now_ms(), dom::scroll_y(), dom::page_end(document));
        let mode = {
            let mut st = self.state.borrow_mut();
            st.cancel_frame();
            let id = st.controls.enter(now, from, to);
            log::info!("[autoplay] start task={} from={:.0} to={:.0}", id, from, to);
            st.controls.mode()
        };
        self.overlay.apply_bar_mode(mode);
        self.schedule();
    }

    pub fn toggle_pause(&self) {
        let now = dom::now_ms();
        let mode = {
            let mut st = self.state.borrow_mut();
            let mode = st.controls.toggle_pause(now);
            if mode == BarMode::Paused {
                st.cancel_frame();
            }
            mode
        };
        log::info!("[autoplay] mode={:?}", mode);
        self.overlay.apply_bar_mode(mode);
        if mode == BarMode::Playing {
            self.schedule();
        }
    }

    pub fn skip(&self, document: &web::Document) {
        let (now, from, to) = (dom::now_ms(), dom::scroll_y(), dom::page_end(document));
        let mode = {
            let mut st = self.state.borrow_mut();
            st.cancel_frame();
            let id = st.controls.skip(now, from, to);
            log::info!("[autoplay] skip task={} from={:.0} to={:.0}", id, from, to);
            st.controls.mode()
        };
        self.overlay.apply_bar_mode(mode);
        self.schedule();
    }

    /// Wheel/touch input; cancels any programmatic scroll.
    pub fn manual_input(&self, input: ManualInput) {
        let cancelled = {
            let mut st = self.state.borrow_mut();
            let cancelled = st.controls.manual_input(input);
            if cancelled {
                st.cancel_frame();
            }
            cancelled
        };
        if cancelled {
            log::info!("[autoplay] cancelled by {:?}", input);
            self.overlay.apply_bar_mode(BarMode::Entry);
        }
    }

    fn schedule(&self) {
        let mut st = self.state.borrow_mut();
        let Some(id) = st.controls.animator().running_id() else {
            return;
        };
        if st.scheduled == Some(id) && st.raf_handle.is_some() {
            return;
        }
        st.cancel_frame();
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(handle) => {
                    st.raf_handle = Some(handle);
                    st.scheduled = Some(id);
                }
                Err(e) => log::error!("[autoplay] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn on_frame(&self, ts: f64) {
        let (outcome, mode) = {
            let mut st = self.state.borrow_mut();
            st.raf_handle = None;
            let Some(id) = st.scheduled.take() else {
                return;
            };
            (st.controls.frame(id, ts), st.controls.mode())
        };
        match outcome {
            FrameOutcome::Idle => {}
            FrameOutcome::ScrollTo(y) => {
                scroll_window_to(y);
                self.schedule();
            }
            FrameOutcome::Finished(y) => {
                scroll_window_to(y);
                log::info!("[autoplay] finished at {:.0}", y);
                self.overlay.apply_bar_mode(mode);
            }
        }
    }
}

fn scroll_window_to(y: f64) {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, y);
    }
}
