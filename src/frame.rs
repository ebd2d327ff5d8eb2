use crate::core::SceneState;
use crate::render::{self, StarfieldFrame};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::geometry::StarInstance;

/// Per-frame render state. The scene is recomputed by scroll sync; the loop
/// only copies it into the GPU state and draws, whether or not anything moved.
pub struct FrameContext<'a> {
    pub gpu: Option<render::GpuState<'a>>,
    pub scene: Rc<RefCell<SceneState>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let Some(g) = &mut self.gpu else {
            return;
        };
        {
            let scene = self.scene.borrow();
            g.set_camera_z(scene.camera_z);
            g.set_tunnel_opacity(scene.tunnel_opacity);
            g.set_starfield(StarfieldFrame {
                opacity: scene.star_opacity,
                scale: scene.star_scale,
                z_offset: scene.star_z,
            });
        }
        if let Some(w) = web::window() {
            g.set_pixel_ratio(w.device_pixel_ratio() as f32);
        }
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = g.render(dt_sec) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    tunnel_lines: &[Vec3],
    stars: &[StarInstance],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, tunnel_lines, stars).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
