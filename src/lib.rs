#![cfg(target_arch = "wasm32")]
use crate::core::geometry::{starfield, tunnel_lines, TunnelShape};
use crate::core::{
    AutoplayControls, AutoplayEase, BandSchedule, PiecewiseEase, SceneParams, SceneState,
    SequenceConfig,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod autoplay;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::{CAMERA_FOV_Y_DEGREES, CANVAS_ID, STAR_SEED};

/// Static animation inputs derived once from the page content.
struct Sequence {
    params: SceneParams,
    controls: AutoplayControls,
}

fn build_sequence(config: &SequenceConfig, sign_lengths: &[usize]) -> anyhow::Result<Sequence> {
    if sign_lengths.iter().all(|&len| len == 0) {
        log::warn!(
            "[bands] {} signs without text; splitting the budget evenly",
            sign_lengths.len()
        );
    }
    let schedule = BandSchedule::new(sign_lengths, config.sign_budget, config.last_sign_bonus)?;
    log::info!(
        "[bands] signs={} end={:.3} target_stop={:.3}",
        schedule.len(),
        schedule.end(),
        schedule.target_stop()
    );

    let approach = match PiecewiseEase::new(schedule.target_stop() as f64, config.ease) {
        Ok(curve) => Some(curve),
        Err(e) => {
            log::warn!("[ease] approach disabled, using plain finale: {}", e);
            None
        }
    };
    let curve = AutoplayEase::new(approach, config.approach_share);
    Ok(Sequence {
        params: SceneParams::new(&schedule),
        controls: AutoplayControls::new(
            curve,
            config.autoplay_duration_ms,
            config.skip_duration_ms,
        ),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tunnel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let overlay = Rc::new(overlay::Overlay::lookup(&document)?);
    let Sequence { params, controls } =
        build_sequence(&SequenceConfig::default(), &overlay.sign_lengths())?;

    // ---------------- Scroll sync + overlays ----------------
    let scene = Rc::new(RefCell::new(SceneState::default()));
    let sync = Rc::new(events::ScrollSync {
        overlay: overlay.clone(),
        params,
        scene: scene.clone(),
    });
    events::wire_resize(&canvas, sync.clone());
    events::wire_scroll_sync(sync);

    // ---------------- Autoplay controls ----------------
    let autoplay = autoplay::Autoplay::new(controls, overlay.clone());
    events::wire_bar_buttons(&document, &overlay, &autoplay);
    events::wire_manual_input(overlay.clone(), &autoplay);

    // ---------------- Renderer ----------------
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let lines = tunnel_lines(&TunnelShape::new(CAMERA_FOV_Y_DEGREES, aspect));
    let stars = starfield(crate::core::constants::STAR_COUNT, STAR_SEED);
    let gpu = frame::init_gpu(&canvas, &lines, &stars).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        scene,
        canvas,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
