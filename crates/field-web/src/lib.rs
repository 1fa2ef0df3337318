#![cfg(target_arch = "wasm32")]
use field_core::{
    CloudParams, CloudScene, ConnectivityParams, FieldParams, FieldScene, InputTracker,
    RigParams, Viewport,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod style;
mod surface;

use constants::{CLOUD_CANVAS_ID, FIELD_CANVAS_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document()?;
    let field_canvas = dom::canvas_by_id(&document, FIELD_CANVAS_ID)?;
    let cloud_canvas = dom::canvas_by_id(&document, CLOUD_CANVAS_ID)?;

    // Field simulates in CSS pixels; the WebGPU canvas tracks devicePixelRatio
    dom::sync_canvas_css_size(&field_canvas);
    dom::sync_canvas_backing_size(&cloud_canvas);

    let extent = input::canvas_extent(&field_canvas);
    let viewport = Viewport::new(extent.x, extent.y);
    let tracker = Rc::new(RefCell::new(InputTracker::new(viewport, RigParams::default())));

    let mut rng = StdRng::from_entropy();
    let field = FieldScene::new(
        &viewport,
        FieldParams::default(),
        ConnectivityParams::default(),
        &mut rng,
    );
    let surface = surface::CanvasSurface::new(&field_canvas, FIELD_CANVAS_ID)?;

    let cloud_extent = input::canvas_extent(&cloud_canvas);
    let clouds = CloudScene::new(
        &CloudParams::default(),
        cloud_extent.x / cloud_extent.y.max(1.0),
        tracker.borrow().rig(),
        &mut rng,
    );
    log::info!(
        "[init] field {}x{} with {} nodes; clouds {}+{} points",
        viewport.width,
        viewport.height,
        field.field.particles().len(),
        clouds.outline.len(),
        clouds.label.len()
    );

    events::wire_input_handlers(events::InputWiring::new(
        field_canvas.clone(),
        cloud_canvas.clone(),
        tracker.clone(),
    ));

    // The 2D field keeps running even if WebGPU is unavailable
    let gpu = frame::init_gpu(&cloud_canvas, &clouds).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        input: tracker,
        field,
        surface,
        clouds,
        cloud_canvas,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
