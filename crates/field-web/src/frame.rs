use crate::render;
use crate::surface::CanvasSurface;
use field_core::{CloudScene, FieldScene, InputTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub input: Rc<RefCell<InputTracker>>,
    pub field: FieldScene,
    pub surface: CanvasSurface,
    pub clouds: CloudScene,
    pub cloud_canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f64();
        let width = self.cloud_canvas.width();
        let height = self.cloud_canvas.height();
        {
            let input = self.input.borrow();
            let viewport = *input.viewport();

            // 2D field: simulate, then draw nodes and edges
            self.field.tick(&input);
            self.field.render(&mut self.surface, &viewport);

            // 3D clouds: displace, then apply the camera rig
            self.clouds.resize(width as f32, height as f32);
            self.clouds.tick(t, input.rig());
        } // drop input borrow before rendering

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            if let Err(e) = g.render(&mut self.clouds) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &CloudScene,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
