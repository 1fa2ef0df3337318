use crate::constants::CLICK_DRAG_SLOP_PX;
use crate::dom;
use crate::input;
use field_core::InputTracker;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub field_canvas: web::HtmlCanvasElement,
    pub cloud_canvas: web::HtmlCanvasElement,
    pub input: Rc<RefCell<InputTracker>>,
    /// Where the current press started and whether it has moved past the slop.
    pub press: Rc<Cell<Option<(Vec2, bool)>>>,
}

impl InputWiring {
    pub fn new(
        field_canvas: web::HtmlCanvasElement,
        cloud_canvas: web::HtmlCanvasElement,
        input: Rc<RefCell<InputTracker>>,
    ) -> Self {
        Self {
            field_canvas,
            cloud_canvas,
            input,
            press: Rc::new(Cell::new(None)),
        }
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_click(&w);
    wire_wheel(&w);
    wire_resize(&w);
}

fn listen_on_window(event: &str, callback: &js_sys::Function) {
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, callback);
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.field_canvas);
        if let Some((start, moved)) = w.press.get() {
            if !moved && pos.distance(start) > CLICK_DRAG_SLOP_PX {
                w.press.set(Some((start, true)));
            }
        }
        w.input.borrow_mut().on_pointer_move(pos);
    }) as Box<dyn FnMut(_)>);
    listen_on_window("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.field_canvas);
        w.press.set(Some((pos, false)));
        w.input.borrow_mut().on_pointer_down(pos);
    }) as Box<dyn FnMut(_)>);
    listen_on_window("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.input.borrow_mut().on_pointer_up();
    }) as Box<dyn FnMut(_)>);
    listen_on_window("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let dragged = matches!(w.press.take(), Some((_, true)));
        if dragged {
            log::debug!("[click] ignored after drag");
            return;
        }
        w.input.borrow_mut().on_click();
    }) as Box<dyn FnMut(_)>);
    listen_on_window("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.input.borrow_mut().on_wheel(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    listen_on_window("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        dom::sync_canvas_css_size(&w.field_canvas);
        dom::sync_canvas_backing_size(&w.cloud_canvas);
        let extent = input::canvas_extent(&w.field_canvas);
        w.input.borrow_mut().on_resize(extent.x, extent.y);
        log::info!("[resize] field {}x{}", extent.x, extent.y);
    }) as Box<dyn FnMut(_)>);
    listen_on_window("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
