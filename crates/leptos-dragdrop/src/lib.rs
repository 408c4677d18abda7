//! Leptos DragDrop Utilities
//!
//! Mouse-driven dragging of points over a 2D canvas for Leptos.
//! Uses movement threshold to distinguish click from drag.
//! Positions are reported as percentages of the canvas box, clamped to it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a drag started
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOrigin {
    /// A point already placed on the canvas
    Canvas,
    /// An item outside the canvas (e.g. a side stack)
    Outside,
}

/// A position on the canvas in percent, origin top-left
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Canvas box in client pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }

    /// Clamp a client position into the box and convert to percent.
    /// `None` for a collapsed (zero-sized) canvas.
    pub fn point_at(&self, client_x: f64, client_y: f64) -> Option<CanvasPoint> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let x = (client_x - self.left).clamp(0.0, self.width);
        let y = (client_y - self.top).clamp(0.0, self.height);
        Some(CanvasPoint {
            x: x / self.width * 100.0,
            y: y / self.height * 100.0,
        })
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

fn beyond_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// Whether a release should drop: canvas points always land (clamped),
/// outside items only when released over the canvas
fn accepts_drop(origin: DragOrigin, rect: &CanvasRect, client_x: f64, client_y: f64) -> bool {
    match origin {
        DragOrigin::Canvas => true,
        DragOrigin::Outside => rect.contains(client_x, client_y),
    }
}

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub dragging_read: ReadSignal<Option<(u32, DragOrigin)>>,
    pub dragging_write: WriteSignal<Option<(u32, DragOrigin)>>,
    /// Live pointer position while over (or clamped to) the canvas
    pub pointer_read: ReadSignal<Option<CanvasPoint>>,
    pub pointer_write: WriteSignal<Option<CanvasPoint>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<(u32, DragOrigin)>>,
    pub pending_write: WriteSignal<Option<(u32, DragOrigin)>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl DragSignals {
    pub fn is_dragging(&self, item_id: u32) -> bool {
        self.dragging_read.get().is_some_and(|(id, _)| id == item_id)
    }
}

pub fn create_drag_signals() -> DragSignals {
    let (dragging_read, dragging_write) = signal(None::<(u32, DragOrigin)>);
    let (pointer_read, pointer_write) = signal(None::<CanvasPoint>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<(u32, DragOrigin)>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DragSignals {
        dragging_read,
        dragging_write,
        pointer_read,
        pointer_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// End drag operation
pub fn end_drag(drag: &DragSignals) {
    drag.dragging_write.set(None);
    drag.pointer_write.set(None);
    drag.pending_write.set(None);
    drag.drag_just_ended_write.set(true);

    // Swallow the click that follows the mouseup
    if let Some(win) = web_sys::window() {
        let clear = drag.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(
    drag: DragSignals,
    item_id: u32,
    origin: DragOrigin,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Keep the browser from selecting text while dragging
        ev.prevent_default();
        drag.pending_write.set(Some((item_id, origin)));
        drag.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Bind global mousemove/mouseup handlers for one canvas.
///
/// `canvas_rect` reads the canvas box at event time; `on_drop` receives the
/// dragged item and its clamped drop position.
pub fn bind_canvas_drag<R, F>(drag: DragSignals, canvas_rect: R, on_drop: F)
where
    R: Fn() -> Option<CanvasRect> + Clone + 'static,
    F: Fn(u32, CanvasPoint) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let rect_for_move = canvas_rect.clone();
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = drag.pending_read.get_untracked() else {
            return;
        };

        if drag.dragging_read.get_untracked().is_none() {
            let (start_x, start_y) = drag.start_read.get_untracked();
            if !beyond_threshold(ev.client_x() - start_x, ev.client_y() - start_y) {
                return;
            }
            drag.dragging_write.set(Some(pending));
        }

        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let pointer = rect_for_move()
            .filter(|rect| accepts_drop(pending.1, rect, x, y))
            .and_then(|rect| rect.point_at(x, y));
        drag.pointer_write.set(pointer);
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let dragging = drag.dragging_read.get_untracked();
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));

        if let Some((item_id, origin)) = dragging {
            let point = canvas_rect()
                .filter(|rect| accepts_drop(origin, rect, x, y))
                .and_then(|rect| rect.point_at(x, y));
            end_drag(&drag);
            if let Some(point) = point {
                on_drop(item_id, point);
            }
        } else {
            // Not dragging; the click event will fire on the element
            drag.pending_write.set(None);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const RECT: CanvasRect = CanvasRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };

    #[rstest]
    #[case(100.0, 50.0, 0.0, 0.0)]
    #[case(300.0, 150.0, 50.0, 50.0)]
    #[case(500.0, 250.0, 100.0, 100.0)]
    #[case(0.0, 0.0, 0.0, 0.0)]
    #[case(900.0, 125.0, 100.0, 37.5)]
    fn test_point_at_clamps(#[case] cx: f64, #[case] cy: f64, #[case] x: f64, #[case] y: f64) {
        assert_eq!(RECT.point_at(cx, cy), Some(CanvasPoint { x, y }));
    }

    #[test]
    fn test_collapsed_canvas_has_no_points() {
        let rect = CanvasRect { width: 0.0, ..RECT };
        assert_eq!(rect.point_at(100.0, 50.0), None);
    }

    #[test]
    fn test_outside_items_drop_only_inside() {
        assert!(accepts_drop(DragOrigin::Outside, &RECT, 120.0, 60.0));
        assert!(!accepts_drop(DragOrigin::Outside, &RECT, 20.0, 60.0));
        assert!(accepts_drop(DragOrigin::Canvas, &RECT, 20.0, 60.0));
    }

    #[test]
    fn test_threshold() {
        assert!(!beyond_threshold(5, -5));
        assert!(beyond_threshold(-6, 0));
        assert!(beyond_threshold(0, 6));
    }
}
