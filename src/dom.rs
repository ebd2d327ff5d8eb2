use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up `#id` as an `HtmlElement`; a missing element is a startup error.
pub fn require_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not an HtmlElement: {:?}", id, e)))
}

/// First descendant of `parent` matching `selector`.
pub fn require_child(parent: &web::Element, selector: &str) -> anyhow::Result<web::HtmlElement> {
    parent
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!(format!("bad selector {}: {:?}", selector, e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {} under #{}", selector, parent.id()))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{} is not an HtmlElement: {:?}", selector, e)))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!(format!("bad selector {}: {:?}", selector, e)))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

#[inline]
pub fn add_click_listener(element: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_opacity(element: &web::HtmlElement, opacity: f32) {
    _ = element
        .style()
        .set_property("opacity", &format!("{}", opacity));
}

#[inline]
pub fn set_transform(element: &web::HtmlElement, transform: &str) {
    _ = element.style().set_property("transform", transform);
}

#[inline]
pub fn set_class(element: &web::Element, class: &str, on: bool) {
    let cl = element.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Current vertical scroll offset of the window.
#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// `performance.now()` in milliseconds; the same clock as frame timestamps.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Document end used as the autoplay and skip target.
pub fn page_end(document: &web::Document) -> f64 {
    document
        .body()
        .map(|b| b.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Visible viewport size in CSS pixels, preferring the visual viewport on mobile.
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    if let Some(vv) = w.visual_viewport() {
        return (vv.width(), vv.height());
    }
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let (css_w, css_h) = viewport_size();
        let w_px = (css_w * dpr) as u32;
        let h_px = (css_h * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
