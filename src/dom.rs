use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use log::warn;
use web_sys::{
    window, FormData, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, SubmitEvent,
    Window,
};

use crate::form::{Cancelable, QuoteForm};
use crate::nav::{SectionBounds, Viewport};

/// [`Viewport`] backed by the browser window.
pub struct DomViewport;

impl DomViewport {
    fn element(id: &str) -> Option<HtmlElement> {
        window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        let element = Self::element(id)?;
        Some(SectionBounds {
            top: element.offset_top() as f64,
            height: element.offset_height() as f64,
        })
    }

    fn section_page_top(&self, id: &str) -> Option<f64> {
        let element = Self::element(id)?;
        let rect_top = element.get_bounding_client_rect().top();
        Some(rect_top + self.scroll_offset())
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// A `scroll` listener on the window that is removed when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(handler: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

impl Cancelable for SubmitEvent {
    fn cancel(&self) {
        self.prevent_default();
    }
}

/// [`QuoteForm`] over a mounted `<form>`, read through a `FormData` snapshot.
pub struct DomQuoteForm {
    form: HtmlFormElement,
    data: FormData,
}

impl DomQuoteForm {
    pub fn new(form: HtmlFormElement) -> Option<Self> {
        match FormData::new_with_form(&form) {
            Ok(data) => Some(Self { form, data }),
            Err(e) => {
                warn!("Could not read quote form: {:?}", e);
                None
            }
        }
    }
}

impl QuoteForm for DomQuoteForm {
    fn read(&self, name: &str) -> Option<String> {
        self.data.get(name).as_string()
    }

    fn reset(&self) {
        self.form.reset();
    }
}
