//! DOM binding for the carousel.
//!
//! [`DomSlideView`] drives slides and thumbnails found under a root element,
//! and [`ChartCarousel::mount`] wires the click listeners to a controller.
//! Listeners live as long as the page; there is no teardown.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use crate::{CarouselConfig, CarouselController, CarouselError, Direction, SlideView, ThumbnailWindow};

/// [`SlideView`] backed by elements in a document.
#[derive(Clone, Debug)]
pub struct DomSlideView {
    slides: Vec<HtmlElement>,
    thumbnails: Vec<HtmlElement>,
    total_label: Option<Element>,
    current_label: Option<Element>,
    config: CarouselConfig,
}

impl DomSlideView {
    /// Collect the carousel elements under `root`.
    ///
    /// Missing count labels are tolerated (their text is simply not drawn);
    /// a config that fails validation is rejected.
    pub fn from_root(root: &Element, config: CarouselConfig) -> Result<Self, CarouselError> {
        config.validate()?;

        let slides = query_all(root, &config.slide_selector)?;
        let thumbnails = query_all(root, &config.thumbnail_selector)?;
        if slides.len() != thumbnails.len() {
            tracing::warn!(
                slides = slides.len(),
                thumbnails = thumbnails.len(),
                "slide and thumbnail counts differ"
            );
        }

        let total_label = query_one(root, &config.total_selector)?;
        let current_label = query_one(root, &config.current_selector)?;

        Ok(Self {
            slides,
            thumbnails,
            total_label,
            current_label,
            config,
        })
    }

    /// Get the config this view was built with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Width of one thumbnail including its horizontal margins.
    pub fn thumbnail_outer_width(&self) -> f64 {
        let Some(thumb) = self.thumbnails.first() else {
            return 0.0;
        };
        let mut width = thumb.offset_width() as f64;

        if let Some(style) = web_sys::window().and_then(|w| w.get_computed_style(thumb).ok().flatten()) {
            for side in ["margin-left", "margin-right"] {
                width += style.get_property_value(side).map(|v| parse_px(&v)).unwrap_or(0.0);
            }
        }
        width
    }
}

impl SlideView for DomSlideView {
    fn slide_count(&self) -> usize {
        // Thumbnails define the navigable set
        self.thumbnails.len()
    }

    fn show_slide(&mut self, index: usize) {
        for slide in &self.slides {
            set_style(slide, "display", "none");
        }
        let Some(slide) = self.slides.get(index) else {
            tracing::warn!(index, "no slide element at index");
            return;
        };
        set_style(slide, "display", "");
        animate_property(slide, "opacity", "0", "1", self.config.fade_ms);
    }

    fn set_thumbnail_active(&mut self, index: usize) {
        if let Some(thumb) = self.thumbnails.get(index) {
            if thumb.class_list().add_1(&self.config.active_class).is_err() {
                tracing::warn!(index, "failed to mark thumbnail active");
            }
        }
    }

    fn clear_all_thumbnail_active(&mut self) {
        for (index, thumb) in self.thumbnails.iter().enumerate() {
            if thumb.class_list().remove_1(&self.config.active_class).is_err() {
                tracing::warn!(index, "failed to clear thumbnail active");
            }
        }
    }

    fn scroll_thumbnails_to(&mut self, offset: usize) {
        let left = format!(
            "{}px",
            ThumbnailWindow::pixel_offset(offset, self.thumbnail_outer_width())
        );
        for thumb in &self.thumbnails {
            let from = thumb
                .style()
                .get_property_value("left")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "0px".to_string());
            set_style(thumb, "left", &left);
            animate_property(thumb, "left", &from, &left, self.config.scroll_ms);
        }
    }

    fn render_current_index(&mut self, one_based_index: usize) {
        if let Some(label) = &self.current_label {
            label.set_text_content(Some(&one_based_index.to_string()));
        }
    }

    fn render_total_slides(&mut self, count: usize) {
        if let Some(label) = &self.total_label {
            label.set_text_content(Some(&count.to_string()));
        }
    }
}

/// A carousel mounted on a document, with its click listeners attached.
#[derive(Clone, Debug)]
pub struct ChartCarousel {
    controller: Rc<RefCell<CarouselController<DomSlideView>>>,
}

impl ChartCarousel {
    /// Build a carousel over `root` and attach its click listeners.
    ///
    /// A root without thumbnails produces an inert carousel with no
    /// listeners attached.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use chart_carousel::{CarouselConfig, web::ChartCarousel};
    ///
    /// let root: web_sys::Element = // ... the carousel container
    /// let carousel = ChartCarousel::mount(&root, CarouselConfig::default())?;
    /// assert_eq!(carousel.current_index(), 0);
    /// ```
    pub fn mount(root: &Element, config: CarouselConfig) -> Result<Self, CarouselError> {
        let window = config.thumbnail_window();
        let view = DomSlideView::from_root(root, config)?;
        let controller = CarouselController::with_window(view, window);
        let enabled = controller.is_enabled();
        let carousel = Self {
            controller: Rc::new(RefCell::new(controller)),
        };

        if enabled {
            carousel.bind_buttons(root)?;
            carousel.bind_thumbnails()?;
        }
        Ok(carousel)
    }

    /// Mount on the first element in the document matching `selector`.
    pub fn mount_selector(selector: &str, config: CarouselConfig) -> Result<Self, CarouselError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CarouselError::Dom {
                context: "no document available".into(),
            })?;
        let root = document
            .query_selector(selector)
            .map_err(|_| CarouselError::Dom {
                context: format!("querySelector('{}') failed", selector),
            })?
            .ok_or_else(|| CarouselError::MissingElement {
                selector: selector.to_string(),
            })?;
        Self::mount(&root, config)
    }

    /// Shared handle to the controller.
    pub fn controller(&self) -> Rc<RefCell<CarouselController<DomSlideView>>> {
        Rc::clone(&self.controller)
    }

    /// Get the index of the displayed slide.
    pub fn current_index(&self) -> usize {
        self.controller.borrow().current_index()
    }

    fn bind_buttons(&self, root: &Element) -> Result<(), CarouselError> {
        let (selector, attribute, previous_value) = {
            let ctrl = self.controller.borrow();
            let config = ctrl.view().config();
            (
                config.button_selector.clone(),
                config.direction_attribute.clone(),
                config.previous_value.clone(),
            )
        };

        for button in query_all(root, &selector)? {
            let controller = Rc::clone(&self.controller);
            let target = button.clone();
            let attribute = attribute.clone();
            let previous_value = previous_value.clone();
            let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
                event.prevent_default();
                let value = target.get_attribute(&attribute);
                let direction = Direction::from_attribute(value.as_deref(), &previous_value);
                controller.borrow_mut().advance(direction);
            }));
            listen_click(&button, &closure)?;
            closure.forget();
        }
        Ok(())
    }

    fn bind_thumbnails(&self) -> Result<(), CarouselError> {
        let thumbnails = self.controller.borrow().view().thumbnails.clone();

        for (index, thumb) in thumbnails.iter().enumerate() {
            let controller = Rc::clone(&self.controller);
            let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event: Event| {
                controller.borrow_mut().on_thumbnail_clicked(index);
            }));
            listen_click(thumb, &closure)?;
            closure.forget();
        }
        Ok(())
    }
}

/// Mount a carousel with the default config from JavaScript.
///
/// Returns the number of slides found.
#[wasm_bindgen(js_name = mountChartCarousel)]
pub fn mount_chart_carousel(selector: &str) -> Result<usize, JsValue> {
    let carousel = ChartCarousel::mount_selector(selector, CarouselConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let slides = carousel.controller.borrow().slide_count();
    Ok(slides)
}

/// Collect matches as `HtmlElement`s in document order.
///
/// Carousel indices are positions in this list, so a match that is not an
/// HTML element (an SVG node, say) is rejected rather than skipped.
fn query_all(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, CarouselError> {
    let list = root.query_selector_all(selector).map_err(|_| CarouselError::Dom {
        context: format!("querySelectorAll('{}') failed", selector),
    })?;

    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let el = node.dyn_into::<HtmlElement>().map_err(|_| {
            tracing::warn!(selector, position = i, "matched a non-HTML element");
            CarouselError::Dom {
                context: format!("'{}' match {} is not an HTML element", selector, i),
            }
        })?;
        elements.push(el);
    }
    Ok(elements)
}

fn query_one(root: &Element, selector: &str) -> Result<Option<Element>, CarouselError> {
    let found = root.query_selector(selector).map_err(|_| CarouselError::Dom {
        context: format!("querySelector('{}') failed", selector),
    })?;
    if found.is_none() {
        tracing::warn!(selector, "carousel label not found");
    }
    Ok(found)
}

fn listen_click(target: &HtmlElement, closure: &Closure<dyn FnMut(Event)>) -> Result<(), CarouselError> {
    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|_| CarouselError::Dom {
            context: "addEventListener('click') failed".into(),
        })
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if el.style().set_property(property, value).is_err() {
        tracing::warn!(property, value, "failed to set style");
    }
}

/// Start a two-keyframe Web Animation on `property`. Fire-and-forget.
///
/// `Element.animate` is looked up dynamically since web-sys only exposes it
/// behind its unstable API flag.
fn animate_property(el: &HtmlElement, property: &str, from: &str, to: &str, duration_ms: u32) {
    let keyframes = js_sys::Array::new();
    for value in [from, to] {
        let frame = js_sys::Object::new();
        if js_sys::Reflect::set(&frame, &JsValue::from_str(property), &JsValue::from_str(value)).is_err() {
            tracing::warn!(property, "failed to build keyframe");
            return;
        }
        keyframes.push(&frame);
    }

    let animate = match js_sys::Reflect::get(el, &JsValue::from_str("animate"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    {
        Some(animate) => animate,
        None => {
            tracing::warn!(property, "Element.animate unavailable; skipping transition");
            return;
        }
    };
    if animate
        .call2(el, &keyframes, &JsValue::from_f64(duration_ms as f64))
        .is_err()
    {
        tracing::warn!(property, "failed to start animation");
    }
}

/// Parse a computed CSS length like `"12.5px"`. Unparseable values are 0.
fn parse_px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").trim().parse().unwrap_or(0.0)
}
