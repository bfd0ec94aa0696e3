use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::Callback;

/// Pixels of vertical scroll before the fixed header gets its background.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Share of a section that must be inside the viewport before it counts
/// as the active one.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Every observable section, in render order. Each id must match a mounted
/// `<section id=..>` element.
pub const SECTION_IDS: [&str; 9] = [
    "hero",
    "about",
    "testimonials",
    "experience",
    "projects",
    "skills",
    "education",
    "internships",
    "contact",
];

/// Sections listed in the primary header nav (hero is reachable via the logo).
pub const NAV_SECTIONS: [&str; 6] = [
    "about",
    "testimonials",
    "experience",
    "projects",
    "education",
    "contact",
];

/// Sections listed in the footer nav.
pub const FOOTER_SECTIONS: [&str; 5] = ["about", "experience", "projects", "education", "contact"];

pub fn header_visible(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Smooth-scrolls the viewport to the section with the given id. This kicks
/// off a browser animation and returns immediately; there is nothing to await
/// or cancel.
pub fn scroll_to_section(id: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(target) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Owns an `IntersectionObserver` over the page sections. Whenever a section
/// crosses the visibility threshold it gets the `visible` class, the id is
/// mirrored onto `<body data-active-section>` for styling hooks, and
/// `on_active` fires with the id. When several sections cross in one batch
/// the last reported entry wins.
///
/// Dropping the handle unobserves exactly the elements it registered, so no
/// callback can fire into a torn-down component.
pub struct SectionObserver {
    observer: IntersectionObserver,
    observed: Vec<Element>,
    // Keeps the JS-side callback alive for as long as the observer is.
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl SectionObserver {
    pub fn observe(document: &Document, section_ids: &[&str], on_active: Callback<String>) -> Self {
        let body = document.body();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    let id = target.id();
                    if let Some(body) = &body {
                        let _ = body.set_attribute("data-active-section", &id);
                    }
                    on_active.emit(id);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(SECTION_VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .unwrap();

        let mut observed = Vec::new();
        for id in section_ids {
            if let Some(element) = document.get_element_by_id(id) {
                observer.observe(&element);
                observed.push(element);
            }
        }

        Self {
            observer,
            observed,
            _callback: callback,
        }
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        for element in &self.observed {
            self.observer.unobserve(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_hidden_near_top() {
        assert!(!header_visible(0.0));
        assert!(!header_visible(50.0));
    }

    #[test]
    fn header_shown_past_threshold() {
        assert!(header_visible(150.0));
        assert!(header_visible(100.1));
    }

    #[test]
    fn threshold_itself_does_not_show_header() {
        assert!(!header_visible(HEADER_SCROLL_THRESHOLD));
    }

    #[test]
    fn scrolling_back_hides_header_again() {
        assert!(header_visible(150.0));
        assert!(!header_visible(50.0));
    }

    #[test]
    fn nav_sections_are_all_observable() {
        for id in NAV_SECTIONS {
            assert!(SECTION_IDS.contains(&id), "nav links to unmounted section {id}");
        }
        for id in FOOTER_SECTIONS {
            assert!(SECTION_IDS.contains(&id), "footer links to unmounted section {id}");
        }
    }
}
