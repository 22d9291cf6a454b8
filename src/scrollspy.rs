//! Scroll-spy for the fixed dot navigation.
//!
//! [`ScrollSpy`] decides which slide the viewport midpoint currently sits in;
//! [`use_active_section`] wires it to the window scroll events and the live
//! section layout. The scan deliberately does not early-exit, so when the
//! midpoint lands exactly on a slide boundary the later slide wins. That
//! tie-break is part of the navigation contract and pinned by tests below.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use crate::data;

/// Live vertical extent of one section, measured from layout.
pub struct SectionSpan {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// Tracks the id of the section containing the viewport midpoint.
pub struct ScrollSpy {
    active: &'static str,
}

impl ScrollSpy {
    pub fn new(default: &'static str) -> Self {
        Self { active: default }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Recomputes the active section for the given midpoint.
    ///
    /// Sections are scanned in their defined order without early exit, so the
    /// last span containing the midpoint wins. When no span contains it (gap
    /// above the first or below the last section, or nothing laid out yet) the
    /// previous value is retained. Returns the new id only when it changed.
    pub fn dispatch(&mut self, spans: &[SectionSpan], midpoint: f64) -> Option<&'static str> {
        let mut hit = None;
        for span in spans {
            if span.top <= midpoint && midpoint < span.top + span.height {
                hit = Some(span.id);
            }
        }
        let next = hit.unwrap_or(self.active);
        if next != self.active {
            self.active = next;
            Some(next)
        } else {
            None
        }
    }
}

fn measure_spans(document: &Document) -> Vec<SectionSpan> {
    // Sections missing from the DOM are skipped rather than treated as errors.
    data::SECTIONS
        .iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.id)?;
            let element = element.dyn_into::<HtmlElement>().ok()?;
            Some(SectionSpan {
                id: section.id,
                top: element.offset_top() as f64,
                height: element.offset_height() as f64,
            })
        })
        .collect()
}

/// Subscribes to window scroll events and yields the active section id.
///
/// One listener is registered at mount and removed at unmount. The handler is
/// also invoked once right after registration (a reloaded page can start at a
/// non-zero offset) and once more shortly after, when layout has settled.
#[hook]
pub fn use_active_section() -> &'static str {
    let active = use_state(|| data::SECTIONS[0].id);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let mut spy = ScrollSpy::new(data::SECTIONS[0].id);

                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let document = match window.document() {
                            Some(document) => document,
                            None => return,
                        };
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        let viewport = window
                            .inner_height()
                            .ok()
                            .and_then(|height| height.as_f64())
                            .unwrap_or(0.0);
                        let midpoint = scroll_y + viewport / 2.0;
                        let spans = measure_spans(&document);
                        if let Some(next) = spy.dispatch(&spans, midpoint) {
                            active.set(next);
                        }
                    }) as Box<dyn FnMut()>)
                };

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                let handler = scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .clone();
                let _ = handler.call0(&JsValue::NULL);
                let settle = Timeout::new(200, move || {
                    let _ = handler.call0(&JsValue::NULL);
                });

                move || {
                    drop(settle);
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    *active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &'static str, top: f64, height: f64) -> SectionSpan {
        SectionSpan { id, top, height }
    }

    fn deck() -> Vec<SectionSpan> {
        vec![
            span("hero", 0.0, 1000.0),
            span("purpose", 1000.0, 1000.0),
            span("problem", 2000.0, 1000.0),
        ]
    }

    #[test]
    fn midpoint_selects_containing_section() {
        let mut spy = ScrollSpy::new("hero");
        // Viewport height 800: scroll offset 700 puts the midpoint at 1100.
        assert_eq!(spy.dispatch(&deck(), 700.0 + 400.0), Some("purpose"));
        assert_eq!(spy.active(), "purpose");
        // Offset 0 puts the midpoint at 400, back inside the hero.
        assert_eq!(spy.dispatch(&deck(), 400.0), Some("hero"));
    }

    #[test]
    fn boundary_midpoint_prefers_later_section() {
        let spans = vec![span("a", 0.0, 800.0), span("b", 800.0, 800.0)];
        let mut spy = ScrollSpy::new("a");
        // 800 is the exclusive end of a and the inclusive start of b; the scan
        // does not early-exit, so b wins.
        assert_eq!(spy.dispatch(&spans, 800.0), Some("b"));
    }

    #[test]
    fn no_match_retains_previous_value() {
        let mut spy = ScrollSpy::new("hero");
        assert_eq!(spy.dispatch(&deck(), 1500.0), Some("purpose"));
        // Below the last section: nothing contains the midpoint.
        assert_eq!(spy.dispatch(&deck(), 5000.0), None);
        assert_eq!(spy.active(), "purpose");
        // Above the first section too.
        assert_eq!(spy.dispatch(&deck(), -10.0), None);
        assert_eq!(spy.active(), "purpose");
    }

    #[test]
    fn repeated_dispatch_is_idempotent() {
        let mut spy = ScrollSpy::new("hero");
        assert_eq!(spy.dispatch(&deck(), 1500.0), Some("purpose"));
        assert_eq!(spy.dispatch(&deck(), 1500.0), None);
        assert_eq!(spy.active(), "purpose");
    }

    #[test]
    fn zero_height_sections_never_match() {
        let spans = vec![span("a", 0.0, 0.0), span("b", 0.0, 0.0)];
        let mut spy = ScrollSpy::new("a");
        assert_eq!(spy.dispatch(&spans, 0.0), None);
        assert_eq!(spy.active(), "a");
    }

    #[test]
    fn active_is_always_a_known_section() {
        let mut spy = ScrollSpy::new(data::SECTIONS[0].id);
        let spans: Vec<SectionSpan> = data::SECTIONS
            .iter()
            .enumerate()
            .map(|(i, s)| span(s.id, i as f64 * 900.0, 900.0))
            .collect();
        for offset in [0.0, 450.0, 900.0, 4500.0, 11700.0, 20000.0, -300.0] {
            let _ = spy.dispatch(&spans, offset);
            assert!(data::SECTIONS.iter().any(|s| s.id == spy.active()));
        }
    }
}
