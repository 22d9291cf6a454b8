//! One-way reveal latch for slide entrance animations.
//!
//! Each slide owns a [`RevealLatch`] fed by an `IntersectionObserver`. The
//! latch flips to seen the first time the slide's intersection ratio reaches
//! the threshold and never flips back, so scrolling away and returning does
//! not replay the entrance. Environments without `IntersectionObserver` fail
//! open: the slide is shown immediately instead of staying invisible.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of a slide that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Monotonic visibility flag: once seen, always seen.
pub struct RevealLatch {
    threshold: f64,
    seen: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            seen: false,
        }
    }

    pub fn seen(&self) -> bool {
        self.seen
    }

    /// Feeds one observed intersection ratio to the latch.
    ///
    /// Ratios below the threshold are no-ops, including after the latch has
    /// flipped. Returns true only on the single report that flips it.
    pub fn report(&mut self, ratio: f64) -> bool {
        if !self.seen && ratio >= self.threshold {
            self.seen = true;
            return true;
        }
        false
    }
}

/// Watches `node` and returns whether it has ever been on screen.
///
/// Registers one `IntersectionObserver` at mount and disconnects it at
/// unmount. The returned flag starts false and flips to true at most once.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let supported =
                    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                        .unwrap_or(false);

                let mut subscription = None;
                if let (true, Some(element)) = (supported, node.cast::<Element>()) {
                    let mut latch = RevealLatch::new(threshold);
                    let on_intersect = {
                        let revealed = revealed.clone();
                        Closure::wrap(Box::new(
                            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                                        Ok(entry) => entry,
                                        Err(_) => continue,
                                    };
                                    if latch.report(entry.intersection_ratio()) {
                                        revealed.set(true);
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            subscription = Some((observer, on_intersect));
                        }
                        Err(_) => revealed.set(true),
                    }
                } else {
                    // No intersection reporting here: show the slide rather
                    // than leave it permanently hidden.
                    revealed.set(true);
                }

                move || {
                    if let Some((observer, on_intersect)) = subscription {
                        observer.disconnect();
                        drop(on_intersect);
                    }
                }
            },
            (),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        let latch = RevealLatch::new(DEFAULT_THRESHOLD);
        assert!(!latch.seen());
    }

    #[test]
    fn ratio_below_threshold_never_reveals() {
        let mut latch = RevealLatch::new(0.1);
        for ratio in [0.0, 0.01, 0.05, 0.0999] {
            assert!(!latch.report(ratio));
        }
        assert!(!latch.seen());
    }

    #[test]
    fn single_report_at_threshold_suffices() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.report(0.1));
        assert!(latch.seen());
    }

    #[test]
    fn seen_is_monotonic() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.report(0.5));
        assert!(latch.seen());
        // Leaving the viewport again (any sequence of low ratios) must not
        // reset the flag, and must not count as a second flip.
        for ratio in [0.0, 0.02, 0.0, 1.0, 0.0] {
            assert!(!latch.report(ratio));
            assert!(latch.seen());
        }
    }
}
