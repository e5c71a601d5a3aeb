use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use web_sys::IntersectionObserverEntry;

/// Subscribes a section element to viewport-crossing notifications.
///
/// `on_enter` fires whenever the element's visible proportion crosses
/// `threshold` while intersecting; notifications arrive asynchronously on the
/// UI thread in platform delivery order. Observation begins once the element
/// is mounted and is deregistered automatically when the owning component is
/// torn down; the returned handle unsubscribes earlier if called.
pub fn observe_visibility<F>(
    el: NodeRef<html::Section>,
    threshold: f64,
    on_enter: F,
) -> impl Fn() + Clone
where
    F: Fn() + 'static,
{
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        el,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            for entry in &entries {
                if entry.is_intersecting() {
                    on_enter();
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );
    stop
}
