use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use yew::prelude::*;

/// Adds the `visible` class to the referenced element once it scrolls within
/// the lower 80% of the viewport. The listener is component-local and removed
/// on teardown.
#[hook]
pub fn use_scroll_reveal(section: NodeRef) {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let Some(element) = section.cast::<HtmlElement>() else {
                    return;
                };
                let viewport = window_clone
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let rect = element.get_bounding_client_rect();
                if rect.top() < viewport * 0.8 {
                    let classes = element.class_name();
                    if !classes.contains("visible") {
                        element.set_class_name(&format!("{} visible", classes));
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Initial check for sections already in view
            scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
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
