use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Listens for window resizes and runs `callback` once resizing has been quiet for `delay_ms`.
///
/// Returns `None` outside a browser window. Dropping the listener detaches it and
/// cancels any pending call.
pub fn debounced_resize_listener<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    window().map(|window| {
        EventListener::new(&window, "resize", move |_| {
            let callback = callback.clone();
            // Replacing the handle drops (and so cancels) the previous timeout
            *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || callback()));
        })
    })
}
