use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Delay before a chart is redrawn after the window stops resizing.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Window resize listener that runs `callback` only once resizing has been
/// quiet for `delay_ms`.
///
/// Returns `None` outside a browser window. The listener is removed when the
/// returned value is dropped, so keep it alive for the component's lifetime.
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = window()?;
    let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping the pending timeout cancels it
        timeout_handle.borrow_mut().take();

        let cb = callback.clone();
        *timeout_handle.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
