use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

/// Runs `f` once after `delay_ms` on the UI thread. Returns the timer id.
pub(crate) fn schedule(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let win = web_sys::window()?;
    let cb = wasm_bindgen::closure::Closure::once_into_js(f);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)
        .ok()
}

/// Like `schedule`, but runs `f` right away when no timer could be set, so
/// callers waiting on it never stay stuck.
pub(crate) fn schedule_or_run(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    defer_with(f, |cb| schedule(delay_ms, cb))
}

/// Hands `f` to `arm`; if `arm` reports no timer id, `f` runs inline.
/// `f` runs at most once either way.
fn defer_with<F: FnOnce() + 'static>(
    f: F,
    arm: impl FnOnce(Box<dyn FnOnce()>) -> Option<i32>,
) -> Option<i32> {
    let slot = Rc::new(RefCell::new(Some(f)));
    let deferred = Rc::clone(&slot);
    let id = arm(Box::new(move || {
        let f = deferred.borrow_mut().take();
        if let Some(f) = f {
            f();
        }
    }));
    if id.is_none() {
        let f = slot.borrow_mut().take();
        if let Some(f) = f {
            f();
        }
    }
    id
}

pub(crate) fn cancel_schedule(timer_id: i32) {
    if let Some(win) = web_sys::window() {
        win.clear_timeout_with_handle(timer_id);
    }
}

pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

pub(crate) fn now_secs() -> i64 {
    now_ms() / 1000
}

pub(crate) fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Renders a backend timestamp in the browser's locale; unparseable input is shown as-is.
pub(crate) fn format_timestamp(iso: &str) -> String {
    if iso.trim().is_empty() {
        return "never".to_string();
    }
    let d = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if d.get_time().is_nan() {
        return iso.to_string();
    }
    d.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Uniform index in `[0, len)`. Returns 0 for an empty range.
pub(crate) fn random_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let mut buf = [0u8; 4];
    if getrandom::getrandom(&mut buf).is_err() {
        return 0;
    }
    (u32::from_le_bytes(buf) as usize) % len
}

pub(crate) fn initials(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let out: String = local
        .split(|c: char| c == '.' || c == '_' || c == '-')
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect();

    if out.is_empty() {
        "?".to_string()
    } else {
        out
    }
}

pub(crate) fn is_http_url(s: &str) -> bool {
    let s = s.trim();
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defer_runs_inline_when_no_timer() {
        let ran = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&ran);
        let id = defer_with(move || *counter.borrow_mut() += 1, |_cb| None);
        assert_eq!(id, None);
        assert_eq!(*ran.borrow(), 1);
    }

    #[test]
    fn test_defer_waits_for_timer_and_runs_once() {
        let ran = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&ran);
        let armed: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(None));
        let holder = Rc::clone(&armed);
        let id = defer_with(move || *counter.borrow_mut() += 1, move |cb| {
            *holder.borrow_mut() = Some(cb);
            Some(7)
        });
        assert_eq!(id, Some(7));
        assert_eq!(*ran.borrow(), 0);

        let cb = armed.borrow_mut().take();
        if let Some(cb) = cb {
            cb();
        }
        assert_eq!(*ran.borrow(), 1);
    }

    #[test]
    fn test_random_index_in_range() {
        for _ in 0..200 {
            assert!(random_index(5) < 5);
        }
        assert_eq!(random_index(1), 0);
        assert_eq!(random_index(0), 0);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("alex.johnson@example.com"), "AJ");
        assert_eq!(initials("a@b.com"), "A");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://example.com/paper.pdf"));
        assert!(is_http_url("  http://localhost:8080 "));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("https://exa mple.com"));
        assert!(!is_http_url(""));
    }
}
