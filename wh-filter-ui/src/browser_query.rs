//! URL query parameters of the current page, through `web_sys`.
//!
//! Each mutation pushes a new history entry so the filtered view can be
//! bookmarked and navigated back from. Back/Forward is reported through
//! [`HistoryListener`]. Browser API failures are logged and turn the
//! operation into a no-op.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{PopStateEvent, UrlSearchParams, Window};
use wh_filter::QueryParamStore;

/// Stateless handle to `window.location.search`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserQueryParams;

impl BrowserQueryParams {
    fn current() -> Option<UrlSearchParams> {
        let window = web_sys::window()?;
        let search = match window.location().search() {
            Ok(search) => search,
            Err(e) => {
                log::warn!("could not read location.search: {e:?}");
                return None;
            }
        };
        match UrlSearchParams::new_with_str(&search) {
            Ok(params) => Some(params),
            Err(e) => {
                log::warn!("could not parse query string {search:?}: {e:?}");
                None
            }
        }
    }

    /// Push `params` as the new query string, keeping path and hash.
    fn push(params: &UrlSearchParams) {
        if let Err(e) = Self::try_push(params) {
            log::warn!("could not update URL query string: {e:?}");
        }
    }

    fn try_push(params: &UrlSearchParams) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let location = window.location();
        let query: String = params.to_string().into();
        let url = build_url(&location.pathname()?, &query, &location.hash()?);
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
    }

    fn mutate(f: impl FnOnce(&UrlSearchParams)) {
        if let Some(params) = Self::current() {
            f(&params);
            Self::push(&params);
        }
    }
}

impl QueryParamStore for BrowserQueryParams {
    fn get(&self, key: &str) -> Option<String> {
        Self::current()?.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        log::debug!("pushing {key}={value} to the URL");
        Self::mutate(|params| params.set(key, value));
    }

    fn delete(&mut self, key: &str) {
        log::debug!("removing {key} from the URL");
        Self::mutate(|params| params.delete(key));
    }
}

/// `popstate` subscription; removed from the window when dropped.
pub struct HistoryListener {
    window: Window,
    callback: Closure<dyn FnMut(PopStateEvent)>,
}

impl HistoryListener {
    /// Call `on_navigate` after every Back/Forward navigation.
    pub fn new(mut on_navigate: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback: Closure<dyn FnMut(PopStateEvent)> =
            Closure::new(move |_: PopStateEvent| on_navigate());
        if let Err(e) = window
            .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())
        {
            log::warn!("could not listen for popstate: {e:?}");
            return None;
        }
        Some(Self { window, callback })
    }
}

impl Drop for HistoryListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "popstate",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Join path, query and hash; an empty query drops the `?`.
fn build_url(path: &str, query: &str, hash: &str) -> String {
    if query.is_empty() {
        format!("{path}{hash}")
    } else {
        format!("{path}?{query}{hash}")
    }
}
