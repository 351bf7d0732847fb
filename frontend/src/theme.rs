// Browser side of the light/dark switch: `localStorage`, the
// `prefers-color-scheme` media query, the `<html>` attribute and the toggle
// checkbox.

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default)]
pub struct WebThemeHost;

impl ThemeHost for WebThemeHost {
    type Toggle = Element;

    fn stored_scheme(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|error| reported(StorageError::Read(format!("{:?}", error))))
    }

    fn store_scheme(&mut self, key: &str, scheme: Scheme) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, scheme.as_str())
            .map_err(|error| reported(StorageError::Write(format!("{:?}", error))))
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .map_or(false, |query| query.matches())
    }

    fn set_root_attribute(&mut self, name: &str, scheme: Scheme) {
        let root = gloo_utils::document_element();
        if let Err(error) = root.set_attribute(name, scheme.as_str()) {
            console::warn!(format!("theme: failed to set {}: {:?}", name, error));
        }
    }

    fn find_toggle(&self, id: &str) -> Option<Element> {
        dom::element_by_id(id)
    }

    fn set_toggle_checked(&mut self, toggle: &Element, checked: bool) {
        if let Some(input) = toggle.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| reported(StorageError::Unavailable))
}

fn reported(error: StorageError) -> StorageError {
    console::warn!(format!("theme: {}", error));
    error
}

/// The page's theme switcher. Keep it alive for as long as the toggle should
/// work: freeing it unbinds the change listener.
#[wasm_bindgen]
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct ThemeSwitcherHandle {
    switcher: Rc<RefCell<ThemeSwitcher<WebThemeHost>>>,
    #[derivative(Debug = "ignore")]
    _change_listener: EventListener,
}

#[wasm_bindgen]
impl ThemeSwitcherHandle {
    #[wasm_bindgen(getter)]
    pub fn scheme(&self) -> String {
        self.switcher.borrow().scheme().to_string()
    }

    /// Accepts `"light"` or `"dark"`.
    #[wasm_bindgen(js_name = setScheme)]
    pub fn set_scheme(&self, scheme: &str) -> Result<(), JsValue> {
        let scheme = scheme.parse::<Scheme>().map_err(FrontendError::from)?;
        self.switcher.borrow_mut().set_scheme(scheme);
        Ok(())
    }
}

/// Call once per page load.
#[wasm_bindgen(js_name = initThemeSwitcher)]
pub fn init_theme_switcher() -> Result<ThemeSwitcherHandle, JsValue> {
    Ok(start_theme_switcher(ThemeConfig::default())?)
}

/// Same as `initThemeSwitcher`, with a JSON object overriding
/// `root_attribute`, `storage_key`, `toggle_id` or `sync_toggle`.
#[wasm_bindgen(js_name = initThemeSwitcherWithConfig)]
pub fn init_theme_switcher_with_config(json: &str) -> Result<ThemeSwitcherHandle, JsValue> {
    let config = ThemeConfig::from_json(json).map_err(FrontendError::from)?;
    Ok(start_theme_switcher(config)?)
}

pub fn start_theme_switcher(config: ThemeConfig) -> FrontendResult<ThemeSwitcherHandle> {
    let (switcher, toggle) = ThemeSwitcher::init(config, WebThemeHost)?;
    console::log!(format!("theme: starting with {}", switcher.scheme()));

    let switcher = Rc::new(RefCell::new(switcher));

    let change_listener = {
        let switcher = switcher.clone();
        EventListener::new(&toggle, "change", move |event| {
            let checked = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .map_or(false, |input| input.checked());

            let mut switcher = switcher.borrow_mut();
            switcher.on_toggle(checked);
            console::log!(format!("theme: switched to {}", switcher.scheme()));
        })
    };

    Ok(ThemeSwitcherHandle {
        switcher,
        _change_listener: change_listener,
    })
}

use crate::dom;
use crate::error::{FrontendError, FrontendResult};
use gloo_console as console;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use ui_core::{Scheme, StorageError, ThemeConfig, ThemeHost, ThemeSwitcher};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, Storage};
