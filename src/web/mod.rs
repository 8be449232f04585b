//! Browser side: vendor SDK bindings, the DOM host and the viewer slot.

mod host;
mod kakao;
mod naver;

use std::cell::RefCell;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::render::WaypointLabel;
use crate::viewer::Viewer;

pub use host::DomHost;

thread_local! {
    static VIEWER: RefCell<Option<Viewer<DomHost>>> = const { RefCell::new(None) };
}

/// Install `viewer` as the page's single viewer. A previous viewer is shut
/// down and its outstanding tickets become stale for the new one.
pub fn install(mut viewer: Viewer<DomHost>) {
    VIEWER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(previous) = slot.take() {
            viewer.continue_after(previous.shutdown());
        }
        *slot = Some(viewer);
    });
}

/// Run `f` against the installed viewer. `None` if none is installed.
pub fn with_viewer<R>(f: impl FnOnce(&mut Viewer<DomHost>) -> R) -> Option<R> {
    VIEWER.with(|slot| slot.borrow_mut().as_mut().map(f))
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Look up a dotted path on the global object, e.g. `naver.maps`.
fn global_value(path: &[&str]) -> Option<JsValue> {
    let mut current: JsValue = js_sys::global().into();
    for key in path {
        let next = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if next.is_undefined() || next.is_null() {
            return None;
        }
        current = next;
    }
    Some(current)
}

/// Plain JS object literal builder for SDK option bags.
struct JsOptions(Object);

impl JsOptions {
    fn new() -> Self {
        Self(Object::new())
    }

    fn set(self, key: &str, value: impl Into<JsValue>) -> Self {
        // Writes to a fresh ordinary object cannot fail.
        let _ = Reflect::set(&self.0, &JsValue::from_str(key), &value.into());
        self
    }

    fn build(self) -> Object {
        self.0
    }
}

/// `<div class="wpt-overlay"><span class="wpt-num">N</span><span class="wpt-name">…</span></div>`,
/// filled through `textContent` so names are never interpreted as HTML.
fn label_element(label: &WaypointLabel) -> Result<HtmlElement, JsValue> {
    let document = document()?;
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name("wpt-overlay");
    el.style().set_property("transform", "translate(-50%, -100%)")?;

    let num = document.create_element("span")?;
    num.set_class_name("wpt-num");
    num.set_text_content(Some(&label.number.to_string()));
    el.append_child(&num)?;

    let name = document.create_element("span")?;
    name.set_class_name("wpt-name");
    name.set_text_content(Some(&label.text));
    el.append_child(&name)?;

    Ok(el)
}
