//! Quill bindings behind the core's `RichTextEditor` trait.
//!
//! The page loads Quill as a global script. A `QuillEditor` is a handle that
//! is created before its container exists and attached once the container is
//! mounted; until then it reads as empty and ignores writes.

#[cfg(test)]
#[path = "quill_test.rs"]
mod quill_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use labnote::rich_text::RichTextEditor;

/// Toolbar: headers, basic marks, sub/superscript, lists, links, clean.
pub const QUILL_OPTIONS: &str = r#"{
    "theme": "snow",
    "modules": {
        "toolbar": [
            [{ "header": [1, 2, 3, false] }],
            ["bold", "italic", "underline"],
            [{ "script": "sub" }, { "script": "super" }],
            [{ "list": "ordered" }, { "list": "bullet" }],
            ["link"],
            ["clean"]
        ]
    }
}"#;

#[wasm_bindgen]
extern "C" {
    type Quill;

    #[wasm_bindgen(constructor, catch)]
    fn new(container: &web_sys::Element, options: &JsValue) -> Result<Quill, JsValue>;

    #[wasm_bindgen(method, js_name = getText)]
    fn get_text(this: &Quill) -> String;

    #[wasm_bindgen(method, getter)]
    fn root(this: &Quill) -> web_sys::HtmlElement;

    #[wasm_bindgen(method, js_name = setContents)]
    fn set_contents(this: &Quill, delta: &JsValue);

    #[wasm_bindgen(method, getter)]
    fn clipboard(this: &Quill) -> QuillClipboard;

    type QuillClipboard;

    #[wasm_bindgen(method, js_name = dangerouslyPasteHTML)]
    fn dangerously_paste_html(this: &QuillClipboard, html: &str);
}

#[derive(Clone, Default)]
pub struct QuillEditor {
    inner: Rc<RefCell<Option<Quill>>>,
}

impl QuillEditor {
    /// Mount a Quill instance in `container`. A handle attaches at most once.
    pub fn attach(&self, container: &web_sys::Element) {
        if self.inner.borrow().is_some() {
            return;
        }
        let options = match js_sys::JSON::parse(QUILL_OPTIONS) {
            Ok(options) => options,
            Err(e) => {
                log::error!("quill options rejected: {e:?}");
                return;
            }
        };
        match Quill::new(container, &options) {
            Ok(quill) => *self.inner.borrow_mut() = Some(quill),
            Err(e) => log::error!("quill failed to mount: {e:?}"),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&Quill) -> R) -> Option<R> {
        self.inner.borrow().as_ref().map(f)
    }
}

impl RichTextEditor for QuillEditor {
    fn text(&self) -> String {
        self.with(Quill::get_text).unwrap_or_default()
    }

    fn html(&self) -> String {
        self.with(|q| q.root().inner_html()).unwrap_or_default()
    }

    fn clear(&self) {
        if let Some(quill) = self.inner.borrow().as_ref() {
            quill.set_contents(&js_sys::Array::new());
        }
    }

    fn paste_html(&self, html: &str) {
        if let Some(quill) = self.inner.borrow().as_ref() {
            quill.clipboard().dangerously_paste_html(html);
        }
    }
}
