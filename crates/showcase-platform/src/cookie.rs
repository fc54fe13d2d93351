//! Cookie jar adapters: `document.cookie` in the browser, a map for
//! environments without a DOM.

use std::cell::RefCell;
use std::collections::BTreeMap;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use showcase_core::ports::CookiePort;
use showcase_types::{Result, SiteError};

pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SiteError::JsInterop("No document object".to_string()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| SiteError::JsInterop("Document is not an HTML document".to_string()))?;
        Ok(Self { document })
    }
}

impl CookiePort for DocumentCookies {
    fn cookie_header(&self) -> Result<String> {
        self.document
            .cookie()
            .map_err(|e| SiteError::JsInterop(format!("{:?}", e)))
    }

    fn write(&self, assignment: &str) -> Result<()> {
        self.document
            .set_cookie(assignment)
            .map_err(|e| SiteError::JsInterop(format!("{:?}", e)))
    }
}

/// Cookie jar held in memory. Honors `Max-Age=0` as deletion and ignores
/// every other attribute.
#[derive(Default)]
pub struct MemoryCookieJar {
    cookies: RefCell<BTreeMap<String, String>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookiePort for MemoryCookieJar {
    fn cookie_header(&self) -> Result<String> {
        let header = self
            .cookies
            .borrow()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        Ok(header)
    }

    fn write(&self, assignment: &str) -> Result<()> {
        let mut parts = assignment.split(';').map(str::trim);
        let (name, value) = parts
            .next()
            .and_then(|pair| pair.split_once('='))
            .ok_or_else(|| SiteError::Other(format!("Malformed cookie: {}", assignment)))?;

        let expired = parts.any(|attr| attr.eq_ignore_ascii_case("max-age=0"));
        let mut cookies = self.cookies.borrow_mut();
        if expired {
            cookies.remove(name);
        } else {
            cookies.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }
}
