//! Single shared `<audio>` element for spoken replies.
//!
//! Each clip becomes a Blob object URL. Starting a new clip or stopping
//! revokes the previous URL.

use std::cell::RefCell;

use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAudioElement, Url};

use showcase_core::ports::{AudioClip, AudioPort};
use showcase_types::{Result, SiteError};

pub struct HtmlAudioPlayer {
    element: HtmlAudioElement,
    object_url: RefCell<Option<String>>,
}

impl HtmlAudioPlayer {
    pub fn new() -> Result<Self> {
        let element =
            HtmlAudioElement::new().map_err(|e| SiteError::Audio(format!("{:?}", e)))?;
        Ok(Self {
            element,
            object_url: RefCell::new(None),
        })
    }

    fn release_url(&self) {
        if let Some(url) = self.object_url.borrow_mut().take() {
            let _ = Url::revoke_object_url(&url);
        }
    }
}

impl AudioPort for HtmlAudioPlayer {
    fn play(&self, clip: AudioClip) -> Result<()> {
        self.stop();

        let bytes = js_sys::Uint8Array::from(clip.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&clip.mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| SiteError::Audio(format!("{:?}", e)))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| SiteError::Audio(format!("{:?}", e)))?;

        self.element.set_src(&url);
        *self.object_url.borrow_mut() = Some(url);

        let promise = self
            .element
            .play()
            .map_err(|e| SiteError::Audio(format!("{:?}", e)))?;

        // Autoplay policies reject the promise asynchronously.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Audio playback rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn stop(&self) {
        if self.object_url.borrow().is_none() {
            return;
        }
        let _ = self.element.pause();
        self.element.set_current_time(0.0);
        self.element.remove_attribute("src").ok();
        self.release_url();
    }

    fn is_playing(&self) -> bool {
        self.object_url.borrow().is_some() && !self.element.paused() && !self.element.ended()
    }
}

impl Drop for HtmlAudioPlayer {
    fn drop(&mut self) {
        self.release_url();
    }
}
