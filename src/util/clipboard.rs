//! Clipboard access. Requires a browser environment; a no-op elsewhere.

/// Copy `text` to the system clipboard. The write is asynchronous and
/// best-effort; failures are logged, not surfaced.
pub fn copy_text(text: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::spawn_local(async move {
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                    leptos::logging::warn!("clipboard write failed");
                }
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
    }
}
