//! Browser-side utilities shared by the pages.
//!
//! - **User feedback**: blocking `alert`/`confirm` dialogs for validation and
//!   destructive actions, and non-blocking toast notifications for results.
//! - **Clock**: the current instant and the browser's UTC offset, handed to the
//!   pure aggregations in `common`, which never read a clock themselves.
//! - **Downloads**: saving generated text (the CSV export) as a file.
//! - **Formatting**: thousands separators for the summary cards.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

/// Shows a blocking alert. Used for validation failures that abort an action.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Asks for confirmation; a dialog that cannot be shown counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The element is appended to `<body>` with inline styles, so it needs no
/// stylesheet, and removes itself after three seconds. Without a window or
/// document nothing is shown.
///
/// # Arguments
/// * `message` - Plain text of the notification; it is set as text content,
///   never parsed as markup.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(17, 24, 39, 0.9)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "8px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Inter, Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// The browser's current offset from UTC.
///
/// `getTimezoneOffset` counts minutes *behind* UTC, hence `west`.
pub fn local_offset() -> FixedOffset {
    let minutes_behind = js_sys::Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes_behind * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

/// Saves `content` as a downloaded file named `file_name`.
pub fn download_text(file_name: &str, mime: &str, content: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(file_name);
    link.style().set_property("visibility", "hidden")?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)
}

pub fn format_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}
