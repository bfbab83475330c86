use gtk4::ScrolledWindow;
use webkit6::prelude::*;
use webkit6::WebView;

/// Creates a WebKit view for backend fragments (loading and result pages)
/// and its scrolled window container.
pub fn create_fragment_view() -> (WebView, ScrolledWindow) {
    let web_view = WebView::new();
    if let Some(settings) = webkit6::prelude::WebViewExt::settings(&web_view) {
        settings.set_zoom_text_only(false);
        settings.set_enable_javascript(false);
    }
    let scroll = ScrolledWindow::builder()
        .child(&web_view)
        .hexpand(true)
        .vexpand(true)
        .build();
    (web_view, scroll)
}
