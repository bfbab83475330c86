use adw::{HeaderBar, WindowTitle};
use gtk4::Button;

use crate::constants::APP_NAME;

/// Creates the application header bar with navigation, report export and
/// settings controls.
pub fn create_header_bar() -> (HeaderBar, WindowTitle, Button, Button, Button) {
    let header_bar = HeaderBar::new();
    let view_title = WindowTitle::new(APP_NAME, "");
    header_bar.set_title_widget(Some(&view_title));

    let back_btn = Button::builder()
        .icon_name("go-previous-symbolic")
        .tooltip_text("New Request")
        .build();

    let save_btn = Button::builder()
        .icon_name("document-save-symbolic")
        .tooltip_text("Save Report")
        .sensitive(false)
        .build();

    let settings_btn = Button::builder()
        .icon_name("emblem-system-symbolic")
        .tooltip_text("Settings")
        .build();

    header_bar.pack_start(&back_btn);
    header_bar.pack_end(&settings_btn);
    header_bar.pack_end(&save_btn);

    (header_bar, view_title, back_btn, save_btn, settings_btn)
}
