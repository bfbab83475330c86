use crate::state::AppState;
use adw::prelude::*;
use adw::{ActionRow, PreferencesGroup, PreferencesPage, PreferencesWindow};
use gtk4::{glib, Entry};
use std::cell::RefCell;
use std::rc::Rc;

pub fn show_settings(
    parent: &gtk4::Window,
    state: Rc<RefCell<AppState>>,
    on_settings_closed: Option<Rc<dyn Fn()>>,
) {
    let window = PreferencesWindow::builder()
        .transient_for(parent)
        .modal(true)
        .title("Settings")
        .default_width(500)
        .build();

    let page = PreferencesPage::new();
    page.set_title("General");
    page.set_icon_name(Some("preferences-system-symbolic"));
    window.add(&page);

    let group = PreferencesGroup::new();
    group.set_title("Backend");
    group.set_description(Some("The grant writer service this client talks to"));
    page.add(&group);

    let url_row = ActionRow::builder()
        .title("Backend URL")
        .subtitle("Base URL of the grant writer backend")
        .build();
    let url_entry = Entry::builder()
        .valign(gtk4::Align::Center)
        .hexpand(true)
        .text(state.borrow().config.backend_url.as_str())
        .build();
    url_row.add_suffix(&url_entry);
    group.add(&url_row);

    window.connect_close_request(glib::clone!(
        #[strong]
        state,
        #[strong]
        url_entry,
        move |_| {
            let mut s = state.borrow_mut();
            s.config.backend_url = url_entry.text().to_string();
            let _ = s.config.save();
            s.rebuild_client();
            drop(s);

            if let Some(on_closed) = &on_settings_closed {
                on_closed();
            }

            glib::Propagation::Proceed
        }
    ));

    window.present();
}
