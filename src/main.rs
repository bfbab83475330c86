mod api;
mod config;
mod constants;
mod fragment;
mod render;
mod report;
mod state;
mod ui;
mod utils;

use adw::prelude::*;
use adw::{Application, ApplicationWindow, ToastOverlay};
use gtk4::{glib, Orientation, Stack, StackTransitionType};
use std::cell::RefCell;
use std::rc::Rc;
use webkit6::prelude::*;

use crate::api::GrantInput;
use crate::config::AppConfig;
use crate::constants::{
    APP_ID, APP_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WEBKIT_SANDBOX_DISABLE_VAR,
};
use crate::state::{AppState, UiPhase};

#[tokio::main]
async fn main() -> glib::ExitCode {
    // Disable WebKit sandbox to prevent "bwrap: setting up uid map: Permission denied"
    // and "dbus-proxy" failures in some Linux environments (WSL, containers, etc.)
    std::env::set_var(WEBKIT_SANDBOX_DISABLE_VAR, "1");

    tracing_subscriber::fmt::init();

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(build_ui);

    app.run()
}

fn build_ui(app: &Application) {
    let window = ApplicationWindow::builder()
        .application(app)
        .default_width(DEFAULT_WINDOW_WIDTH)
        .default_height(DEFAULT_WINDOW_HEIGHT)
        .title(APP_NAME)
        .build();

    let toast_overlay = ToastOverlay::new();
    window.set_content(Some(&toast_overlay));

    let content_box = gtk4::Box::new(Orientation::Vertical, 0);
    toast_overlay.set_child(Some(&content_box));

    let (header_bar, view_title, back_btn, save_btn, settings_btn) =
        ui::header::create_header_bar();
    content_box.append(&header_bar);

    let (input_card, org_entry, mission_entry, generate_btn, spinner) =
        ui::form::create_input_card();
    let (loading_view, loading_scroll) = ui::result::create_fragment_view();
    let (result_view, result_scroll) = ui::result::create_fragment_view();

    // The three regions are stack pages, so exactly one is ever visible.
    let stack = Stack::new();
    stack.set_hexpand(true);
    stack.set_vexpand(true);
    stack.set_transition_type(StackTransitionType::Crossfade);
    stack.add_named(&input_card, Some("input"));
    stack.add_named(&loading_scroll, Some("loading"));
    stack.add_named(&result_scroll, Some("result"));
    content_box.append(&stack);

    let state = Rc::new(RefCell::new(AppState::new(AppConfig::load())));

    // Backend status shown in the window subtitle, refreshed at startup and
    // whenever the settings change.
    let refresh_status = {
        let state = state.clone();
        let view_title = view_title.downgrade();
        Rc::new(move || {
            let client = state.borrow().client.clone();
            let view_title = view_title.clone();
            glib::MainContext::default().spawn_local(async move {
                let subtitle = match &client {
                    Some(client) => match client.check_availability().await {
                        Ok(()) => format!("Backend: {}", client.base_url()),
                        Err(e) => {
                            tracing::warn!("Backend availability check failed: {}", e);
                            "Backend unreachable".to_string()
                        }
                    },
                    None => "Backend not configured".to_string(),
                };
                if let Some(view_title) = view_title.upgrade() {
                    view_title.set_subtitle(&subtitle);
                }
            });
        }) as Rc<dyn Fn()>
    };
    refresh_status();

    // Generate is available only while idle and with both fields filled,
    // mirroring the required-field form semantics.
    let update_generate = {
        let state = state.clone();
        let org_entry = org_entry.downgrade();
        let mission_entry = mission_entry.downgrade();
        let generate_btn = generate_btn.downgrade();
        move || {
            let (Some(org_entry), Some(mission_entry), Some(generate_btn)) = (
                org_entry.upgrade(),
                mission_entry.upgrade(),
                generate_btn.upgrade(),
            ) else {
                return;
            };
            let ready = !state.borrow().is_busy()
                && !org_entry.text().is_empty()
                && !mission_entry.text().is_empty();
            generate_btn.set_sensitive(ready);
        }
    };

    org_entry.connect_changed(glib::clone!(
        #[strong]
        update_generate,
        move |_| {
            update_generate();
        }
    ));
    mission_entry.connect_changed(glib::clone!(
        #[strong]
        update_generate,
        move |_| {
            update_generate();
        }
    ));

    // Logic: submit
    generate_btn.connect_clicked(glib::clone!(
        #[strong]
        state,
        #[strong]
        update_generate,
        #[weak]
        window,
        #[weak]
        org_entry,
        #[weak]
        mission_entry,
        #[weak]
        spinner,
        #[weak]
        stack,
        #[weak]
        loading_view,
        #[weak]
        result_view,
        #[weak]
        save_btn,
        move |btn| {
            let org_type = org_entry.text().to_string();
            let mission = mission_entry.text().to_string();

            let client = {
                let s = state.borrow();
                if s.is_busy() {
                    return;
                }
                match s.client.clone() {
                    Some(client) => client,
                    None => return,
                }
            };

            state.borrow_mut().phase = UiPhase::FetchingLoadingFragment;
            btn.set_sensitive(false);
            spinner.start();
            stack.set_visible_child_name("loading");

            let input = GrantInput {
                org_type: org_type.clone(),
                mission,
            };

            let state = state.clone();
            let update_generate = update_generate.clone();
            let window = window.clone();
            let spinner = spinner.clone();
            let stack = stack.clone();
            let loading_view = loading_view.clone();
            let result_view = result_view.clone();
            let save_btn = save_btn.clone();

            glib::MainContext::default().spawn_local(async move {
                // Best-effort loading markup; any failure falls back to the
                // static placeholder and is never surfaced.
                let loading_html = match client.loading_fragment().await {
                    Ok(fragment) => render::loading_page(&fragment),
                    Err(e) => {
                        tracing::debug!("Loading fragment unavailable, using fallback: {}", e);
                        render::loading_fallback()
                    }
                };
                loading_view.load_html(&loading_html, None::<&str>);

                state.borrow_mut().phase = UiPhase::AwaitingResult;
                match client.run_grant_writer(&input).await {
                    Ok(result_fragment) => {
                        state.borrow_mut().phase = UiPhase::Rendering;
                        let (composed, cleaned) = fragment::apply_report_markdown(&result_fragment);
                        result_view.load_html(&render::result_page(&composed), None::<&str>);
                        stack.set_visible_child_name("result");

                        let has_report = cleaned.is_some();
                        if !has_report {
                            tracing::warn!(
                                "Result fragment carried no report data, displaying as returned"
                            );
                        }
                        {
                            let mut s = state.borrow_mut();
                            s.last_report = cleaned;
                            s.last_org_type = has_report.then(|| org_type.clone());
                            s.phase = UiPhase::Idle;
                        }
                        save_btn.set_sensitive(has_report);
                        tracing::info!("Report rendered for organization type '{}'", org_type);
                    }
                    Err(e) => {
                        // One funnel for every failure of the main path:
                        // restore the input page and alert with the message.
                        stack.set_visible_child_name("input");
                        state.borrow_mut().phase = UiPhase::Idle;
                        tracing::error!("Grant writer request failed: {}", e);

                        let dialog =
                            adw::AlertDialog::new(None, Some(&format!("Error: {}", e)));
                        dialog.add_response("close", "Close");
                        dialog.present(Some(&window));
                    }
                }

                spinner.stop();
                update_generate();
            });
        }
    ));

    // Logic: back to the form for another submission
    back_btn.connect_clicked(glib::clone!(
        #[strong]
        state,
        #[weak]
        stack,
        move |_| {
            if state.borrow().is_busy() {
                return;
            }
            stack.set_visible_child_name("input");
        }
    ));

    // Logic: export the cleaned report
    save_btn.connect_clicked(glib::clone!(
        #[strong]
        state,
        #[weak]
        window,
        #[weak]
        toast_overlay,
        move |_| {
            let (report, org_type) = {
                let s = state.borrow();
                (s.last_report.clone(), s.last_org_type.clone())
            };
            let Some(report) = report else { return };

            let dialog = gtk4::FileDialog::builder()
                .title("Save Report")
                .accept_label("Save")
                .initial_name(utils::suggested_report_filename(
                    org_type.as_deref().unwrap_or("Report"),
                ))
                .modal(true)
                .build();

            dialog.save(
                Some(&window),
                None::<&gio::Cancellable>,
                glib::clone!(
                    #[weak]
                    toast_overlay,
                    move |res| {
                        match res {
                            Ok(file) => {
                                if let Some(path) = file.path() {
                                    match utils::save_report(&path, &report) {
                                        Ok(()) => {
                                            tracing::info!("Report saved to {}", path.display());
                                            toast_overlay.add_toast(adw::Toast::new(&format!(
                                                "Report saved to {}",
                                                path.display()
                                            )));
                                        }
                                        Err(e) => {
                                            tracing::error!("Failed to save report: {}", e);
                                            toast_overlay.add_toast(adw::Toast::new(&format!(
                                                "Failed to save report: {}",
                                                e
                                            )));
                                        }
                                    }
                                }
                            }
                            Err(e) => tracing::warn!("File dialog cancelled: {}", e),
                        }
                    }
                ),
            );
        }
    ));

    // Logic: settings
    settings_btn.connect_clicked(glib::clone!(
        #[strong]
        state,
        #[strong]
        refresh_status,
        #[weak]
        window,
        move |_| {
            ui::settings::show_settings(
                window.upcast_ref(),
                state.clone(),
                Some(refresh_status.clone()),
            );
        }
    ));

    window.present();
}
