use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Entry, Label, Orientation, Spinner};

/// Creates the input card: the two form fields, the Generate button and its
/// activity spinner.
///
/// The button starts desensitized; the caller wires sensitivity to field
/// contents and the submission phase.
pub fn create_input_card() -> (Box, Entry, Entry, Button, Spinner) {
    let card = Box::new(Orientation::Vertical, 12);
    card.set_halign(Align::Center);
    card.set_valign(Align::Center);
    card.set_width_request(480);
    card.set_margin_top(24);
    card.set_margin_bottom(24);
    card.set_margin_start(24);
    card.set_margin_end(24);
    card.add_css_class("card");

    let title = Label::new(Some("AI Grant Writer"));
    title.add_css_class("title-2");
    title.set_margin_top(18);

    let subtitle = Label::new(Some(
        "Describe your organization and mission to generate a grant strategy report.",
    ));
    subtitle.add_css_class("dim-label");
    subtitle.set_wrap(true);
    subtitle.set_margin_start(18);
    subtitle.set_margin_end(18);

    let org_entry = Entry::builder()
        .placeholder_text("Organization Type (e.g. 'Non-profit NGO', 'Tech Startup')")
        .margin_start(18)
        .margin_end(18)
        .build();

    let mission_entry = Entry::builder()
        .placeholder_text("Project Mission (e.g. 'Clean water access in rural areas')")
        .margin_start(18)
        .margin_end(18)
        .build();

    let action_box = Box::new(Orientation::Horizontal, 6);
    action_box.set_halign(Align::End);
    action_box.set_margin_start(18);
    action_box.set_margin_end(18);
    action_box.set_margin_bottom(18);

    let spinner = Spinner::new();

    let generate_btn = Button::builder()
        .label("Generate Report")
        .sensitive(false)
        .build();
    generate_btn.add_css_class("suggested-action");

    action_box.append(&spinner);
    action_box.append(&generate_btn);

    card.append(&title);
    card.append(&subtitle);
    card.append(&org_entry);
    card.append(&mission_entry);
    card.append(&action_box);

    (card, org_entry, mission_entry, generate_btn, spinner)
}
