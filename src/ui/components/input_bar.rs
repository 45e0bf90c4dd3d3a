use eframe::egui;

/// What the user asked to send this frame. `kind` feeds the message
/// formatter's type tag.
pub struct InputAction {
    pub kind: &'static str,
    pub content: String,
}

/// Input field, the two send buttons and the timestamp checkbox. Empty
/// input is passed through unchanged; the chat service owns the blank-input
/// rules (a blank system send is meaningful).
pub fn render(
    ui: &mut egui::Ui,
    input_text: &mut String,
    include_timestamp: &mut bool,
) -> Option<InputAction> {
    let mut kind: Option<&'static str> = None;

    ui.horizontal(|ui| {
        let response = ui.text_edit_singleline(input_text);
        if ui.button("Send Message").clicked() {
            kind = Some("text");
        }
        if ui.button("Send System Message").clicked() {
            kind = Some("system");
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            kind = Some("text");
        }
    });

    ui.checkbox(include_timestamp, "Include Timestamp");

    kind.map(|kind| {
        let content = input_text.clone();
        input_text.clear();
        InputAction { kind, content }
    })
}
