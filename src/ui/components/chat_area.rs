use eframe::egui;

use crate::ui::state::{EntryStyle, TranscriptEntry};

pub fn render(ui: &mut egui::Ui, transcript: &[TranscriptEntry]) {
    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in transcript {
                ui.label(styled(entry));
            }
        });
}

fn styled(entry: &TranscriptEntry) -> egui::RichText {
    let text = egui::RichText::new(entry.text.as_str());
    match entry.style {
        EntryStyle::System => text
            .color(egui::Color32::from_rgb(178, 0, 0))
            .strong()
            .italics(),
        EntryStyle::OwnText => text.color(egui::Color32::from_rgb(0, 100, 0)),
        EntryStyle::OtherText => text,
    }
}
