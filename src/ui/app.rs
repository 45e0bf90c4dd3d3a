use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ChatCommand, ChatEvent};
use crate::session::SessionConfig;

use super::components::{chat_area, input_bar};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<ChatCommand>,
    event_receiver: mpsc::UnboundedReceiver<ChatEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ChatCommand>,
        event_receiver: mpsc::UnboundedReceiver<ChatEvent>,
        session: SessionConfig,
        include_timestamp: bool,
    ) -> Self {
        Self {
            state: AppState::new(session, include_timestamp),
            command_sender,
            event_receiver,
        }
    }

    // Transcript mutation happens here, on the UI thread, never on the
    // task that ran the fan-out.
    fn handle_chat_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ChatEvent::Delivered(message) => self.state.push_message(&message),
            }
        }
    }

    fn send_command(&mut self, action: input_bar::InputAction) {
        let command = ChatCommand::Send {
            kind: action.kind.to_string(),
            content: action.content,
            timestamp: self.state.include_timestamp,
        };
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to chat service: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_chat_events();

        egui::TopBottomPanel::top("session_header").show(ctx, |ui| {
            ui.label(format!(
                "Welcome, {} | Theme: {}",
                self.state.session.username(),
                self.state.session.theme()
            ));
        });

        egui::TopBottomPanel::bottom("input_panel").show(ctx, |ui| {
            if let Some(action) = input_bar::render(
                ui,
                &mut self.state.input_text,
                &mut self.state.include_timestamp,
            ) {
                self.send_command(action);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chat Simulator");
            ui.separator();
            chat_area::render(ui, &self.state.transcript);
        });

        ctx.request_repaint();
    }
}
