use std::sync::Arc;

use crate::config::AppConfig;
use crate::event::{Effect, Mailbox, Message};
use crate::export::CapturedSurface;
use crate::panels::{self, CompositionSurface, NoticeQueue};
use crate::permission::PermissionGuard;
use crate::platform::PlatformServices;
use crate::state::{LayoutMode, Session, Subscription, ViewportWatcher};
use crate::tasks;
use crate::texture_manager::TextureManager;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(37, 41, 46);

/// Root of the UI. Owns the session and every piece of per-run state; nothing
/// is persisted between runs.
pub struct StickerSmashApp {
    config: AppConfig,
    session: Session,
    services: PlatformServices,
    viewport: ViewportWatcher,
    // Released when the app is dropped
    _layout_log: Subscription,
    permission_guard: PermissionGuard,
    mailbox: Mailbox,
    notices: NoticeQueue,
    textures: TextureManager,
    surface: CompositionSurface,
    /// Screenshots requested but not yet delivered
    pending_captures: usize,
}

impl StickerSmashApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let config = AppConfig::default();
        let services = PlatformServices::for_current(&config);
        log::info!("Starting Sticker Smash ({:?})", services);
        Self::with_services(config, services)
    }

    pub fn with_services(config: AppConfig, services: PlatformServices) -> Self {
        let viewport = ViewportWatcher::new(config.layout.narrow_breakpoint);
        let layout_log = viewport.subscribe(|mode: LayoutMode| {
            log::info!("Layout changed to {:?}", mode);
        });

        Self {
            config,
            session: Session::new(),
            services,
            viewport,
            _layout_log: layout_log,
            permission_guard: PermissionGuard::new(),
            mailbox: Mailbox::new(),
            notices: NoticeQueue::default(),
            textures: TextureManager::new(4),
            surface: CompositionSurface::new(),
            pending_captures: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    pub fn viewport(&self) -> &ViewportWatcher {
        &self.viewport
    }

    /// Where the composition surface was drawn in the last frame
    pub fn surface_rect(&self) -> Option<egui::Rect> {
        self.surface.rect()
    }

    pub fn pending_captures(&self) -> usize {
        self.pending_captures
    }

    /// Feed one message through the state machine and carry out its effect.
    /// Rejected messages are logged and dropped.
    pub fn handle_message(&mut self, ctx: &egui::Context, message: Message) {
        if let Message::ExportFinished(Err(err)) = &message {
            log::error!("Export failed: {}", err);
        }

        match self.session.update(message) {
            Ok(Some(effect)) => self.run_effect(ctx, effect),
            Ok(None) => {}
            Err(err) => log::warn!("Ignored: {}", err),
        }
    }

    /// Handle everything background tasks posted since the last frame
    pub fn process_task_results(&mut self, ctx: &egui::Context) {
        for message in self.mailbox.drain() {
            self.handle_message(ctx, message);
        }
    }

    /// Crop a delivered screenshot to the composition surface and export it
    pub fn on_screenshot(&mut self, ctx: &egui::Context, screenshot: &egui::ColorImage) {
        if self.pending_captures == 0 {
            log::debug!("Ignoring screenshot nobody asked for");
            return;
        }
        self.pending_captures -= 1;

        let Some(rect) = self.surface.rect() else {
            log::error!("Composition surface was never drawn, nothing to capture");
            return;
        };
        let surface = match CapturedSurface::from_screenshot(screenshot, rect, ctx.pixels_per_point()) {
            Ok(surface) => surface,
            Err(err) => {
                self.handle_message(ctx, Message::ExportFinished(Err(err)));
                return;
            }
        };
        tasks::spawn_export(
            Arc::clone(&self.services.exporter),
            surface,
            self.mailbox.poster(Some(ctx.clone())),
        );
    }

    fn run_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::LaunchImagePicker => {
                log::info!("Launching image picker");
                let pick = self.services.image_source.pick_image();
                tasks::spawn_pick(pick, self.mailbox.poster(Some(ctx.clone())));
            }
            Effect::CaptureSurface => {
                log::info!("Capturing composition surface");
                self.pending_captures += 1;
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            }
            Effect::Notify(notice) => self.notices.push(notice),
        }
    }

    /// One frame: observe the viewport, apply task results, draw, then apply
    /// what the user did during this frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.textures.begin_frame();
        self.viewport.observe_width(ctx.screen_rect().width());
        self.permission_guard.poll(self.services.permission.as_ref());

        self.process_task_results(ctx);
        for screenshot in Self::take_screenshots(ctx) {
            self.on_screenshot(ctx, &screenshot);
        }

        let mut messages = Vec::new();
        // The picker is a bottom panel, so it has to claim its space before the central panel
        panels::sticker_picker(ctx, self.session.is_picker_open(), &mut messages);
        self.show_editor(ctx, &mut messages);
        self.notices.show(ctx);

        for message in messages {
            self.handle_message(ctx, message);
        }
    }

    fn take_screenshots(ctx: &egui::Context) -> Vec<Arc<egui::ColorImage>> {
        ctx.input(|i| {
            i.raw
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Screenshot { image, .. } => Some(Arc::clone(image)),
                    _ => None,
                })
                .collect()
        })
    }

    fn show_editor(&mut self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let layout = self.viewport.layout_mode();
        let mode = self.session.mode();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                ui.add_space(60.0);
                ui.vertical_centered(|ui| {
                    self.surface
                        .show(ui, &self.session, &mut self.textures, &self.config.layout);
                });

                ui.add_space(32.0);
                let width = panels::controls_width(mode, layout);
                let margin = ((ui.available_width() - width) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(margin);
                    ui.vertical(|ui| panels::controls(ui, mode, layout, messages));
                });
            });
    }
}

impl eframe::App for StickerSmashApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
