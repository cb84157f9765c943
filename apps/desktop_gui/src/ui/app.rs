use std::{collections::HashMap, sync::Arc, time::Duration};

use catalog_view::{CardView, CatalogPage, EventOutcome, Key, OverlayView, PageView, UiAction};
use client_core::CatalogStore;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::ProductId;

use crate::backend_bridge::commands::{BackendCommand, ThumbnailRequest};
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::thumbnails::ThumbnailState;

const CARD_SIZE: egui::Vec2 = egui::vec2(220.0, 330.0);
const CARD_IMAGE_HEIGHT: f32 = 200.0;
const OVERLAY_WIDTH: f32 = 520.0;
const OVERLAY_IMAGE_HEIGHT: f32 = 320.0;
const IDLE_REPAINT: Duration = Duration::from_millis(100);

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

pub struct CatalogApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    page: CatalogPage,
    thumbnails: HashMap<ProductId, ThumbnailState>,
}

impl CatalogApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        store: Arc<CatalogStore>,
    ) -> Self {
        let mut page = CatalogPage::new(store);
        page.mount();
        Self {
            cmd_tx,
            ui_rx,
            page,
            thumbnails: HashMap::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CatalogReady => self.request_thumbnails(),
                UiEvent::CatalogUnavailable => {
                    tracing::debug!("catalog unavailable; keeping empty page");
                }
                UiEvent::ThumbnailLoaded { product_id, image } => {
                    self.thumbnails.insert(
                        product_id,
                        ThumbnailState::Ready {
                            image,
                            texture: None,
                        },
                    );
                }
                UiEvent::ThumbnailFailed { product_id, reason } => {
                    tracing::warn!(product_id = product_id.0, "thumbnail unavailable: {reason}");
                    self.thumbnails.insert(product_id, ThumbnailState::Failed);
                }
            }
        }
    }

    fn request_thumbnails(&mut self) {
        let requests: Vec<ThumbnailRequest> = self
            .page
            .store()
            .all()
            .iter()
            .filter(|product| !product.thumbnail.trim().is_empty())
            .map(|product| ThumbnailRequest {
                product_id: product.id,
                url: product.thumbnail.clone(),
            })
            .collect();
        if requests.is_empty() {
            return;
        }

        for request in &requests {
            self.thumbnails
                .insert(request.product_id, ThumbnailState::Loading);
        }
        dispatch_backend_command(&self.cmd_tx, BackendCommand::FetchThumbnails { requests });
    }

    fn show_toolbar(&self, ctx: &egui::Context, view: &PageView, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("catalog_toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Product Catalog");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let selected_label = view
                        .selector
                        .options
                        .iter()
                        .find(|option| option.value == view.selector.selected)
                        .map(|option| option.label.clone())
                        .unwrap_or_default();
                    let mut selected = view.selector.selected.clone();

                    ui.add_enabled_ui(!view.selector.options.is_empty(), |ui| {
                        egui::ComboBox::from_id_salt("category_filter")
                            .selected_text(selected_label)
                            .width(200.0)
                            .show_ui(ui, |ui| {
                                for option in &view.selector.options {
                                    ui.selectable_value(
                                        &mut selected,
                                        option.value.clone(),
                                        option.label.as_str(),
                                    );
                                }
                            });
                    });

                    if selected != view.selector.selected {
                        actions.push(UiAction::FilterChanged(selected));
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_grid(&mut self, ctx: &egui::Context, view: &PageView, actions: &mut Vec<UiAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .enable_scrolling(!view.background_scroll_locked)
                .show(ui, |ui| {
                    ui.style_mut().spacing.item_spacing = egui::vec2(16.0, 16.0);
                    ui.horizontal_wrapped(|ui| {
                        for card in &view.cards {
                            if self.show_card(ui, card).clicked() {
                                actions.push(UiAction::CardActivated(card.product_id));
                            }
                        }
                    });
                });
        });
    }

    fn show_card(&mut self, ui: &mut egui::Ui, card: &CardView) -> egui::Response {
        let (rect, _) = ui.allocate_exact_size(CARD_SIZE, egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
        ui.painter().rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, ui.visuals().strong_text_color()),
            egui::StrokeKind::Inside,
        );

        let image_size = egui::vec2(CARD_SIZE.x, CARD_IMAGE_HEIGHT);
        ui_in_rect(ui, rect, |ui| {
            self.show_product_image(ui, card.product_id, &card.alt_text, image_size);
            egui::Frame::NONE
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.style_mut().interaction.selectable_labels = false;
                    ui.add(egui::Label::new(egui::RichText::new(&card.title).strong()).truncate());
                    ui.label(egui::RichText::new(&card.price_label).size(17.0));
                    ui.label(
                        egui::RichText::new(card.category_label.to_uppercase())
                            .small()
                            .weak(),
                    );
                });
        });

        // Registered after the contents so the whole card takes the click.
        ui.interact(
            rect,
            ui.id().with(("product_card", card.product_id.0)),
            egui::Sense::click(),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand)
    }

    fn show_product_image(
        &mut self,
        ui: &mut egui::Ui,
        product_id: ProductId,
        alt_text: &str,
        size: egui::Vec2,
    ) {
        let ctx = ui.ctx().clone();
        let texture = self.thumbnails.get_mut(&product_id).and_then(|state| {
            state
                .texture(&ctx, &format!("product-thumbnail-{}", product_id.0))
                .cloned()
        });

        match texture {
            Some(texture) => {
                let mut fitted = texture.size_vec2();
                let scale = (size.x / fitted.x).min(size.y / fitted.y);
                fitted *= scale;
                ui.allocate_ui_with_layout(
                    size,
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| ui.add(egui::Image::new(&texture).fit_to_exact_size(fitted)),
                );
            }
            None => {
                let loading = self
                    .thumbnails
                    .get(&product_id)
                    .is_some_and(ThumbnailState::is_loading);
                ui.allocate_ui_with_layout(
                    size,
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        if loading {
                            ui.spinner();
                        } else {
                            ui.weak(alt_text);
                        }
                    },
                );
            }
        }
    }

    fn show_overlay(
        &mut self,
        ctx: &egui::Context,
        overlay: &OverlayView,
        actions: &mut Vec<UiAction>,
    ) {
        let modal = egui::Modal::new(egui::Id::new("product_overlay")).show(ctx, |ui| {
            ui.set_width(OVERLAY_WIDTH);
            let mut dismiss_clicked = false;

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismiss_clicked = ui.button("✕").on_hover_text("Close").clicked();
                });
            });
            self.show_product_image(
                ui,
                overlay.product_id,
                &overlay.title,
                egui::vec2(OVERLAY_WIDTH, OVERLAY_IMAGE_HEIGHT),
            );
            ui.add_space(8.0);
            ui.heading(&overlay.title);
            ui.label(egui::RichText::new(&overlay.price_label).size(20.0));
            ui.add_space(4.0);
            ui.label(&overlay.description);

            dismiss_clicked
        });

        if modal.inner {
            actions.push(UiAction::DismissClicked);
        }
        if modal.backdrop_response.clicked() {
            actions.push(UiAction::OverlayClicked {
                inside_content: false,
            });
        } else if modal.response.clicked() {
            actions.push(UiAction::OverlayClicked {
                inside_content: true,
            });
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context, actions: Vec<UiAction>) {
        let mut changed = false;
        for action in actions {
            changed |= self.page.handle(action) == EventOutcome::Changed;
        }
        if changed {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let view = self.page.render();
        let mut actions = Vec::new();

        self.show_toolbar(ctx, &view, &mut actions);
        self.show_grid(ctx, &view, &mut actions);
        if let Some(overlay) = &view.overlay {
            self.show_overlay(ctx, overlay, &mut actions);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            actions.push(UiAction::KeyPressed(Key::Escape));
        }

        self.apply_actions(ctx, actions);
        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

impl Drop for CatalogApp {
    fn drop(&mut self) {
        self.page.unmount();
    }
}
