use super::state::{LinkForm, RowAction, Tab};
use super::style::{PanelTheme, CONTENT_PADDING, ROW_GAP, ROW_HEIGHT, ROW_ROUNDING};
use super::QuickLinksApp;
use eframe::egui;
use log::info;
use quick_links::model::link_count_label;
use quick_links::{
    ColumnCount, InsertionSide, ItemBounds, LayoutPreference, Link, LinkList, PresentationMode,
};

impl eframe::App for QuickLinksApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_end(ctx);

        let theme = PanelTheme::default();
        let panel_frame = egui::Frame::none()
            .fill(theme.panel_bg)
            .inner_margin(egui::Margin::same(CONTENT_PADDING));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                self.draw_header(ui, &theme);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.tab, Tab::Company, "Company");
                    ui.selectable_value(&mut self.tab, Tab::MyLinks, "My Links");
                });
                ui.add_space(8.0);

                egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                    Tab::Company => self.draw_links(ui, ctx, LinkList::Company, &theme),
                    Tab::MyLinks => self.draw_custom_tab(ui, ctx, &theme),
                });
            });

        self.draw_form(ctx, &theme);
    }
}

impl QuickLinksApp {
    fn handle_drag_end(&mut self, ctx: &egui::Context) {
        if self.links.drag_state().is_none() {
            return;
        }
        let (released, escaped, unfocused) = ctx.input(|i| {
            (
                i.pointer.any_released(),
                i.key_pressed(egui::Key::Escape),
                i.viewport().focused == Some(false),
            )
        });
        if escaped || unfocused {
            self.links.cancel_drag();
        } else if released {
            self.links.end_drag();
        }
    }

    fn draw_header(&mut self, ui: &mut egui::Ui, theme: &PanelTheme) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Quick Links")
                        .size(18.0)
                        .strong()
                        .color(theme.title_color),
                );
                ui.label(
                    egui::RichText::new("Access your most important resources")
                        .size(12.0)
                        .color(theme.muted_text),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.menu_button("Layout", |ui| self.draw_layout_menu(ui));
            });
        });
    }

    fn draw_layout_menu(&mut self, ui: &mut egui::Ui) {
        let mut layout = self.links.layout();

        ui.label("View Mode");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut layout.presentation_mode, PresentationMode::List, "List");
            ui.selectable_value(&mut layout.presentation_mode, PresentationMode::Grid, "Grid");
        });

        if layout.presentation_mode == PresentationMode::Grid {
            ui.separator();
            ui.label("Columns");
            ui.horizontal(|ui| {
                for count in ColumnCount::ALL {
                    ui.selectable_value(&mut layout.column_count, count, count.get().to_string());
                }
            });
        }

        if layout != self.links.layout() {
            self.apply_layout(layout);
        }
    }

    fn apply_layout(&mut self, layout: LayoutPreference) {
        self.links.cancel_drag();
        self.links.set_layout(layout);
    }

    fn draw_custom_tab(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, theme: &PanelTheme) {
        let count = self.links.custom_links().len();

        if count == 0 {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new("No links yet")
                        .strong()
                        .color(theme.title_color),
                );
                ui.label(
                    egui::RichText::new("Add your favorite links to access them quickly")
                        .color(theme.muted_text),
                );
                ui.add_space(12.0);
                if ui.button("Add Your First Link").clicked() {
                    self.open_add_form();
                }
            });
            return;
        }

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(link_count_label(count)).color(theme.muted_text));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Add Link").clicked() {
                    self.open_add_form();
                }
            });
        });
        ui.add_space(6.0);
        self.draw_links(ui, ctx, LinkList::Custom, theme);
    }

    fn draw_links(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        list: LinkList,
        theme: &PanelTheme,
    ) {
        let links = self.links.links(list);
        if links.is_empty() {
            return;
        }

        let columns = self.links.layout().effective_columns().max(1);
        let rows = links.len().div_ceil(columns);
        let width = ui.available_width();
        let cell_width = (width - ROW_GAP * (columns as f32 - 1.0)) / columns as f32;
        let (area, _) = ui.allocate_exact_size(
            egui::vec2(width, rows as f32 * (ROW_HEIGHT + ROW_GAP)),
            egui::Sense::hover(),
        );

        let dragging = self
            .links
            .drag_state()
            .filter(|state| state.list == list)
            .map(|state| state.dragging_index);
        let mut rects = Vec::with_capacity(links.len());
        let mut action = None;

        for (idx, link) in links.iter().enumerate() {
            let min = area.min
                + egui::vec2(
                    (idx % columns) as f32 * (cell_width + ROW_GAP),
                    (idx / columns) as f32 * (ROW_HEIGHT + ROW_GAP),
                );
            let rect = egui::Rect::from_min_size(min, egui::vec2(cell_width, ROW_HEIGHT));
            rects.push(rect);

            let resp = ui.interact(
                rect,
                ui.id().with((list_key(list), link.id.as_str())),
                egui::Sense::click_and_drag(),
            );

            if resp.drag_started_by(egui::PointerButton::Primary) {
                self.links.begin_drag(list, idx);
            }

            let fill = if dragging == Some(idx) {
                theme.row_dragging
            } else if resp.hovered() {
                theme.row_hover
            } else if list == LinkList::Company {
                theme.company_row_bg
            } else {
                theme.row_bg
            };
            ui.painter().rect_filled(rect, ROW_ROUNDING, fill);
            if resp.hovered() && dragging.is_none() {
                ui.painter().rect_stroke(
                    rect,
                    ROW_ROUNDING,
                    egui::Stroke::new(1.0, theme.row_border),
                );
            }
            paint_link_text(&ui.painter_at(rect.shrink(10.0)), rect, link, list, theme);

            let resp = resp.on_hover_text(link.launch_url());
            if dragging.is_none() && resp.clicked() {
                info!("Opening {}: {}", link.title, link.launch_url());
                ctx.open_url(egui::OpenUrl::new_tab(link.launch_url()));
            }

            if list == LinkList::Custom {
                resp.context_menu(|ui| {
                    if ui.button("Edit").clicked() {
                        action = Some(RowAction::Edit(link.clone()));
                        ui.close_menu();
                    }
                    if ui.button("Delete").clicked() {
                        action = Some(RowAction::Delete(link.id.clone()));
                        ui.close_menu();
                    }
                });
            }
        }

        if dragging.is_some() {
            if let Some(pointer) = ctx.input(|i| i.pointer.hover_pos()) {
                let hovered = rects.iter().position(|rect| rect.contains(pointer));
                if let Some(idx) = hovered {
                    let rect = rects[idx];
                    // Grid cells are read left to right, so hysteresis runs along x.
                    let (bounds, along) = if columns > 1 {
                        (ItemBounds::new(rect.left(), rect.right()), pointer.x)
                    } else {
                        (ItemBounds::new(rect.top(), rect.bottom()), pointer.y)
                    };
                    if self.links.drag_over(list, idx, bounds, along) {
                        ctx.request_repaint();
                    }
                }
            }
        }

        let insertion = self
            .links
            .drag_state()
            .filter(|state| state.list == list)
            .and_then(|state| state.insertion);
        if let Some(point) = insertion {
            if let Some(rect) = rects.get(point.index) {
                let stroke = egui::Stroke::new(2.0, theme.drop_hint);
                if columns > 1 {
                    let x = match point.side {
                        InsertionSide::Before => rect.left() - ROW_GAP * 0.5,
                        InsertionSide::After => rect.right() + ROW_GAP * 0.5,
                    };
                    ui.painter().vline(x, rect.y_range(), stroke);
                } else {
                    let y = match point.side {
                        InsertionSide::Before => rect.top() - ROW_GAP * 0.5,
                        InsertionSide::After => rect.bottom() + ROW_GAP * 0.5,
                    };
                    ui.painter().hline(rect.x_range(), y, stroke);
                }
            }
        }

        match action {
            Some(RowAction::Edit(link)) => {
                self.links.cancel_drag();
                self.form = Some(LinkForm::for_edit(&link));
            }
            Some(RowAction::Delete(id)) => {
                self.links.delete_link(&id);
            }
            None => {}
        }
    }

    fn draw_form(&mut self, ctx: &egui::Context, theme: &PanelTheme) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        let mut open = true;
        let mut submit = false;
        let mut cancel = false;
        let heading = form.heading();

        egui::Window::new(heading)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(form.blurb()).color(theme.muted_text));
                ui.add_space(8.0);

                ui.label("Title *");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut form.draft.title)
                        .hint_text("e.g., Project Dashboard"),
                );
                if resp.changed() {
                    form.errors.title = None;
                }
                if let Some(message) = &form.errors.title {
                    ui.colored_label(theme.error_text, message.as_str());
                }

                ui.label("URL *");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut form.draft.url)
                        .hint_text("e.g., dashboard.company.com"),
                );
                if resp.changed() {
                    form.errors.url = None;
                }
                if let Some(message) = &form.errors.url {
                    ui.colored_label(theme.error_text, message.as_str());
                }

                ui.label("Description (optional)");
                ui.add(
                    egui::TextEdit::multiline(&mut form.draft.description)
                        .hint_text("Brief description of this link")
                        .desired_rows(2),
                );

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if ui.button(form.submit_label()).clicked() {
                        submit = true;
                    }
                });
            });

        let mut close = cancel || !open;
        if submit {
            let outcome = match form.editing.as_deref() {
                Some(id) => self.links.update_link(id, &form.draft).map(|_| ()),
                None => self.links.add_link(&form.draft).map(|_| ()),
            };
            match outcome {
                Ok(()) => close = true,
                Err(errors) => form.errors = errors,
            }
        }
        if close {
            self.form = None;
        }
    }
}

fn paint_link_text(
    painter: &egui::Painter,
    rect: egui::Rect,
    link: &Link,
    list: LinkList,
    theme: &PanelTheme,
) {
    let left = rect.min.x + 12.0;
    painter.text(
        egui::pos2(left, rect.min.y + 16.0),
        egui::Align2::LEFT_CENTER,
        &link.title,
        egui::FontId::proportional(14.0),
        theme.title_color,
    );

    let (detail, color) = match (&link.description, list) {
        (Some(description), _) => (description.as_str(), theme.muted_text),
        (None, LinkList::Custom) => (link.url.as_str(), theme.url_text),
        (None, LinkList::Company) => return,
    };
    painter.text(
        egui::pos2(left, rect.min.y + 35.0),
        egui::Align2::LEFT_CENTER,
        detail,
        egui::FontId::proportional(11.0),
        color,
    );
}

fn list_key(list: LinkList) -> &'static str {
    match list {
        LinkList::Company => "company_link",
        LinkList::Custom => "custom_link",
    }
}
