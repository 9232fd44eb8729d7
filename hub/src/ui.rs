//! egui page UI
//!
//! Draws the navbar, the per-page content, and the interactive widgets, and
//! feeds their geometry back into the widget controllers (scroll reveal,
//! carousel hover). The atom scene is rendered by wgpu underneath; every
//! panel here is transparent.

use egui::{Color32, Key, Rect, RichText, Rounding, Sense, Stroke, Vec2};

use common::theme;

use crate::calculator::CalcState;
use crate::pages::{self, Page, NAVBAR_SOLID_SCROLL, PARALLAX_FACTOR, PHYSICISTS};
use crate::HubState;

/// Window width below which the nav collapses behind the hamburger toggle
const NARROW_NAV_WIDTH: f32 = 700.0;

/// Convert a theme color to egui's color type
fn color32(c: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}

/// Draw one full UI frame.
pub fn draw(ctx: &egui::Context, state: &mut HubState) {
    draw_navbar(ctx, state);
    draw_page(ctx, state);
}

fn draw_navbar(ctx: &egui::Context, state: &mut HubState) {
    // Past the scroll threshold the bar switches to its more opaque style.
    let solid = state.scroll_y > NAVBAR_SOLID_SCROLL;
    let fill = if solid {
        Color32::from_rgba_unmultiplied(26, 26, 46, 250)
    } else {
        Color32::from_rgba_unmultiplied(26, 26, 46, 242)
    };
    let narrow = ctx.screen_rect().width() < NARROW_NAV_WIDTH;

    egui::TopBottomPanel::top("navbar")
        .frame(
            egui::Frame::none()
                .fill(fill)
                .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("⚛ Physics Hub")
                        .size(20.0)
                        .strong()
                        .color(color32(theme::TEAL)),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if narrow {
                        if ui
                            .button(RichText::new(state.nav.icon()).size(18.0))
                            .clicked()
                        {
                            state.nav.toggle();
                        }
                    } else {
                        // Inline links, right-to-left so reverse the order
                        state.nav.close();
                        for page in Page::ALL.iter().rev() {
                            nav_link(ui, state, *page);
                        }
                    }
                });
            });

            // Collapsed menu drops down under the bar
            if narrow && state.nav.is_open() {
                ui.separator();
                for page in Page::ALL {
                    nav_link(ui, state, page);
                }
            }
        });
}

fn nav_link(ui: &mut egui::Ui, state: &mut HubState, page: Page) {
    let active = state.page == page;
    let text = if active {
        RichText::new(page.title()).color(color32(theme::TEAL)).strong()
    } else {
        RichText::new(page.title()).color(color32(theme::TEXT))
    };

    if ui.selectable_label(active, text).clicked() {
        state.navigate(page);
    }
}

fn draw_page(ctx: &egui::Context, state: &mut HubState) {
    let viewport_height = ctx.screen_rect().height();

    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            // One scroll state per page; `navigate` zeroes `scroll_y` so a
            // fresh page always starts at the top.
            let output = egui::ScrollArea::vertical()
                .id_source(state.page.title())
                .vertical_scroll_offset(state.scroll_y)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Block top edges, in viewport coordinates, for the
                    // reveal controller.
                    let mut block_tops: Vec<f32> = Vec::new();

                    if state.page == Page::Home {
                        draw_hero(ui, state);
                        draw_calculator_card(ui, state);
                        ui.add_space(24.0);
                        draw_carousel(ui, state);
                        ui.add_space(24.0);
                    } else {
                        ui.add_space(24.0);
                    }

                    draw_content_blocks(ui, state, &mut block_tops);

                    // The calculator page carries a live calculator card
                    // under its topic blocks.
                    if state.page == Page::Calculator {
                        ui.add_space(18.0);
                        draw_calculator_card(ui, state);
                    }
                    ui.add_space(48.0);

                    let now = state.scene.time();
                    state.reveal.tick(&block_tops, viewport_height, now);
                });

            state.scroll_y = output.state.offset.y;
        });
}

fn draw_hero(ui: &mut egui::Ui, state: &mut HubState) {
    // Slight parallax: the hero drifts down as the page scrolls away.
    ui.add_space(36.0 + state.scroll_y * PARALLAX_FACTOR);

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Physics Hub")
                .size(40.0)
                .strong()
                .color(color32(theme::TEXT)),
        );
        ui.label(
            RichText::new("An interactive tour of the physical world")
                .size(16.0)
                .color(color32(theme::with_alpha(theme::TEXT, 0.7))),
        );
    });

    // Open space over the animated atom scene behind this panel
    ui.add_space(420.0);

    // Force flash overlay, centered on the nucleus
    if let Some(flash) = state.scene.flash() {
        let center = ui.ctx().screen_rect().center();
        let rect = Rect::from_center_size(center, Vec2::new(flash.width().max(1.0), 10.0));
        let color = color32(theme::with_alpha(theme::ORANGE, flash.alpha()));
        ui.painter().rect_filled(rect, Rounding::same(5.0), color);
    }
}

fn draw_calculator_card(ui: &mut egui::Ui, state: &mut HubState) {
    let page = state.page;
    let scene = &mut state.scene;
    let calc = &mut state.calc;

    ui.vertical_centered(|ui| {
        ui.set_max_width(380.0);

        egui::Frame::group(ui.style())
            .fill(Color32::from_rgba_unmultiplied(26, 26, 46, 230))
            .rounding(Rounding::same(8.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Force Calculator")
                        .size(18.0)
                        .strong()
                        .color(color32(theme::TEAL)),
                );
                ui.label(RichText::new("F = m × a").monospace());
                ui.add_space(6.0);

                let mass_edit = ui.horizontal(|ui| {
                    ui.label("Mass (kg)");
                    ui.add(
                        egui::TextEdit::singleline(&mut calc.mass_input).desired_width(120.0),
                    )
                });
                let accel_edit = ui.horizontal(|ui| {
                    ui.label("Acceleration (m/s²)");
                    ui.add(
                        egui::TextEdit::singleline(&mut calc.accel_input).desired_width(120.0),
                    )
                });

                let mass_resp = mass_edit.inner;
                let accel_resp = accel_edit.inner;

                // Calculator page rule: editing clears the stale result
                if page.clears_result_on_edit() && (mass_resp.changed() || accel_resp.changed())
                {
                    calc.clear_result();
                }

                // Enter in either field acts like pressing the button
                let enter_pressed = (mass_resp.lost_focus() || accel_resp.lost_focus())
                    && ui.input(|i| i.key_pressed(Key::Enter));

                ui.add_space(6.0);
                if ui.button("Calculate").clicked() || enter_pressed {
                    if let Some(force) = calc.evaluate() {
                        // The flash lives in the atom scene, so only pages
                        // that show it get the effect.
                        if force > 0.0 && page.shows_atom_scene() {
                            scene.flash_force(force);
                        }
                    }
                }

                if let Some(outcome) = &calc.outcome {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(outcome.text())
                            .strong()
                            .color(color32(outcome.color())),
                    );
                }
            });
    });
}

fn draw_carousel(ui: &mut egui::Ui, state: &mut HubState) {
    // Missing affordance: no carousel was built, draw nothing.
    let Some(carousel) = &mut state.carousel else {
        return;
    };

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Great Physicists")
                .size(22.0)
                .strong()
                .color(color32(theme::TEXT)),
        );
        ui.add_space(8.0);

        ui.set_max_width(560.0);

        let group = egui::Frame::group(ui.style())
            .fill(Color32::from_rgba_unmultiplied(26, 26, 46, 230))
            .rounding(Rounding::same(8.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(RichText::new("◀").size(18.0)).clicked() {
                        carousel.prev();
                    }

                    // The one active card
                    let physicist = &PHYSICISTS[carousel.current()];
                    ui.vertical_centered(|ui| {
                        ui.set_min_size(Vec2::new(420.0, 110.0));
                        ui.label(
                            RichText::new(physicist.name)
                                .size(20.0)
                                .strong()
                                .color(color32(theme::TEAL)),
                        );
                        ui.label(
                            RichText::new(physicist.years)
                                .color(color32(theme::with_alpha(theme::TEXT, 0.6))),
                        );
                        ui.label(RichText::new(physicist.field).italics());
                        ui.add_space(4.0);
                        ui.label(physicist.legacy);
                    });

                    if ui.button(RichText::new("▶").size(18.0)).clicked() {
                        carousel.next();
                    }
                });

                // Indicator dots, one per card, exactly one active
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let dots_width = carousel.len() as f32 * 18.0;
                    let indent = (ui.available_width() - dots_width).max(0.0) / 2.0;
                    ui.add_space(indent);

                    for i in 0..carousel.len() {
                        let (rect, resp) =
                            ui.allocate_exact_size(Vec2::splat(14.0), Sense::click());
                        let color = if carousel.is_active(i) {
                            color32(theme::TEAL)
                        } else {
                            Color32::from_gray(100)
                        };
                        ui.painter().circle_filled(rect.center(), 5.0, color);
                        if resp.clicked() {
                            carousel.jump_to(i);
                        }
                        ui.add_space(4.0);
                    }
                });
            });

        // Pointer over the widget pauses auto-advance; leaving resumes it
        // from a fresh period.
        let hovered = ui.rect_contains_pointer(group.response.rect);
        if hovered != state.carousel_hovered {
            state.carousel_hovered = hovered;
            if hovered {
                carousel.pause();
            } else {
                carousel.resume();
            }
        }
    });
}

fn draw_content_blocks(ui: &mut egui::Ui, state: &mut HubState, block_tops: &mut Vec<f32>) {
    let content = pages::content(state.page);
    let now = state.scene.time();
    let glow = state.page.hover_glow();

    // Block 0: the lead
    let alpha = state.reveal.alpha(0, now);
    let lead = ui
        .scope(|ui| {
            ui.set_opacity(alpha);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(content.heading)
                        .size(28.0)
                        .strong()
                        .color(color32(theme::TEXT)),
                );
                ui.add_space(4.0);
                ui.set_max_width(620.0);
                ui.label(RichText::new(content.lead).size(15.0));
            });
        })
        .response;
    block_tops.push(lead.rect.top());

    ui.add_space(18.0);

    // Remaining blocks: topic cards
    ui.horizontal_wrapped(|ui| {
        for (i, topic) in content.topics.iter().enumerate() {
            let alpha = state.reveal.alpha(i + 1, now);
            let card = ui
                .scope(|ui| {
                    ui.set_opacity(alpha);
                    egui::Frame::group(ui.style())
                        .fill(Color32::from_rgba_unmultiplied(26, 26, 46, 230))
                        .rounding(Rounding::same(8.0))
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            ui.set_width(210.0);
                            ui.set_min_height(110.0);
                            ui.label(RichText::new(topic.icon).size(26.0));
                            ui.label(
                                RichText::new(topic.title)
                                    .size(16.0)
                                    .strong()
                                    .color(color32(theme::TEAL)),
                            );
                            ui.label(RichText::new(topic.blurb).size(13.0));
                        });
                })
                .response;
            block_tops.push(card.rect.top());

            // Quantum page rule: hover glow on topic cards
            if glow && ui.rect_contains_pointer(card.rect) {
                ui.painter().rect_stroke(
                    card.rect,
                    Rounding::same(8.0),
                    Stroke::new(1.5, color32(theme::with_alpha(theme::TEAL, 0.8))),
                );
            }
        }
    });
}
