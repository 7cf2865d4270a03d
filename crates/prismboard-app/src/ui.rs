//! UI components using egui.

use egui::{Align2, Color32, Context, CornerRadius, CursorIcon, Frame, Margin, Sense, Stroke, Vec2};
use prismboard_core::tools::ToolKind;

use crate::shortcuts::ShortcutRegistry;

mod theme {
    use egui::Color32;

    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}

/// Toolbar button height.
const BUTTON_HEIGHT: f32 = 28.0;
/// Gap between the window edge and the toolbar panel.
const TOOLBAR_MARGIN: f32 = 6.0;

/// UI state mirrored from the whiteboard each frame.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently selected tool (mirrored from the whiteboard).
    pub current_tool: ToolKind,
}

/// Actions triggered by UI interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Change the current tool.
    SetTool(ToolKind),
}

/// Render all UI and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    render_toolbar(ctx, ui_state)
}

/// Render the toolbar and return any triggered action.
fn render_toolbar(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("toolbar"))
        .anchor(Align2::LEFT_TOP, Vec2::new(TOOLBAR_MARGIN, TOOLBAR_MARGIN))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(4.0, 0.0);

                    for tool in ToolKind::ALL {
                        let label = match ShortcutRegistry::label_for(tool) {
                            Some(key) => format!("{} ({key})", tool.label()),
                            None => tool.label().to_string(),
                        };
                        if tool_button(ui, &label, ui_state.current_tool == tool) {
                            action = Some(UiAction::SetTool(tool));
                        }
                    }
                });
            });
        });

    action
}

/// Toggle-style toolbar button. Returns true if clicked.
fn tool_button(ui: &mut egui::Ui, label: &str, selected: bool) -> bool {
    let font_id = egui::FontId::proportional(13.0);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
    let size = Vec2::new(galley.size().x + 20.0, BUTTON_HEIGHT);

    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if selected {
            theme::ACCENT
        } else if response.hovered() {
            Color32::from_gray(235)
        } else {
            Color32::from_gray(245)
        };
        let text_color = if selected {
            Color32::WHITE
        } else {
            Color32::from_gray(80)
        };

        ui.painter()
            .rect_filled(rect, CornerRadius::same(4), bg_color);
        ui.painter()
            .text(rect.center(), Align2::CENTER_CENTER, label, font_id, text_color);
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}

/// Standard panel frame with shadow.
fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(4))
}
