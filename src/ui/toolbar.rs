// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor toolbar: tool selection plus project-level actions.

use crate::app::Tool;

/// Toolbar button presses that the editor screen acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    UploadBackground,
    Export,
}

/// Display the toolbar with tool selection and action buttons.
pub fn show(ui: &mut egui::Ui, current_tool: &mut Tool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Tools:");

        ui.separator();

        // Select tool
        if ui
            .selectable_label(*current_tool == Tool::Select, "⬆ Select")
            .clicked()
        {
            *current_tool = Tool::Select;
        }

        // Rectangle tool
        if ui
            .selectable_label(*current_tool == Tool::Rectangle, "▭ Rectangle")
            .clicked()
        {
            *current_tool = Tool::Rectangle;
        }

        ui.separator();

        if ui.button("Upload Background…").clicked() {
            action = ToolbarAction::UploadBackground;
        }
        if ui.button("Export").clicked() {
            action = ToolbarAction::Export;
        }

        ui.separator();

        // Tool description
        let tool_text = match current_tool {
            Tool::Select => "Click a region to edit it",
            Tool::Rectangle => "Drag to draw a new region (at least 10x10)",
        };

        ui.label(egui::RichText::new(tool_text).italics().weak());
    });

    action
}
