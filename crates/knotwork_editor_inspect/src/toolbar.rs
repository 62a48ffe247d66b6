// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor window toolbar - File/Edit/Tools menus and the hover readout.

use crate::node_editor::EditorRegistry;
use egui::Ui;
use knotwork_editor_graph::Graph;

/// A toolbar command the host application must carry out.
///
/// Persistence policy (paths, dialogs) belongs to the host, so the save
/// commands are surfaced instead of executed in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Save the current graph
    Save,
    /// Save the current graph under a new name
    SaveAs,
}

/// What the pointer is currently over on the graph canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverInfo {
    /// Type name of the hovered node
    pub node_type: String,
    /// Name of the hovered port, if any
    pub port: Option<String>,
}

impl HoverInfo {
    /// Hovering a node
    pub fn node(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            port: None,
        }
    }

    /// Hovering a port on a node
    pub fn port(node_type: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            port: Some(port.into()),
        }
    }

    /// The readout text shown in the toolbar
    pub fn text(&self) -> String {
        match &self.port {
            Some(port) => format!("{} > {}", self.node_type, port),
            None => self.node_type.clone(),
        }
    }
}

/// The node graph editor toolbar.
///
/// Draw it inside a horizontal menu bar (`egui::menu::bar`). Clear and
/// the editor cache rebuild act on their targets in place; the save
/// commands are returned as a [`ToolbarAction`] for the host.
#[derive(Debug, Default)]
pub struct Toolbar;

impl Toolbar {
    /// Create a toolbar
    pub fn new() -> Self {
        Self
    }

    /// Draw the toolbar row
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        graph: &mut Graph,
        editors: &mut EditorRegistry,
        hover: Option<&HoverInfo>,
    ) -> Option<ToolbarAction> {
        let mut action = None;

        ui.menu_button("File", |ui| {
            if ui.button("Save").clicked() {
                action = Some(ToolbarAction::Save);
                ui.close_menu();
            }
            if ui.button("Save As...").clicked() {
                action = Some(ToolbarAction::SaveAs);
                ui.close_menu();
            }
        });

        ui.menu_button("Edit", |ui| {
            if ui.button("Clear").clicked() {
                tracing::info!("clearing graph '{}'", graph.name);
                graph.clear();
                ui.close_menu();
            }
        });

        ui.menu_button("Tools", |ui| {
            if ui.button("Rebuild Node Editors").clicked() {
                editors.rebuild();
                ui.close_menu();
            }
        });

        if let Some(hover) = hover {
            ui.add_space(20.0);
            ui.label(hover.text());
        }

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotwork_editor_graph::Node;

    #[test]
    fn test_hover_text() {
        assert_eq!(HoverInfo::node("math.add").text(), "math.add");
        assert_eq!(HoverInfo::port("math.add", "sum").text(), "math.add > sum");
    }

    #[test]
    fn test_toolbar_pass_without_input_is_inert() {
        let mut graph = Graph::new("Scene");
        graph.add_node(Node::new("math.add", "Add"));
        let mut editors = EditorRegistry::new();
        let mut toolbar = Toolbar::new();

        let mut action = Some(ToolbarAction::Save);
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
                egui::menu::bar(ui, |ui| {
                    action = toolbar.ui(ui, &mut graph, &mut editors, Some(&HoverInfo::node("math.add")));
                });
            });
        });

        assert_eq!(action, None);
        assert_eq!(graph.node_count(), 1);
    }
}
