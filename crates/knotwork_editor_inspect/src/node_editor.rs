// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node editor base - header, port columns, property body - and the
//! registry of custom per-node-type editors.

use crate::inspect::Inspect;
use crate::panel::panel_ui;
use egui::{vec2, Align2, Color32, FontId, Pos2, Sense, Stroke, Ui};
use indexmap::IndexMap;
use knotwork_editor_graph::{Node, Port, PortDirection, PortId};

/// Default preferred node width
pub const DEFAULT_NODE_WIDTH: f32 = 200.0;

const HEADER_HEIGHT: f32 = 30.0;
const PORT_HEIGHT: f32 = 22.0;
const PORT_RADIUS: f32 = 6.0;
const PORT_PADDING: f32 = 12.0;

/// Port handle positions produced by a node render pass, keyed by port.
///
/// The wire-drawing surface consumes these to anchor connection curves:
/// input handles sit on the left edge of their row, output handles on
/// the right edge.
pub type PortLayout = IndexMap<PortId, Pos2>;

/// Renders the GUI for one node. The default pipeline draws a header,
/// the port columns, and the property body; custom editors override any
/// stage and may reuse the provided drawing functions.
pub trait NodeEditor {
    /// Draw the node GUI, returning the port handle positions
    fn node_ui(&mut self, ui: &mut Ui, node: &Node, owner: &mut dyn Inspect) -> PortLayout {
        draw_header(ui, node);
        let layout = draw_ports(ui, node);
        draw_body(ui, owner);
        layout
    }

    /// Preferred node width
    fn width(&self) -> f32 {
        DEFAULT_NODE_WIDTH
    }
}

/// The built-in editor used for node types without a custom editor
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNodeEditor;

impl NodeEditor for DefaultNodeEditor {}

/// Draw the standard node header: the display name, centered
pub fn draw_header(ui: &mut Ui, node: &Node) {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), HEADER_HEIGHT), Sense::hover());
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        &node.name,
        FontId::proportional(14.0),
        ui.visuals().strong_text_color(),
    );
}

/// Draw the standard port columns: inputs on the left, outputs on the
/// right, one labeled row per port. Returns the handle positions.
pub fn draw_ports(ui: &mut Ui, node: &Node) -> PortLayout {
    let mut layout = PortLayout::new();
    let column_width = ui.available_width() / 2.0;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            for port in &node.inputs {
                let handle = draw_port_row(ui, port, column_width);
                layout.insert(port.id, handle);
            }
        });
        ui.vertical(|ui| {
            for port in &node.outputs {
                let handle = draw_port_row(ui, port, column_width);
                layout.insert(port.id, handle);
            }
        });
    });

    layout
}

/// Draw one port row. Returns the handle position: the row's left edge
/// center for inputs, right edge center for outputs.
pub fn draw_port_row(ui: &mut Ui, port: &Port, width: f32) -> Pos2 {
    let (rect, _) = ui.allocate_exact_size(vec2(width, PORT_HEIGHT), Sense::hover());
    let painter = ui.painter();

    let (handle, anchor, align) = match port.direction {
        PortDirection::Input => (
            rect.left_center(),
            Pos2::new(rect.left() + PORT_PADDING, rect.center().y),
            Align2::LEFT_CENTER,
        ),
        PortDirection::Output => (
            rect.right_center(),
            Pos2::new(rect.right() - PORT_PADDING, rect.center().y),
            Align2::RIGHT_CENTER,
        ),
    };

    painter.text(
        anchor,
        align,
        &port.name,
        FontId::proportional(10.0),
        Color32::from_gray(200),
    );

    let [r, g, b] = port.port_type.color();
    painter.circle_filled(handle, PORT_RADIUS, Color32::from_rgb(r, g, b));
    painter.circle_stroke(handle, PORT_RADIUS, Stroke::new(1.0, Color32::from_gray(30)));

    handle
}

/// Draw the standard node body: the typed property panel over the
/// node's inspectable data
pub fn draw_body(ui: &mut Ui, owner: &mut dyn Inspect) {
    panel_ui(ui, owner);
}

/// Factory for a custom node editor
pub type EditorFactory = fn() -> Box<dyn NodeEditor>;

/// Registry of custom node editors, keyed by node type name.
///
/// Editors are instantiated from their factories at registration and
/// cached; unregistered node types fall back to [`DefaultNodeEditor`].
pub struct EditorRegistry {
    factories: IndexMap<String, EditorFactory>,
    editors: IndexMap<String, Box<dyn NodeEditor>>,
    fallback: Box<dyn NodeEditor>,
}

impl EditorRegistry {
    /// Create a registry with no custom editors
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
            editors: IndexMap::new(),
            fallback: Box::new(DefaultNodeEditor),
        }
    }

    /// Register a custom editor for a node type
    pub fn register(&mut self, type_name: impl Into<String>, factory: EditorFactory) {
        let type_name = type_name.into();
        self.editors.insert(type_name.clone(), factory());
        self.factories.insert(type_name, factory);
    }

    /// Get the editor for a node type, falling back to the default
    pub fn editor_for(&mut self, type_name: &str) -> &mut dyn NodeEditor {
        match self.editors.get_index_of(type_name) {
            Some(index) => self.editors[index].as_mut(),
            None => self.fallback.as_mut(),
        }
    }

    /// Drop every cached editor and re-instantiate from the factories.
    ///
    /// Exposed as the Tools menu debug action.
    pub fn rebuild(&mut self) {
        self.editors.clear();
        for (type_name, factory) in &self.factories {
            self.editors.insert(type_name.clone(), factory());
        }
        tracing::debug!("rebuilt {} node editors", self.editors.len());
    }

    /// Number of registered custom editors
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// Whether no custom editors are registered
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

impl Default for EditorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PropertyDescriptor;
    use crate::value::PropertyValue;
    use knotwork_editor_graph::PortType;

    struct GainNode {
        gain: f32,
    }

    impl Inspect for GainNode {
        fn properties(&self) -> Vec<PropertyDescriptor> {
            vec![PropertyDescriptor::new("gain", PropertyValue::Float(self.gain))]
        }

        fn set_property(&mut self, name: &str, value: PropertyValue) {
            match (name, value) {
                ("gain", PropertyValue::Float(v)) => self.gain = v,
                (other, _) => panic!("unknown property {other}"),
            }
        }
    }

    struct WideEditor;

    impl NodeEditor for WideEditor {
        fn width(&self) -> f32 {
            320.0
        }
    }

    #[test]
    fn test_registry_fallback_and_width() {
        let mut registry = EditorRegistry::new();
        assert!(registry.is_empty());

        registry.register("audio.gain", || Box::new(WideEditor));
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.editor_for("audio.gain").width(), 320.0);
        assert_eq!(registry.editor_for("unknown.type").width(), DEFAULT_NODE_WIDTH);
    }

    #[test]
    fn test_rebuild_reinstantiates_factories() {
        let mut registry = EditorRegistry::new();
        registry.register("audio.gain", || Box::new(WideEditor));
        registry.register("math.add", || Box::new(DefaultNodeEditor));

        registry.rebuild();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.editor_for("audio.gain").width(), 320.0);
    }

    #[test]
    fn test_port_layout_positions() {
        let node = Node::new("audio.gain", "Gain")
            .with_input(Port::input("signal", PortType::Float))
            .with_input(Port::input("amount", PortType::Float))
            .with_output(Port::output("out", PortType::Float));
        let mut owner = GainNode { gain: 1.0 };

        let mut layout = PortLayout::new();
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                layout = DefaultNodeEditor.node_ui(ui, &node, &mut owner);
            });
        });

        assert_eq!(layout.len(), 3);

        let first_input = layout[&node.inputs[0].id];
        let output = layout[&node.outputs[0].id];
        // Input handles anchor the left column, outputs the right.
        assert!(first_input.x < output.x);
        // Rows stack downward in declaration order.
        let second_input = layout[&node.inputs[1].id];
        assert!(first_input.y < second_input.y);
    }
}
