// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property panel rendering - one widget per planned property, with
//! change detection and write-back to the owner.

use crate::binding::{plan, PanelItem, WidgetKind};
use crate::inspect::Inspect;
use crate::value::{same_curve_instance, AssetPayload, AssetRef, Curve, EnumValue, PropertyValue};
use egui::{vec2, Color32, Sense, Stroke, Ui};
use std::sync::Arc;

const TEXT_FIELD_WIDTH: f32 = 150.0;
const ASSET_FIELD_WIDTH: f32 = 120.0;
const CURVE_FIELD_WIDTH: f32 = 120.0;
const CURVE_FIELD_HEIGHT: f32 = 24.0;
const CURVE_KEY_GRAB_RADIUS: f32 = 8.0;

/// Result of drawing a property control - indicates if the value was
/// changed during this pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawResult {
    /// Value was not modified
    Unchanged,
    /// Value was modified, needs to be applied
    Changed,
}

impl DrawResult {
    /// Whether the value needs to be applied
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Render the property panel for an owner and apply any edits.
///
/// Properties are recomputed from the owner every pass, planned through
/// the widget table, drawn in declaration order, and written back when
/// their control reports a change. See [`commit_edit`] for the
/// write-back rules.
pub fn panel_ui(ui: &mut Ui, owner: &mut dyn Inspect) {
    let properties = owner.properties();
    for item in plan(&properties) {
        match item {
            PanelItem::Header(text) => {
                ui.label(egui::RichText::new(text).strong());
            }
            PanelItem::Control { property, widget } => {
                let descriptor = &properties[property];
                let label = descriptor.pretty_name();
                let mut value = descriptor.value.clone();
                if draw_widget(ui, widget, &label, &mut value).is_changed() {
                    commit_edit(owner, &descriptor.value, &descriptor.name, value);
                }
            }
        }
    }
    ui.add_space(4.0);
}

/// Write an edited value back to the owner.
///
/// Non-curve values are written unconditionally once the control
/// reported a change. Curve values are additionally gated on instance
/// identity: a returned curve that is the same allocation as the input
/// is not written, so an unedited pass never writes and a value-equal
/// rebuild in a fresh allocation still does.
pub fn commit_edit(owner: &mut dyn Inspect, before: &PropertyValue, name: &str, after: PropertyValue) {
    if let (PropertyValue::Curve(old), PropertyValue::Curve(new)) = (before, &after) {
        if same_curve_instance(old, new) {
            return;
        }
    }
    tracing::trace!(property = name, "writing edited property");
    owner.set_property(name, after);
}

fn draw_widget(ui: &mut Ui, widget: WidgetKind, label: &str, value: &mut PropertyValue) -> DrawResult {
    match (widget, value) {
        (WidgetKind::IntField, PropertyValue::Int(v)) => draw_int(ui, label, v),
        (WidgetKind::Toggle, PropertyValue::Bool(v)) => draw_toggle(ui, label, v),
        (WidgetKind::EnumDropdown, PropertyValue::Enum(v)) => draw_enum(ui, label, v),
        (WidgetKind::TextField, PropertyValue::Text(v)) => draw_text(ui, label, v),
        (WidgetKind::TextArea, PropertyValue::Text(v)) => draw_text_area(ui, v),
        (WidgetKind::RectField, PropertyValue::Rect(v)) => draw_rect(ui, label, v),
        (WidgetKind::FloatField, PropertyValue::Float(v)) => draw_float(ui, label, v),
        (WidgetKind::Vec2Field, PropertyValue::Vec2(v)) => draw_vec2(ui, label, v),
        (WidgetKind::Vec3Field, PropertyValue::Vec3(v)) => draw_vec3(ui, label, v),
        (WidgetKind::Vec4Field, PropertyValue::Vec4(v)) => draw_vec4(ui, label, v),
        (WidgetKind::ColorField, PropertyValue::Color(v)) => draw_color(ui, label, v),
        (WidgetKind::CurveField, PropertyValue::Curve(v)) => draw_curve(ui, label, v),
        (WidgetKind::AssetField, PropertyValue::Asset(v)) => draw_asset(ui, label, v),
        _ => unreachable!("widget kind does not match property value"),
    }
}

/// Draw an integer stepper
pub fn draw_int(ui: &mut Ui, label: &str, value: &mut i32) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        ui.label(label);
        if ui.add(egui::DragValue::new(value).speed(1.0)).changed() {
            result = DrawResult::Changed;
        }
    });

    result
}

/// Draw a float field
pub fn draw_float(ui: &mut Ui, label: &str, value: &mut f32) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        ui.label(label);
        if ui.add(egui::DragValue::new(value).speed(0.1)).changed() {
            result = DrawResult::Changed;
        }
    });

    result
}

/// Draw a boolean toggle
pub fn draw_toggle(ui: &mut Ui, label: &str, value: &mut bool) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        if ui.add(egui::Checkbox::new(value, label)).changed() {
            result = DrawResult::Changed;
        }
    });

    result
}

/// Draw an enum dropdown
pub fn draw_enum(ui: &mut Ui, label: &str, value: &mut EnumValue) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        ui.label(label);

        egui::ComboBox::from_id_salt(label)
            .selected_text(value.selected())
            .show_ui(ui, |ui| {
                for (index, name) in value.variants.iter().enumerate() {
                    if ui.selectable_label(value.index == index, *name).clicked() {
                        value.index = index;
                        result = DrawResult::Changed;
                    }
                }
            });
    });

    result
}

/// Draw a single-line text field. An absent value renders as empty.
pub fn draw_text(ui: &mut Ui, label: &str, value: &mut Option<String>) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        ui.label(label);

        let mut buffer = value.clone().unwrap_or_default();
        let response = ui.add(egui::TextEdit::singleline(&mut buffer).desired_width(TEXT_FIELD_WIDTH));
        if response.changed() {
            *value = Some(buffer);
            result = DrawResult::Changed;
        }
    });

    result
}

/// Draw a multi-line text area, without a field label. An absent value
/// renders as empty.
pub fn draw_text_area(ui: &mut Ui, value: &mut Option<String>) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    let mut buffer = value.clone().unwrap_or_default();
    let response = ui.add(
        egui::TextEdit::multiline(&mut buffer)
            .desired_width(f32::INFINITY)
            .desired_rows(3),
    );
    if response.changed() {
        *value = Some(buffer);
        result = DrawResult::Changed;
    }

    result
}

fn draw_components(ui: &mut Ui, label: &str, values: &mut [f32], prefixes: &[&str]) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        ui.label(label);

        for (value, prefix) in values.iter_mut().zip(prefixes) {
            let drag = egui::DragValue::new(value)
                .speed(0.1)
                .prefix(format!("{prefix}: "));
            if ui.add(drag).changed() {
                result = DrawResult::Changed;
            }
        }
    });

    result
}

/// Draw a rectangle field (x, y, w, h)
pub fn draw_rect(ui: &mut Ui, label: &str, value: &mut [f32; 4]) -> DrawResult {
    draw_components(ui, label, value, &["X", "Y", "W", "H"])
}

/// Draw a 2-component vector field
pub fn draw_vec2(ui: &mut Ui, label: &str, value: &mut [f32; 2]) -> DrawResult {
    draw_components(ui, label, value, &["X", "Y"])
}

/// Draw a 3-component vector field
pub fn draw_vec3(ui: &mut Ui, label: &str, value: &mut [f32; 3]) -> DrawResult {
    draw_components(ui, label, value, &["X", "Y", "Z"])
}

/// Draw a 4-component vector field
pub fn draw_vec4(ui: &mut Ui, label: &str, value: &mut [f32; 4]) -> DrawResult {
    draw_components(ui, label, value, &["X", "Y", "Z", "W"])
}

/// Draw a color field (RGBA, unmultiplied)
pub fn draw_color(ui: &mut Ui, label: &str, value: &mut [f32; 4]) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        ui.label(label);
        if ui.color_edit_button_rgba_unmultiplied(value).changed() {
            result = DrawResult::Changed;
        }
    });

    result
}

/// Draw a curve field. An absent value renders as an empty curve.
///
/// Clicking the strip inserts a keyframe at the pointer, dragging moves
/// the nearest keyframe (or starts one on empty ground). Any edit
/// produces the curve in a fresh allocation; an unedited pass returns
/// the original instance untouched.
pub fn draw_curve(ui: &mut Ui, label: &str, value: &mut Option<Arc<Curve>>) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        ui.label(label);

        let (rect, response) =
            ui.allocate_exact_size(vec2(CURVE_FIELD_WIDTH, CURVE_FIELD_HEIGHT), Sense::click_and_drag());
        let painter = ui.painter().with_clip_rect(rect);
        painter.rect_filled(rect, 2.0, Color32::from_gray(25));

        let empty = Curve::new();
        let curve = value.as_deref().unwrap_or(&empty);
        let (t_min, t_max, v_min, v_max) = view_bounds(curve);

        let to_screen = |t: f32, v: f32| {
            egui::pos2(
                rect.left() + (t - t_min) / (t_max - t_min) * rect.width(),
                rect.bottom() - (v - v_min) / (v_max - v_min) * rect.height(),
            )
        };

        if !curve.is_empty() {
            let segments = 32;
            let mut previous = None;
            for i in 0..=segments {
                let t = t_min + (t_max - t_min) * i as f32 / segments as f32;
                let point = to_screen(t, curve.evaluate(t));
                if let Some(previous) = previous {
                    painter.line_segment([previous, point], Stroke::new(1.5, Color32::from_rgb(150, 220, 120)));
                }
                previous = Some(point);
            }
            for key in curve.keys() {
                painter.circle_filled(to_screen(key.t, key.value), 2.5, Color32::WHITE);
            }
        }
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, Color32::from_gray(60)));

        let pointer = if response.dragged() || response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };
        if let Some(pos) = pointer {
            let t = t_min + (pos.x - rect.left()) / rect.width() * (t_max - t_min);
            let v = v_min + (rect.bottom() - pos.y) / rect.height() * (v_max - v_min);

            let grabbed = curve
                .keys()
                .iter()
                .enumerate()
                .map(|(index, key)| (index, to_screen(key.t, key.value).distance(pos)))
                .filter(|(_, distance)| *distance < CURVE_KEY_GRAB_RADIUS)
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(index, _)| index);

            let mut edited = curve.clone();
            match grabbed {
                Some(index) if response.dragged() => {
                    edited.move_key(index, t, v);
                }
                Some(_) => {
                    // Clicking an existing key leaves the curve alone.
                    return;
                }
                None => {
                    edited.add_key(t, v);
                }
            }
            *value = Some(Arc::new(edited));
            result = DrawResult::Changed;
        }
    });

    result
}

fn view_bounds(curve: &Curve) -> (f32, f32, f32, f32) {
    if curve.is_empty() {
        return (0.0, 1.0, 0.0, 1.0);
    }

    let mut t_min = f32::MAX;
    let mut t_max = f32::MIN;
    let mut v_min = f32::MAX;
    let mut v_max = f32::MIN;
    for key in curve.keys() {
        t_min = t_min.min(key.t);
        t_max = t_max.max(key.t);
        v_min = v_min.min(key.value);
        v_max = v_max.max(key.value);
    }

    // Pad degenerate ranges so the screen mapping stays finite
    if t_max - t_min < 1e-3 {
        t_min -= 0.5;
        t_max += 0.5;
    }
    if v_max - v_min < 1e-3 {
        v_min -= 0.5;
        v_max += 0.5;
    }
    (t_min, t_max, v_min, v_max)
}

/// Draw an asset reference picker.
///
/// Displays the referenced asset path (or `None`), accepts drag-and-drop
/// of an [`AssetPayload`] with a matching asset kind, and offers a clear
/// button while set.
pub fn draw_asset(ui: &mut Ui, label: &str, value: &mut AssetRef) -> DrawResult {
    let mut result = DrawResult::Unchanged;

    ui.horizontal(|ui| {
        ui.label(label);

        let text = value.path.as_deref().unwrap_or("None");
        let response = ui.add(egui::Button::new(text).min_size(vec2(ASSET_FIELD_WIDTH, 0.0)));

        // Highlight while a compatible asset hovers the field
        if let Some(payload) = response.dnd_hover_payload::<AssetPayload>() {
            if value.accepts(&payload) {
                ui.painter().rect_stroke(
                    response.rect,
                    2.0,
                    Stroke::new(1.5, Color32::from_rgb(100, 150, 255)),
                );
            }
        }
        if let Some(payload) = response.dnd_release_payload::<AssetPayload>() {
            if value.accepts(&payload) {
                value.path = Some(payload.path.clone());
                result = DrawResult::Changed;
            }
        }

        if value.path.is_some() && ui.small_button("X").clicked() {
            value.path = None;
            result = DrawResult::Changed;
        }
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PropertyDescriptor;

    /// Owner that records every write-back it receives
    #[derive(Default)]
    struct Recorder {
        properties: Vec<PropertyDescriptor>,
        writes: Vec<(String, PropertyValue)>,
    }

    impl Inspect for Recorder {
        fn properties(&self) -> Vec<PropertyDescriptor> {
            self.properties.clone()
        }

        fn set_property(&mut self, name: &str, value: PropertyValue) {
            self.writes.push((name.to_string(), value));
        }
    }

    struct CounterNode {
        name: Option<String>,
        count: i32,
        enabled: bool,
    }

    impl Inspect for CounterNode {
        fn properties(&self) -> Vec<PropertyDescriptor> {
            vec![
                PropertyDescriptor::new("name", PropertyValue::Text(self.name.clone())),
                PropertyDescriptor::new("count", PropertyValue::Int(self.count)),
                PropertyDescriptor::new("enabled", PropertyValue::Bool(self.enabled)),
            ]
        }

        fn set_property(&mut self, name: &str, value: PropertyValue) {
            match (name, value) {
                ("name", PropertyValue::Text(v)) => self.name = v,
                ("count", PropertyValue::Int(v)) => self.count = v,
                ("enabled", PropertyValue::Bool(v)) => self.enabled = v,
                (other, _) => panic!("unknown property {other}"),
            }
        }
    }

    #[test]
    fn test_counter_node_plan_skips_reserved_name() {
        let node = CounterNode {
            name: Some("Spawner".to_string()),
            count: 3,
            enabled: false,
        };
        let items = plan(&node.properties());

        assert_eq!(
            items,
            vec![
                PanelItem::Control {
                    property: 1,
                    widget: WidgetKind::IntField
                },
                PanelItem::Control {
                    property: 2,
                    widget: WidgetKind::Toggle
                },
            ]
        );
    }

    #[test]
    fn test_edit_writes_only_the_edited_property() {
        let mut node = CounterNode {
            name: None,
            count: 3,
            enabled: false,
        };
        let before = node.properties();

        commit_edit(&mut node, &before[1].value, "count", PropertyValue::Int(5));

        assert_eq!(node.count, 5);
        assert!(!node.enabled);
        assert_eq!(node.name, None);
    }

    #[test]
    fn test_non_curve_write_is_unconditional() {
        let mut recorder = Recorder::default();

        // Change detection already fired; even an equal value is written.
        commit_edit(&mut recorder, &PropertyValue::Int(3), "count", PropertyValue::Int(3));
        assert_eq!(recorder.writes.len(), 1);
    }

    #[test]
    fn test_curve_same_instance_is_not_written() {
        let mut recorder = Recorder::default();
        let curve = Arc::new(Curve::new().with_key(0.0, 1.0));
        let before = PropertyValue::Curve(Some(Arc::clone(&curve)));

        commit_edit(&mut recorder, &before, "fade", PropertyValue::Curve(Some(curve)));
        assert!(recorder.writes.is_empty());
    }

    #[test]
    fn test_curve_fresh_instance_is_written() {
        let mut recorder = Recorder::default();
        let before = PropertyValue::Curve(Some(Arc::new(Curve::new().with_key(0.0, 1.0))));
        let rebuilt = PropertyValue::Curve(Some(Arc::new(Curve::new().with_key(0.0, 1.0))));

        // Value-identical, distinct allocation: still written.
        commit_edit(&mut recorder, &before, "fade", rebuilt);
        assert_eq!(recorder.writes.len(), 1);
    }

    #[test]
    fn test_absent_curve_without_edit_stays_unset() {
        let mut recorder = Recorder::default();

        // The widget substituted an empty display curve but the user did
        // not edit; the slot stays None and nothing is written.
        commit_edit(
            &mut recorder,
            &PropertyValue::Curve(None),
            "fade",
            PropertyValue::Curve(None),
        );
        assert!(recorder.writes.is_empty());
    }

    fn all_kind_descriptors() -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::new("count", PropertyValue::Int(3)),
            PropertyDescriptor::new("enabled", PropertyValue::Bool(true)),
            PropertyDescriptor::new(
                "mode",
                PropertyValue::Enum(EnumValue::new(0, &["Linear", "Smooth"])),
            ),
            PropertyDescriptor::new("title", PropertyValue::Text(None)),
            PropertyDescriptor::new("notes", PropertyValue::Text(None)).multiline(),
            PropertyDescriptor::new("bounds", PropertyValue::Rect([0.0, 0.0, 10.0, 10.0])),
            PropertyDescriptor::new("weight", PropertyValue::Float(1.0)),
            PropertyDescriptor::new("offset", PropertyValue::Vec2([0.0, 0.0])),
            PropertyDescriptor::new("direction", PropertyValue::Vec3([0.0, 1.0, 0.0])),
            PropertyDescriptor::new("tint_weights", PropertyValue::Vec4([1.0; 4])),
            PropertyDescriptor::new("tint", PropertyValue::Color([1.0, 0.5, 0.0, 1.0])),
            PropertyDescriptor::new("fade_in", PropertyValue::Curve(None)),
            PropertyDescriptor::new(
                "fade_out",
                PropertyValue::Curve(Some(Arc::new(Curve::new().with_key(0.0, 1.0).with_key(1.0, 0.0)))),
            ),
            PropertyDescriptor::new("texture", PropertyValue::Asset(AssetRef::none("texture")))
                .with_header("Appearance"),
            PropertyDescriptor::new("matrix", PropertyValue::Opaque("Matrix4")),
        ]
    }

    #[test]
    fn test_panel_pass_without_input_writes_nothing() {
        let mut recorder = Recorder {
            properties: all_kind_descriptors(),
            writes: Vec::new(),
        };

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                panel_ui(ui, &mut recorder);
            });
        });

        assert!(recorder.writes.is_empty());
    }

    #[test]
    fn test_panel_pass_handles_absent_text_and_curve() {
        // Must not panic on null-ish current values.
        let mut recorder = Recorder {
            properties: vec![
                PropertyDescriptor::new("notes", PropertyValue::Text(None)).multiline(),
                PropertyDescriptor::new("fade", PropertyValue::Curve(None)),
            ],
            writes: Vec::new(),
        };

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                panel_ui(ui, &mut recorder);
            });
        });

        assert!(recorder.writes.is_empty());
    }
}
