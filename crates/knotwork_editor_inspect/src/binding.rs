// SPDX-License-Identifier: MIT OR Apache-2.0
//! Widget binding - the closed type-to-widget table and panel planning.

use crate::descriptor::PropertyDescriptor;
use crate::value::PropertyKind;

/// The widget used to edit one property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Integer stepper
    IntField,
    /// Boolean toggle
    Toggle,
    /// Enum dropdown
    EnumDropdown,
    /// Single-line text field
    TextField,
    /// Multi-line text area
    TextArea,
    /// Rectangle field (x, y, w, h)
    RectField,
    /// Float field
    FloatField,
    /// 2-component vector field
    Vec2Field,
    /// 3-component vector field
    Vec3Field,
    /// 4-component vector field
    Vec4Field,
    /// Color field
    ColorField,
    /// Curve field
    CurveField,
    /// Asset reference picker
    AssetField,
}

/// Select the widget for a declared type.
///
/// Exactly one widget is selected per supported type; `Opaque` selects
/// none and the property is silently skipped. The `multiline` flag only
/// affects text properties.
pub fn widget_for(kind: PropertyKind, multiline: bool) -> Option<WidgetKind> {
    match kind {
        PropertyKind::Int => Some(WidgetKind::IntField),
        PropertyKind::Bool => Some(WidgetKind::Toggle),
        PropertyKind::Enum => Some(WidgetKind::EnumDropdown),
        PropertyKind::Text if multiline => Some(WidgetKind::TextArea),
        PropertyKind::Text => Some(WidgetKind::TextField),
        PropertyKind::Rect => Some(WidgetKind::RectField),
        PropertyKind::Float => Some(WidgetKind::FloatField),
        PropertyKind::Vec2 => Some(WidgetKind::Vec2Field),
        PropertyKind::Vec3 => Some(WidgetKind::Vec3Field),
        PropertyKind::Vec4 => Some(WidgetKind::Vec4Field),
        PropertyKind::Color => Some(WidgetKind::ColorField),
        PropertyKind::Curve => Some(WidgetKind::CurveField),
        PropertyKind::Asset => Some(WidgetKind::AssetField),
        PropertyKind::Opaque => None,
    }
}

/// Whether a property name is reserved for its declared type.
///
/// Reserved properties are rendered elsewhere by the editor window and
/// never appear in the panel: the node's display name, its canvas
/// position, and its back-reference to the containing graph. The
/// reservation only applies to the matching declared type; `name` as an
/// integer is an ordinary property.
pub fn is_reserved(name: &str, kind: PropertyKind) -> bool {
    matches!(
        (name, kind),
        ("name", PropertyKind::Text)
            | ("position", PropertyKind::Rect)
            | ("graph", PropertyKind::Asset)
    )
}

/// One entry in a planned panel, in render order
#[derive(Debug, Clone, PartialEq)]
pub enum PanelItem {
    /// A non-interactive section header label
    Header(String),
    /// An editable control
    Control {
        /// Index into the property list the plan was built from
        property: usize,
        /// The widget to draw
        widget: WidgetKind,
    },
}

/// Plan the panel for a property list.
///
/// Walks the properties in order, applying exclusion rules and the
/// widget table. Excluded and reserved properties emit nothing. A
/// property with a header tag emits its header before the control; the
/// header is emitted even when the property's type is unsupported and
/// no control follows.
pub fn plan(properties: &[PropertyDescriptor]) -> Vec<PanelItem> {
    let mut items = Vec::new();
    for (index, descriptor) in properties.iter().enumerate() {
        if descriptor.excluded {
            continue;
        }
        let kind = descriptor.value.kind();
        if is_reserved(&descriptor.name, kind) {
            continue;
        }
        if let Some(text) = &descriptor.header {
            items.push(PanelItem::Header(text.clone()));
        }
        if let Some(widget) = widget_for(kind, descriptor.multiline) {
            items.push(PanelItem::Control {
                property: index,
                widget,
            });
        }
    }
    items
}
