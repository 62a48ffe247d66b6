// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property value model - the closed set of editable types.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single keyframe on a [`Curve`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    /// Keyframe time
    pub t: f32,
    /// Keyframe value
    pub value: f32,
}

/// An editable keyframe curve with linear interpolation.
///
/// Property values hold curves behind [`Arc`] so an unedited curve keeps
/// its allocation across render passes; the panel's dirty check for
/// curves is pointer identity, not value equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    keys: Vec<CurveKey>,
}

impl Curve {
    /// Create an empty curve
    pub fn new() -> Self {
        Self::default()
    }

    /// The keyframes, sorted by time
    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Number of keyframes
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the curve has no keyframes
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Add a keyframe, keeping keys sorted by time. Returns its index.
    pub fn add_key(&mut self, t: f32, value: f32) -> usize {
        let index = self.keys.partition_point(|k| k.t < t);
        self.keys.insert(index, CurveKey { t, value });
        index
    }

    /// Builder form of [`Self::add_key`]
    pub fn with_key(mut self, t: f32, value: f32) -> Self {
        self.add_key(t, value);
        self
    }

    /// Move an existing keyframe to a new time/value. Returns its new index.
    pub fn move_key(&mut self, index: usize, t: f32, value: f32) -> usize {
        self.keys.remove(index);
        self.add_key(t, value)
    }

    /// Evaluate the curve at `t`.
    ///
    /// Empty curves evaluate to 0.0; outside the key range the curve is
    /// clamped to the first/last key value.
    pub fn evaluate(&self, t: f32) -> f32 {
        let keys = self.keys.as_slice();
        match keys {
            [] => 0.0,
            [only] => only.value,
            _ => {
                if t <= keys[0].t {
                    return keys[0].value;
                }
                let last = keys[keys.len() - 1];
                if t >= last.t {
                    return last.value;
                }
                let after = keys.partition_point(|k| k.t <= t);
                let (a, b) = (keys[after - 1], keys[after]);
                let span = b.t - a.t;
                if span <= f32::EPSILON {
                    return a.value;
                }
                let f = (t - a.t) / span;
                a.value + (b.value - a.value) * f
            }
        }
    }
}

/// An enumeration value: selected index into a static variant list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    /// Index of the selected variant
    pub index: usize,
    /// Variant display names, in declaration order
    pub variants: &'static [&'static str],
}

impl EnumValue {
    /// Create an enum value
    pub fn new(index: usize, variants: &'static [&'static str]) -> Self {
        Self { index, variants }
    }

    /// Display name of the selected variant
    pub fn selected(&self) -> &'static str {
        self.variants.get(self.index).copied().unwrap_or("")
    }
}

/// A reference to a host asset, filtered by asset kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Asset kind this reference accepts (e.g. `"texture"`, `"mesh"`)
    pub kind: &'static str,
    /// Referenced asset path, if any
    pub path: Option<String>,
}

impl AssetRef {
    /// An unset reference
    pub fn none(kind: &'static str) -> Self {
        Self { kind, path: None }
    }

    /// A reference to a specific asset
    pub fn to(kind: &'static str, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: Some(path.into()),
        }
    }

    /// Whether a dragged payload is assignable to this reference
    pub fn accepts(&self, payload: &AssetPayload) -> bool {
        payload.kind == self.kind
    }
}

/// Drag-and-drop payload carried by asset fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPayload {
    /// Asset kind of the dragged asset
    pub kind: String,
    /// Path of the dragged asset
    pub path: String,
}

/// Declared type of a property, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Integer
    Int,
    /// Boolean
    Bool,
    /// Enumeration
    Enum,
    /// Text
    Text,
    /// 2D rectangle (x, y, w, h)
    Rect,
    /// Floating point
    Float,
    /// 2-vector
    Vec2,
    /// 3-vector
    Vec3,
    /// 4-vector
    Vec4,
    /// Color (RGBA)
    Color,
    /// Animation curve
    Curve,
    /// Host asset reference
    Asset,
    /// Declared but unsupported type
    Opaque,
}

/// Current value of a property.
///
/// The set is closed: every supported declared type has exactly one
/// variant. Types outside the set are declared as [`Self::Opaque`] and
/// render nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Integer
    Int(i32),
    /// Boolean
    Bool(bool),
    /// Enumeration
    Enum(EnumValue),
    /// Text; `None` renders as an empty string
    Text(Option<String>),
    /// 2D rectangle (x, y, w, h)
    Rect([f32; 4]),
    /// Floating point
    Float(f32),
    /// 2-vector
    Vec2([f32; 2]),
    /// 3-vector
    Vec3([f32; 3]),
    /// 4-vector
    Vec4([f32; 4]),
    /// Color (RGBA, unmultiplied)
    Color([f32; 4]),
    /// Animation curve; `None` renders as an empty curve
    Curve(Option<Arc<Curve>>),
    /// Host asset reference
    Asset(AssetRef),
    /// Unsupported type, named for diagnostics; never rendered
    Opaque(&'static str),
}

impl PropertyValue {
    /// The declared type of this value
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Int(_) => PropertyKind::Int,
            Self::Bool(_) => PropertyKind::Bool,
            Self::Enum(_) => PropertyKind::Enum,
            Self::Text(_) => PropertyKind::Text,
            Self::Rect(_) => PropertyKind::Rect,
            Self::Float(_) => PropertyKind::Float,
            Self::Vec2(_) => PropertyKind::Vec2,
            Self::Vec3(_) => PropertyKind::Vec3,
            Self::Vec4(_) => PropertyKind::Vec4,
            Self::Color(_) => PropertyKind::Color,
            Self::Curve(_) => PropertyKind::Curve,
            Self::Asset(_) => PropertyKind::Asset,
            Self::Opaque(_) => PropertyKind::Opaque,
        }
    }
}

/// Whether two curve slots hold the same curve instance.
///
/// This is the coarse dirty check for curve fields: pointer identity,
/// not value equality. Two value-identical curves in distinct
/// allocations compare as different instances.
pub fn same_curve_instance(a: &Option<Arc<Curve>>, b: &Option<Arc<Curve>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
