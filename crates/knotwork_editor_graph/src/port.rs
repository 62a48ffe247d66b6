// SPDX-License-Identifier: MIT OR Apache-2.0
//! Port definitions for node inputs/outputs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortId(pub Uuid);

impl PortId {
    /// Create a new random port ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PortId {
    fn default() -> Self {
        Self::new()
    }
}

/// Port direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortDirection {
    /// Input port
    Input,
    /// Output port
    Output,
}

/// Data type that flows through a port
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PortType {
    /// Boolean value
    Bool,
    /// Integer value
    Int,
    /// Floating point value
    Float,
    /// 2D vector
    Vector2,
    /// 3D vector
    Vector3,
    /// 4D vector
    Vector4,
    /// Color (RGBA)
    Color,
    /// Text value
    Text,
    /// Animation curve
    Curve,
    /// Host asset reference
    Asset,
    /// Any type (for generic nodes)
    Any,
    /// Custom type
    Custom(String),
}

impl PortType {
    /// Get the handle color for this port type (for UI)
    pub fn color(&self) -> [u8; 3] {
        match self {
            Self::Bool => [200, 80, 80],
            Self::Int => [80, 200, 200],
            Self::Float => [80, 200, 80],
            Self::Vector2 => [200, 200, 80],
            Self::Vector3 => [200, 150, 80],
            Self::Vector4 => [200, 100, 200],
            Self::Color => [255, 200, 100],
            Self::Text => [200, 180, 150],
            Self::Curve => [150, 100, 200],
            Self::Asset => [100, 150, 200],
            Self::Any => [150, 150, 150],
            Self::Custom(_) => [128, 128, 128],
        }
    }
}

/// A port on a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    /// Unique port ID
    pub id: PortId,
    /// Port name
    pub name: String,
    /// Port direction
    pub direction: PortDirection,
    /// Data type
    pub port_type: PortType,
}

impl Port {
    /// Create a new input port
    pub fn input(name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            id: PortId::new(),
            name: name.into(),
            direction: PortDirection::Input,
            port_type,
        }
    }

    /// Create a new output port
    pub fn output(name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            id: PortId::new(),
            name: name.into(),
            direction: PortDirection::Output,
            port_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_constructors() {
        let input = Port::input("value", PortType::Float);
        assert_eq!(input.direction, PortDirection::Input);
        assert_eq!(input.name, "value");

        let output = Port::output("result", PortType::Bool);
        assert_eq!(output.direction, PortDirection::Output);
        assert_ne!(input.id, output.id);
    }

    #[test]
    fn test_port_type_colors() {
        // Handle colors distinguish the common scalar types
        assert_ne!(PortType::Int.color(), PortType::Float.color());
        assert_ne!(PortType::Bool.color(), PortType::Text.color());
    }
}
