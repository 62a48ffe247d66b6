// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node graph model for Knotwork Editor.
//!
//! This crate provides the data model the editor surfaces operate on:
//! - Nodes with typed input/output ports
//! - The graph container with stable insertion order
//! - RON persistence helpers
//!
//! Wire/connection management and graph evaluation are deliberately not
//! part of this crate; the editor surfaces only need node and port
//! identity, ordering, and positions.

pub mod graph;
pub mod node;
pub mod port;

pub use graph::{Graph, GraphFormatError};
pub use node::{Node, NodeId};
pub use port::{Port, PortDirection, PortId, PortType};
