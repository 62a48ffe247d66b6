// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node inspector tooling for Knotwork Editor.
//!
//! This crate renders the per-node editing surfaces of the graph editor:
//! - The typed property panel: one editable widget per inspectable
//!   property, selected through a closed type-to-widget table, with
//!   change detection and write-back
//! - The node editor base (header, port columns, property body) and the
//!   registry of custom per-node-type editors
//! - The editor window toolbar (File/Edit/Tools menus, hover readout)
//!
//! ## Architecture
//!
//! Owners expose their editable state through the [`Inspect`] capability
//! trait as an ordered list of [`PropertyDescriptor`]s; there is no
//! runtime type introspection. Widget selection is the pure
//! [`binding::widget_for`] table, panel construction is the pure
//! [`binding::plan`] step, and egui only enters the picture when the
//! plan is drawn. Write-back goes through [`panel::commit_edit`], which
//! carries the curve reference-identity gate.

pub mod binding;
pub mod descriptor;
pub mod inspect;
pub mod node_editor;
pub mod panel;
pub mod toolbar;
pub mod value;

pub use binding::{plan, widget_for, PanelItem, WidgetKind};
pub use descriptor::PropertyDescriptor;
pub use inspect::Inspect;
pub use node_editor::{DefaultNodeEditor, EditorRegistry, NodeEditor, PortLayout};
pub use panel::{commit_edit, panel_ui, DrawResult};
pub use toolbar::{HoverInfo, Toolbar, ToolbarAction};
pub use value::{AssetPayload, AssetRef, Curve, CurveKey, EnumValue, PropertyKind, PropertyValue};
