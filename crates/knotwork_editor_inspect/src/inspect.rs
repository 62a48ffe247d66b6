// SPDX-License-Identifier: MIT OR Apache-2.0
//! The capability trait owners implement to be editable in the panel.

use crate::descriptor::PropertyDescriptor;
use crate::value::PropertyValue;

/// Exposes an owner's editable state to the property panel.
///
/// Implementations enumerate their properties in declaration order and
/// apply write-backs by name. The panel recomputes the property list on
/// every render pass; nothing is cached between passes.
///
/// `set_property` is only ever called with a name and value kind taken
/// from the same owner's `properties()` list earlier in the same render
/// pass. Receiving an unknown name or a mismatched value kind is a
/// programming error in the caller; implementations are free to panic.
pub trait Inspect {
    /// The ordered list of inspectable properties with current values
    fn properties(&self) -> Vec<PropertyDescriptor>;

    /// Write a new value for the named property
    fn set_property(&mut self, name: &str, value: PropertyValue);
}
