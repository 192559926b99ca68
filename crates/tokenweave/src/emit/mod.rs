//! Emitters turning resolved token collections into artifact text.
//!
//! - [`stylesheet`]: theme-paired custom-property sheets
//! - [`utility`]: utility-class rules
//! - [`names`]: typed enumeration and plain name list pairs
//!
//! Emitters are pure: they take a category and return text plus the
//! identifiers they used, so name lists are built from exactly what the CSS
//! declared.

pub mod names;
pub mod stylesheet;
pub mod utility;

pub use names::{render_plain, render_typed, ExportNames, NameList};
pub use stylesheet::{emit_variable_sheet, Declaration, VariableSheet};
pub use utility::{class_name, derive_property, emit_utility_sheet, UtilityRule, UtilitySheet, UtilityTarget};
