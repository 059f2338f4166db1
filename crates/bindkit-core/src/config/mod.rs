// Bindkit Config API
// Directive-file loading for key and mouse bindings

pub mod directive;
pub mod loader;

pub use directive::{split_directive, Directive};
pub use loader::{BindingConfig, ConfigError};
