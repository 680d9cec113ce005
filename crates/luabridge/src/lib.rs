#![warn(missing_docs)]

//! # luabridge
//!
//! A host-side bridge to an embedded Lua 5.4 runtime, built on [`mlua`].
//! The crate provides a small, consistent surface for running Lua from a
//! host application: VM lifecycle, code loading from strings or files,
//! typed access to the global namespace, a protected function-invocation
//! protocol, and schema-driven conversion between host records and Lua
//! tables.
//!
//! Every failure is an explicit [`ScriptError`] value; in-script errors are
//! contained at the protected-call boundary and never abort the host.
//!
//! ```
//! use luabridge::ScriptVm;
//!
//! # fn main() -> luabridge::ScriptResult<()> {
//! let vm = ScriptVm::new()?;
//! vm.exec("function add(x, y) return x + y end")?;
//! let results = vm.call("add", vec![10.into(), 20.into()], 1)?;
//! assert_eq!(results[0].as_number()?, 30.0);
//! # Ok(())
//! # }
//! ```

/// Construction options for new VMs.
mod config;
/// Engine construction from a configuration.
mod engine;
/// Error types and Result alias.
mod error;
/// Schema-driven record/table marshaling.
mod marshal;
/// Tagged script value and checked narrowing.
mod value;
/// The VM handle: lifecycle, loading, globals, invocation.
mod vm;

pub use config::VmConfig;
pub use error::{ScriptError, ScriptResult};
pub use marshal::{Converted, FieldKind, FieldSpec, FieldWarning, Record};
pub use value::ScriptValue;
pub use vm::ScriptVm;

// Re-export the engine for callers that need raw table or function handles.
pub use mlua;
