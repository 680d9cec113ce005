use std::{fs, path::Path};

use mlua::{FromLua, IntoLua, Lua, MultiValue, Table, Value};
use tracing::debug;

use crate::{
    config::VmConfig,
    engine::build_vm,
    error::{ScriptError, ScriptResult},
    marshal::{self, Converted, Record},
    value::ScriptValue,
};

/// One isolated Lua execution context.
///
/// A `ScriptVm` owns its global namespace and invocation stack outright.
/// Dropping it releases every engine resource exactly once, on error paths
/// included — ownership is the scoped-acquisition guarantee, and a released
/// handle cannot be named again. Distinct VMs share nothing. A single VM
/// expects one logical caller at a time; share it behind a mutex if callers
/// overlap.
pub struct ScriptVm {
    lua: Lua,
}

impl ScriptVm {
    /// Create a VM with the default configuration.
    ///
    /// Fails only if the engine cannot allocate its initial state.
    pub fn new() -> ScriptResult<Self> {
        Self::with_config(&VmConfig::default())
    }

    /// Create a VM opening the standard libraries named by `config`.
    pub fn with_config(config: &VmConfig) -> ScriptResult<Self> {
        Ok(Self {
            lua: build_vm(config)?,
        })
    }

    /// Compile and immediately run `source` against this VM's globals.
    ///
    /// Top-level statements execute eagerly; functions and variables the
    /// chunk defines become global bindings. Produced values are read back
    /// afterwards through [`ScriptVm::global`], never returned here.
    pub fn exec(&self, source: &str) -> ScriptResult<()> {
        self.lua.load(source).exec()?;
        Ok(())
    }

    /// Read the file at `path` and run it exactly as [`ScriptVm::exec`] would.
    ///
    /// An unreadable path reports [`ScriptError::Io`]; the chunk is named
    /// after the path so compile and runtime errors carry its location.
    pub fn exec_file(&self, path: impl AsRef<Path>) -> ScriptResult<()> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| ScriptError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        debug!(path = %path.display(), "running script file");
        self.lua
            .load(source.as_str())
            .set_name(format!("@{}", path.display()))
            .exec()?;
        Ok(())
    }

    /// Read a global binding. Unbound names read as `Nil`, never an error.
    pub fn global(&self, name: &str) -> ScriptResult<ScriptValue> {
        let value = self.lua.globals().get::<ScriptValue>(name)?;
        Ok(value)
    }

    /// Bind or overwrite a global.
    pub fn set_global(&self, name: &str, value: ScriptValue) -> ScriptResult<()> {
        self.lua.globals().set(name, value)?;
        Ok(())
    }

    /// Call the global function `name` with `args`, expecting `n_results`
    /// values back.
    ///
    /// Arguments pass left to right. The call runs protected: an error
    /// raised inside the function (an explicit `error(...)` included) comes
    /// back as [`ScriptError::Runtime`] and the VM stays usable. A global
    /// bound to anything other than a function is [`ScriptError::NotCallable`]
    /// and leaves the VM untouched.
    ///
    /// On success the vector holds exactly `n_results` values in call order,
    /// surplus results dropped and missing ones padded with `Nil` — Lua's
    /// adjust-to-n rule. The vector is the entire result region, so popping
    /// it cannot be forgotten and push/pop counts balance by construction.
    pub fn call(
        &self,
        name: &str,
        args: Vec<ScriptValue>,
        n_results: usize,
    ) -> ScriptResult<Vec<ScriptValue>> {
        let target = self.lua.globals().get::<Value>(name)?;
        let func = match target {
            Value::Function(func) => func,
            other => {
                return Err(ScriptError::NotCallable {
                    name: name.to_string(),
                    found: other.type_name(),
                });
            }
        };

        debug!(name, n_args = args.len(), n_results, "invoking script function");
        let pushed = args
            .into_iter()
            .map(|arg| arg.into_lua(&self.lua))
            .collect::<mlua::Result<MultiValue>>()?;
        let returned = func.call::<MultiValue>(pushed)?;

        let mut results = returned
            .into_iter()
            .map(|value| ScriptValue::from_lua(value, &self.lua))
            .collect::<mlua::Result<Vec<_>>>()?;
        results.truncate(n_results);
        while results.len() < n_results {
            results.push(ScriptValue::Nil);
        }
        Ok(results)
    }

    /// Build a fresh table holding one entry per schema field of `record`,
    /// in schema order.
    pub fn record_to_table<R: Record>(&self, record: &R) -> ScriptResult<Table> {
        marshal::to_table(&self.lua, record)
    }

    /// Convert `table` back into a record, keyed by field name.
    ///
    /// Keys outside the schema are skipped silently; a value of the wrong
    /// runtime type leaves its field at the default and is reported in
    /// [`Converted::warnings`]. Conversion never aborts over a bad field.
    pub fn record_from_table<R: Record>(&self, table: &Table) -> ScriptResult<Converted<R>> {
        marshal::from_table(table)
    }
}
