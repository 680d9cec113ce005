use mlua::{Lua, LuaOptions};

use crate::{config::VmConfig, error::ScriptResult};

/// The single place a raw `mlua::Lua` is constructed.
pub(crate) fn build_vm(config: &VmConfig) -> ScriptResult<Lua> {
    let lua = Lua::new_with(config.stdlib, LuaOptions::default())?;
    Ok(lua)
}
