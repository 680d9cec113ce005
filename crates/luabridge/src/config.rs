use mlua::StdLib;

/// Construction options for a [`ScriptVm`][crate::ScriptVm].
#[derive(Debug, Clone, Copy)]
pub struct VmConfig {
    /// Lua standard libraries opened in the new VM.
    pub stdlib: StdLib,
}

impl VmConfig {
    /// Default configuration: every library the engine considers safe.
    pub fn new() -> Self {
        Self {
            stdlib: StdLib::ALL_SAFE,
        }
    }

    /// Replace the set of standard libraries to open.
    pub fn with_stdlib(mut self, stdlib: StdLib) -> Self {
        self.stdlib = stdlib;
        self
    }
}

impl Default for VmConfig {
    fn default() -> Self {
        Self::new()
    }
}
