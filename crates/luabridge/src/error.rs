use thiserror::Error;

/// Result type for bridge operations.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur while loading or running Lua code.
///
/// Every failure surfaces as a value; the bridge never aborts the host. The
/// one class a host may reasonably treat as fatal is [`ScriptError::Memory`].
#[derive(Debug, Clone, Error)]
pub enum ScriptError {
    /// The source text failed to parse or compile.
    #[error("compile error: {message}")]
    Compile {
        /// Engine-reported failure, with chunk name and line when available.
        message: String,
    },

    /// A script file could not be read.
    #[error("cannot read script file '{path}': {message}")]
    Io {
        /// The path the caller supplied.
        path: String,
        /// Underlying I/O failure.
        message: String,
    },

    /// Loaded code or an invoked function raised during execution.
    ///
    /// Captured at the protected-call boundary; the VM that raised it
    /// remains usable.
    #[error("runtime error: {message}")]
    Runtime {
        /// Engine-reported failure, including `error(...)` payloads.
        message: String,
    },

    /// A value did not have the dynamic type the caller asked for.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Lua type name the caller requested.
        expected: &'static str,
        /// Lua type name actually present.
        found: &'static str,
    },

    /// An invocation target resolved to something other than a function.
    #[error("'{name}' is not callable (found {found})")]
    NotCallable {
        /// The global name that was resolved.
        name: String,
        /// Lua type name of the resolved value.
        found: &'static str,
    },

    /// The engine could not allocate memory.
    #[error("out of memory: {message}")]
    Memory {
        /// Engine-reported allocation failure.
        message: String,
    },
}

impl From<mlua::Error> for ScriptError {
    fn from(err: mlua::Error) -> Self {
        match err {
            mlua::Error::SyntaxError { message, .. } => ScriptError::Compile { message },
            mlua::Error::RuntimeError(message) => ScriptError::Runtime { message },
            mlua::Error::MemoryError(message) => ScriptError::Memory { message },
            other => ScriptError::Runtime {
                message: other.to_string(),
            },
        }
    }
}
