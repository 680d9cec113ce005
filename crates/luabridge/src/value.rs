use mlua::{FromLua, Function, IntoLua, Lua, Table, Value};

use crate::error::{ScriptError, ScriptResult};

/// A Lua value as seen by the host.
///
/// Everything crossing the bridge is represented here. `Table` and
/// `Function` hold live handles into their owning VM; runtime values the
/// bridge has no use for (threads, userdata) surface as `Nil`. Lua integers
/// widen to `Number` on the way out — exact for the usual 53-bit range.
#[derive(Debug, Clone)]
pub enum ScriptValue {
    /// The absent value; also what unbound globals read as.
    Nil,
    /// A Lua boolean.
    Boolean(bool),
    /// A Lua number, integer or float.
    Number(f64),
    /// A Lua string, copied into the host.
    String(String),
    /// Handle to a table living in its VM.
    Table(Table),
    /// Handle to a callable living in its VM.
    Function(Function),
}

impl ScriptValue {
    /// The runtime type name, as Lua itself would report it.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Nil => "nil",
            ScriptValue::Boolean(_) => "boolean",
            ScriptValue::Number(_) => "number",
            ScriptValue::String(_) => "string",
            ScriptValue::Table(_) => "table",
            ScriptValue::Function(_) => "function",
        }
    }

    /// True for [`ScriptValue::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, ScriptValue::Nil)
    }

    /// Narrow to a boolean, or report which type was found instead.
    pub fn as_boolean(&self) -> ScriptResult<bool> {
        match self {
            ScriptValue::Boolean(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Narrow to a number, or report which type was found instead.
    pub fn as_number(&self) -> ScriptResult<f64> {
        match self {
            ScriptValue::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    /// Narrow to a string slice, or report which type was found instead.
    pub fn as_str(&self) -> ScriptResult<&str> {
        match self {
            ScriptValue::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// Narrow to a table handle, or report which type was found instead.
    pub fn as_table(&self) -> ScriptResult<&Table> {
        match self {
            ScriptValue::Table(t) => Ok(t),
            other => Err(other.mismatch("table")),
        }
    }

    /// Narrow to a function handle, or report which type was found instead.
    pub fn as_function(&self) -> ScriptResult<&Function> {
        match self {
            ScriptValue::Function(f) => Ok(f),
            other => Err(other.mismatch("function")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> ScriptError {
        ScriptError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(b: bool) -> Self {
        ScriptValue::Boolean(b)
    }
}

impl From<f64> for ScriptValue {
    fn from(n: f64) -> Self {
        ScriptValue::Number(n)
    }
}

impl From<i64> for ScriptValue {
    fn from(n: i64) -> Self {
        ScriptValue::Number(n as f64)
    }
}

impl From<&str> for ScriptValue {
    fn from(s: &str) -> Self {
        ScriptValue::String(s.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(s: String) -> Self {
        ScriptValue::String(s)
    }
}

impl IntoLua for ScriptValue {
    fn into_lua(self, lua: &Lua) -> mlua::Result<Value> {
        Ok(match self {
            ScriptValue::Nil => Value::Nil,
            ScriptValue::Boolean(b) => Value::Boolean(b),
            ScriptValue::Number(n) => Value::Number(n),
            ScriptValue::String(s) => Value::String(lua.create_string(&s)?),
            ScriptValue::Table(t) => Value::Table(t),
            ScriptValue::Function(f) => Value::Function(f),
        })
    }
}

impl FromLua for ScriptValue {
    fn from_lua(value: Value, _lua: &Lua) -> mlua::Result<Self> {
        Ok(match value {
            Value::Nil => ScriptValue::Nil,
            Value::Boolean(b) => ScriptValue::Boolean(b),
            Value::Integer(i) => ScriptValue::Number(i as f64),
            Value::Number(n) => ScriptValue::Number(n),
            Value::String(s) => ScriptValue::String(s.to_string_lossy().to_string()),
            Value::Table(t) => ScriptValue::Table(t),
            Value::Function(f) => ScriptValue::Function(f),
            // Threads, userdata, and friends have no bridge representation.
            _ => ScriptValue::Nil,
        })
    }
}
