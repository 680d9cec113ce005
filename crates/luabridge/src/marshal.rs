use mlua::{Lua, Table, Value};
use tracing::warn;

use crate::{error::ScriptResult, value::ScriptValue};

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number, carried as a Lua number.
    Integer,
    /// Double-precision float, carried as a Lua number.
    Float,
    /// UTF-8 text, carried as a Lua string.
    Text,
    /// True or false.
    Boolean,
}

impl FieldKind {
    fn matches(self, value: &ScriptValue) -> bool {
        matches!(
            (self, value),
            (FieldKind::Integer | FieldKind::Float, ScriptValue::Number(_))
                | (FieldKind::Text, ScriptValue::String(_))
                | (FieldKind::Boolean, ScriptValue::Boolean(_))
        )
    }

    fn lua_name(self) -> &'static str {
        match self {
            FieldKind::Integer | FieldKind::Float => "number",
            FieldKind::Text => "string",
            FieldKind::Boolean => "boolean",
        }
    }
}

/// One named, typed field of a record schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name, also used as the table key.
    pub name: &'static str,
    /// Declared field type.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Shorthand constructor, usable in `const` schemas.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A host record the marshaler can move across the bridge.
///
/// Implementations declare an ordered, static schema and answer name-keyed
/// reads and writes for exactly the fields it names. `set` is only invoked
/// with a value already checked against the field's [`FieldKind`], so the
/// implementation can match on the expected variant without a fallback
/// error path.
pub trait Record: Default {
    /// The ordered field schema for this record type.
    fn schema() -> &'static [FieldSpec];

    /// Current value of the named schema field.
    fn get(&self, field: &str) -> ScriptValue;

    /// Overwrite the named schema field.
    fn set(&mut self, field: &str, value: ScriptValue);
}

/// A field a table→record conversion had to leave at its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    /// Schema field name.
    pub field: String,
    /// Lua type the schema called for.
    pub expected: &'static str,
    /// Lua type actually found in the table.
    pub found: &'static str,
}

/// Outcome of a table→record conversion.
///
/// Conversion never aborts: fields whose table value had the wrong runtime
/// type keep their defaults and are listed in `warnings` instead.
#[derive(Debug)]
pub struct Converted<R> {
    /// The converted record.
    pub record: R,
    /// One entry per defaulted field; empty on a clean conversion.
    pub warnings: Vec<FieldWarning>,
}

/// Build a fresh table holding one entry per schema field, in schema order.
pub(crate) fn to_table<R: Record>(lua: &Lua, record: &R) -> ScriptResult<Table> {
    let table = lua.create_table()?;
    for spec in R::schema() {
        table.set(spec.name, record.get(spec.name))?;
    }
    Ok(table)
}

/// Fold every table pair into a fresh record, keyed by field name.
///
/// No iteration order is assumed. Non-string keys and names outside the
/// schema are skipped; a value of the wrong type defaults its field and
/// records a warning.
pub(crate) fn from_table<R: Record>(table: &Table) -> ScriptResult<Converted<R>> {
    let mut record = R::default();
    let mut warnings = Vec::new();
    for pair in table.clone().pairs::<Value, ScriptValue>() {
        let (key, value) = pair?;
        let Value::String(key) = key else { continue };
        let key = key.to_string_lossy().to_string();
        let Some(spec) = R::schema().iter().find(|spec| spec.name == key) else {
            continue;
        };
        if spec.kind.matches(&value) {
            record.set(spec.name, value);
        } else {
            warn!(
                field = spec.name,
                expected = spec.kind.lua_name(),
                found = value.type_name(),
                "field left at its default"
            );
            warnings.push(FieldWarning {
                field: spec.name.to_string(),
                expected: spec.kind.lua_name(),
                found: value.type_name(),
            });
        }
    }
    Ok(Converted { record, warnings })
}
