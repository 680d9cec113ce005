//! End-to-end tour of the bridge: inline scripts, a script file, a
//! protected function call, and a record round-trip through a Lua table.
//!
//! Usage:
//!   cargo run --example user_record

use std::fs;

use luabridge::{FieldKind, FieldSpec, Record, ScriptValue, ScriptVm};
use tracing_subscriber::fmt;

#[derive(Debug, Default, Clone)]
struct User {
    name: String,
    age: i64,
    email: String,
}

const USER_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("Name", FieldKind::Text),
    FieldSpec::new("Age", FieldKind::Integer),
    FieldSpec::new("Email", FieldKind::Text),
];

impl Record for User {
    fn schema() -> &'static [FieldSpec] {
        USER_SCHEMA
    }

    fn get(&self, field: &str) -> ScriptValue {
        match field {
            "Name" => self.name.as_str().into(),
            "Age" => self.age.into(),
            "Email" => self.email.as_str().into(),
            _ => ScriptValue::Nil,
        }
    }

    fn set(&mut self, field: &str, value: ScriptValue) {
        match (field, value) {
            ("Name", ScriptValue::String(s)) => self.name = s,
            ("Age", ScriptValue::Number(n)) => self.age = n as i64,
            ("Email", ScriptValue::String(s)) => self.email = s,
            _ => {}
        }
    }
}

fn main() -> luabridge::ScriptResult<()> {
    fmt().init();

    let vm = ScriptVm::new()?;

    // Inline script: definitions become globals, read back by name.
    vm.exec(
        r#"
        function add(x, y)
            return x + y
        end

        result = add(10, 20)
    "#,
    )?;
    println!("result from Lua: {}", vm.global("result")?.as_number()?);

    // Same thing from a file on disk.
    let script_path = std::env::temp_dir().join("user_record_demo.lua");
    fs::write(&script_path, "result = 'loaded from a file'\n").map_err(|err| {
        luabridge::ScriptError::Io {
            path: script_path.display().to_string(),
            message: err.to_string(),
        }
    })?;
    vm.exec_file(&script_path)?;
    println!("result from Lua: {}", vm.global("result")?.as_str()?);
    let _ = fs::remove_file(&script_path);

    // A protected call with host arguments.
    vm.exec(
        r#"
        function greet(name, times)
            local message = ""
            for i = 1, times do
                message = message .. "Hello, " .. name .. "! "
            end
            return message
        end
    "#,
    )?;
    let results = vm.call("greet", vec!["Gopher".into(), 3i64.into()], 1)?;
    println!("Lua says: {}", results[0].as_str()?);

    // Record -> table, script mutation, table -> record.
    let user = User {
        name: "Alice".to_string(),
        age: 30,
        email: "alice@example.com".to_string(),
    };
    let table = vm.record_to_table(&user)?;
    vm.set_global("user", ScriptValue::Table(table))?;

    vm.exec(
        r#"
        user.Age = user.Age + 5
        user.Email = string.upper(user.Email)
        user.NewField = "I am new!"
    "#,
    )?;

    let modified = vm.global("user")?;
    let back = vm.record_from_table::<User>(modified.as_table()?)?;
    println!("modified user: {:?}", back.record);
    for warning in &back.warnings {
        println!(
            "field {} skipped: expected {}, found {}",
            warning.field, warning.expected, warning.found
        );
    }

    Ok(())
}
