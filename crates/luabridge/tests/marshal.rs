//! Record/table marshaling: round-trip fidelity, script mutation,
//! unknown-field tolerance, and soft per-field warnings.

use luabridge::{FieldKind, FieldSpec, Record, ScriptValue, ScriptVm};

#[derive(Debug, Default, Clone, PartialEq)]
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

fn alice() -> User {
    User {
        name: "Alice".to_string(),
        age: 30,
        email: "alice@example.com".to_string(),
    }
}

#[test]
fn round_trip_without_mutation_is_identity() {
    let vm = ScriptVm::new().unwrap();
    let table = vm.record_to_table(&alice()).unwrap();
    let back = vm.record_from_table::<User>(&table).unwrap();

    assert!(back.warnings.is_empty());
    assert_eq!(back.record, alice());
}

#[test]
fn script_mutations_come_back_and_extra_fields_do_not() {
    let vm = ScriptVm::new().unwrap();
    let table = vm.record_to_table(&alice()).unwrap();
    vm.set_global("user", ScriptValue::Table(table)).unwrap();

    vm.exec(
        r#"
        user.Age = user.Age + 5
        user.Email = string.upper(user.Email)
        user.NewField = "I am new!"
    "#,
    )
    .unwrap();

    let user = vm.global("user").unwrap();
    let back = vm.record_from_table::<User>(user.as_table().unwrap()).unwrap();

    assert!(back.warnings.is_empty());
    assert_eq!(
        back.record,
        User {
            name: "Alice".to_string(),
            age: 35,
            email: "ALICE@EXAMPLE.COM".to_string(),
        }
    );
}

#[test]
fn wrong_typed_field_defaults_with_warning() {
    let vm = ScriptVm::new().unwrap();
    let table = vm.record_to_table(&alice()).unwrap();
    vm.set_global("user", ScriptValue::Table(table)).unwrap();
    vm.exec("user.Age = 'thirty'").unwrap();

    let user = vm.global("user").unwrap();
    let back = vm.record_from_table::<User>(user.as_table().unwrap()).unwrap();

    assert_eq!(back.record.age, 0);
    assert_eq!(back.record.name, "Alice");
    assert_eq!(back.record.email, "alice@example.com");

    assert_eq!(back.warnings.len(), 1);
    assert_eq!(back.warnings[0].field, "Age");
    assert_eq!(back.warnings[0].expected, "number");
    assert_eq!(back.warnings[0].found, "string");
}

#[test]
fn keys_outside_the_schema_are_skipped() {
    let vm = ScriptVm::new().unwrap();
    vm.exec(
        r#"
        user = {
            Name = "Bob",
            Age = 41,
            Email = "bob@example.com",
            Extra = true,
            [1] = "positional",
        }
    "#,
    )
    .unwrap();

    let user = vm.global("user").unwrap();
    let back = vm.record_from_table::<User>(user.as_table().unwrap()).unwrap();

    assert!(back.warnings.is_empty());
    assert_eq!(
        back.record,
        User {
            name: "Bob".to_string(),
            age: 41,
            email: "bob@example.com".to_string(),
        }
    );
}

#[test]
fn missing_fields_keep_their_defaults() {
    let vm = ScriptVm::new().unwrap();
    vm.exec("user = { Name = 'Carol' }").unwrap();

    let user = vm.global("user").unwrap();
    let back = vm.record_from_table::<User>(user.as_table().unwrap()).unwrap();

    assert!(back.warnings.is_empty());
    assert_eq!(back.record.name, "Carol");
    assert_eq!(back.record.age, 0);
    assert_eq!(back.record.email, "");
}

#[test]
fn table_entries_have_lua_native_types() {
    let vm = ScriptVm::new().unwrap();
    let table = vm.record_to_table(&alice()).unwrap();
    vm.set_global("user", ScriptValue::Table(table)).unwrap();

    vm.exec(
        r#"
        checks = type(user.Name) == "string"
            and type(user.Age) == "number"
            and type(user.Email) == "string"
    "#,
    )
    .unwrap();
    assert!(vm.global("checks").unwrap().as_boolean().unwrap());
}
