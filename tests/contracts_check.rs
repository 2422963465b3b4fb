mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let placement = env.run_json(&["resolve", "--family", "Darwin"]);
    assert_eq!(placement["ok"], true);
    validate("placement.schema.json", &placement["data"]);

    let apply = env.apply_json("Darwin", &[]);
    assert_eq!(apply["ok"], true);
    validate("apply.schema.json", &apply["data"]);

    let show = env.run_json(&["show", "--family", "Darwin", "--root", env.root_arg()]);
    assert_eq!(show["ok"], true);
    validate("metadata.schema.json", &show["data"]);

    let out = env
        .cmd()
        .args(["--json", "validate", "--team", "infracore"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let err: Value = serde_json::from_slice(&out).expect("error json output");
    validate("error.schema.json", &err);
}
