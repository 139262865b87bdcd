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

    let kits = env.run_json_catalog(&["search", "--category", "Backend"]);
    assert_eq!(kits["ok"], true);
    validate("search-kits.schema.json", &kits["data"]);

    let scripts = env.run_json_catalog(&["search", "--scripts", "--category", "Utilities"]);
    assert_eq!(scripts["ok"], true);
    validate("search-scripts.schema.json", &scripts["data"]);

    let rec = env.run_json_catalog(&[
        "recommend",
        "--product",
        "Backend",
        "--level",
        "Beginner",
        "--tech",
        "Python",
    ]);
    assert_eq!(rec["ok"], true);
    validate("recommend.schema.json", &rec["data"]);

    let tree = env.run_json_catalog(&["tree", "1", "--expand-all"]);
    assert_eq!(tree["ok"], true);
    validate("tree.schema.json", &tree["data"]);

    let file = env.run_json_catalog(&["file", "1", "README.md"]);
    assert_eq!(file["ok"], true);
    validate("file-preview.schema.json", &file["data"]);

    let missing = env.run_json_catalog(&["file", "1", "nope"]);
    validate("file-preview.schema.json", &missing["data"]);

    let report = env.run_json(&["validate"]);
    assert_eq!(report["ok"], true);
    validate("validate.schema.json", &report["data"]);
}

#[test]
fn quiz_contract_check() {
    let env = TestEnv::new();
    env.write_config("[quiz]\nauto_advance_ms = 0\n");

    for script in ["Web App\nBeginner\n:next\nFast Setup\n", "AI\n:quit\n"] {
        let out = env
            .cmd()
            .args(["--json", "--catalog", env.catalog_arg(), "quiz"])
            .write_stdin(script)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let report: Value = serde_json::from_slice(&out).expect("valid json output");
        assert_eq!(report["ok"], true);
        validate("quiz.schema.json", &report["data"]);
    }
}
