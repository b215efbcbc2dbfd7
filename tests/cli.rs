use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

#[test]
fn tree_from_file_renders_json() {
    let file = source_file("block A { register R { offset 0x10 size 4 } }\n");
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tree").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"block\""))
        .stdout(predicate::str::contains("\n        \"offset\": 16,"));
}

#[test]
fn tree_from_stdin() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tree").write_stdin("cpu core0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"class\": \"cpu\""))
        .stdout(predicate::str::contains("\"inst\": \"core0\""));
}

#[test]
fn tree_treeviz_format() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.args(["tree", "--format", "treeviz"])
        .write_stdin("block A { size 4 }\nA a0\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("├─ Block: A (size=4)"))
        .stdout(predicate::str::contains("└─ Instantiation: A a0"));
}

#[test]
fn tree_yaml_format() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.args(["tree", "-f", "yaml"]).write_stdin("cpu core0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("class: cpu"));
}

#[test]
fn tree_config_file_sets_indent() {
    let config = {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config");
        file.write_all(b"[output]\nindent = 4\n").expect("write config");
        file
    };
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tree")
        .arg("--config")
        .arg(config.path())
        .write_stdin("cpu core0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\n        \"class\": \"cpu\""));
}

#[test]
fn tree_unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.args(["tree", "--format", "xml"]).write_stdin("cpu core0");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Format 'xml' not found"));
}

#[test]
fn tree_lexical_error_exits_with_one() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tree").write_stdin("block A { $ }");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown token on line 1: '$'"));
}

#[test]
fn tree_syntax_error_shows_context() {
    let file = source_file("block A {\n  offset 1\n}\n}\n");
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tree").arg(file.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ERROR(line 4): syntax error"))
        .stderr(predicate::str::contains(">>   4 | }"));
}

#[test]
fn tree_fractional_value_fails() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tree")
        .write_stdin("block A { register R { field F { offset 1.5 } } }");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'1.5' is not a valid integer parameter value"));
}

#[test]
fn tree_missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.args(["tree", "no/such/file.regmap"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error reading no/such/file.regmap"));
}

#[test]
fn tokens_simple_dump() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tokens").write_stdin("block A {\n  offset 0x10\n}\n");

    cmd.assert().success().stdout(
        "BLOCK_KEYWORD: block\nID: A\n{: {\nPARAMETER_NAME: offset\nNUMBER_LITERAL: 0x10\n}: }\n",
    );
}

#[test]
fn tokens_dump_stops_at_lexical_error() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tokens").write_stdin("cpu core0\n%");

    cmd.assert()
        .failure()
        .code(1)
        .stdout("ID: cpu\nID: core0\n")
        .stderr(predicate::str::contains("Unknown token on line 2: '%'"));
}

#[test]
fn tokens_json_dump() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.args(["tokens", "--format", "json"]).write_stdin("size 4");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"PARAMETER_NAME\""))
        .stdout(predicate::str::contains("\"line\": 1"));
}

#[test]
fn tree_debug_flag_logs_declarations() {
    let mut quiet = cargo_bin_cmd!("regmap");
    quiet
        .env_remove("RUST_LOG")
        .arg("tree")
        .write_stdin("block uart { size 4 }\nuart uart0");
    quiet.assert().success().stderr(predicate::str::is_empty());

    let mut verbose = cargo_bin_cmd!("regmap");
    verbose
        .env_remove("RUST_LOG")
        .args(["tree", "--debug"])
        .write_stdin("block uart { size 4 }\nuart uart0");
    verbose
        .assert()
        .success()
        .stderr(predicate::str::contains("instantiation"))
        .stderr(predicate::str::contains("uart0"));
}

#[test]
fn tree_reads_local_config_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("regmap.toml"), "[output]\nformat = \"treeviz\"\n")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.current_dir(dir.path())
        .arg("tree")
        .write_stdin("cpu core0");

    cmd.assert()
        .success()
        .stdout("└─ Instantiation: cpu core0\n");
}

#[test]
fn tree_syntax_error_without_context() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("regmap.toml"),
        "[diagnostics]\nsource_context = false\n",
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.current_dir(dir.path())
        .arg("tree")
        .write_stdin("block A {\n  offset 1\n}\n}\n");

    cmd.assert()
        .failure()
        .code(1)
        .stderr("ERROR(line 4): syntax error near '}'\n");
}

#[test]
fn tokens_split_parameter_name_prefix() {
    let mut cmd = cargo_bin_cmd!("regmap");
    cmd.arg("tokens").write_stdin("offsets");

    cmd.assert()
        .success()
        .stdout("PARAMETER_NAME: offset\nID: s\n");
}
