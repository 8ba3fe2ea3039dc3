mod common;

use tacnote_core::AnyEmptyResult;

const CONFIG: &str = r#"
[[substitutions]]
from = "@ipats"
to = "{* @intropattern }"

[render]
format = "regex"
anchored = true
"#;

#[test]
fn render_uses_config_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("tacnote.toml"), CONFIG)?;

	common::tacnote_cmd()
		.arg("render")
		.arg("--path")
		.arg(tmp.path())
		.arg("intros")
		.assert()
		.success()
		.stdout("^(?:intros)$\n");

	Ok(())
}

#[test]
fn format_flag_overrides_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("tacnote.toml"), CONFIG)?;

	common::tacnote_cmd()
		.arg("render")
		.arg("--path")
		.arg(tmp.path())
		.arg("--format")
		.arg("text")
		.arg("intros @ipats")
		.assert()
		.success()
		.stdout("intros ‘intropattern’\n");

	Ok(())
}

#[test]
fn config_substitutions_are_listed_after_builtins() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(tmp.path().join(".config/tacnote.toml"), CONFIG)?;

	common::tacnote_cmd()
		.arg("macros")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("@ipats"))
		.stdout(predicates::str::contains("{* @intropattern }"));

	Ok(())
}

#[test]
fn invalid_config_exits_with_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join(".tacnote.toml"), "[render]\nformat = \"pdf\"\n")?;

	common::tacnote_cmd()
		.arg("render")
		.arg("--path")
		.arg(tmp.path())
		.arg("intros")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}
