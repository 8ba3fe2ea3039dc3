mod common;

use rstest::rstest;
use tacnote_core::AnyEmptyResult;

#[rstest]
#[case::placeholder(&["render", "rewrite {+, @term }"], "rewrite ‘term’, …, ‘term’\n")]
#[case::placeholder_macro(&["render", "@bindings_list"], "(‘id’ := ‘val’) … (‘id’ := ‘val’)\n")]
#[case::html(
	&["render", "--format", "html", "{? @x }"],
	"<span class=\"notation\"><span class=\"repeat-wrapper\"><span class=\"repeat\"><span class=\"hole\">x</span></span><sup>?</sup></span></span>\n"
)]
#[case::regex(&["render", "--format", "regex", "intro @x"], "intro\\s+([^();. \\n]+)\n")]
#[case::anchored_regex(
	&["render", "--format", "regex", "--anchored", "intro @x"],
	"^(?:intro\\s+([^();. \\n]+))$\n"
)]
#[case::json(&["render", "--format", "json", "@x"], "{\"children\":[{\"kind\":\"hole\",\"id\":\"x\"}]}\n")]
fn render_formats(#[case] args: &[&str], #[case] expected: &'static str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tacnote_cmd()
		.current_dir(tmp.path())
		.args(args)
		.assert()
		.success()
		.stdout(expected);

	Ok(())
}

#[test]
fn render_reads_stdin_lines() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tacnote_cmd()
		.current_dir(tmp.path())
		.arg("render")
		.write_stdin("intros\n\n   \nintro @x\n")
		.assert()
		.success()
		.stdout("intros\nintro ‘x’\n");

	Ok(())
}

#[test]
fn render_reports_parse_errors() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tacnote_cmd()
		.current_dir(tmp.path())
		.arg("render")
		.arg("{+ @x")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("unexpected end of notation"));

	Ok(())
}

#[test]
fn substitute_prints_expansion() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tacnote_cmd()
		.current_dir(tmp.path())
		.arg("substitute")
		.arg("unfold @qualid_or_string with @bindings_list")
		.assert()
		.success()
		.stdout("unfold @id|@string with {+ (@id := @val) }\n");

	Ok(())
}

#[test]
fn macros_lists_builtins_in_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let output = common::tacnote_cmd()
		.current_dir(tmp.path())
		.arg("macros")
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	let stdout = String::from_utf8(output)?;

	let bindings = stdout.find("@bindings_list").ok_or("missing @bindings_list")?;
	let qualid = stdout.find("@qualid_or_string").ok_or("missing @qualid_or_string")?;
	assert!(bindings < qualid);
	assert!(stdout.contains("{+ (@id := @val) }"));
	assert!(stdout.contains("@id|@string"));

	Ok(())
}
