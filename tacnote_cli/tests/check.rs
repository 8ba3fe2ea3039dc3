mod common;

use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;
use tacnote_core::AnyEmptyResult;

#[rstest]
#[case::hole("intro @x", "intro H")]
#[case::bindings("apply @term with @bindings_list", "apply foo with (x := 1) (y := 2)")]
#[case::separated("rewrite {+, @term }", "rewrite H1, H2,H3")]
#[case::optional_present("induction @term {? as @pattern }", "induction n as [|m]")]
#[case::alternative("unfold @qualid_or_string", "unfold \"+\"")]
fn check_accepts_instances(#[case] notation: &str, #[case] text: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tacnote_cmd()
		.current_dir(tmp.path())
		.arg("check")
		.arg(notation)
		.arg(text)
		.assert()
		.success()
		.stdout(predicates::str::contains("matches").and(predicates::str::contains("does not").not()));

	Ok(())
}

#[rstest]
#[case::trailing_text("intro @x", "intro H. auto")]
#[case::missing_parens("apply @term with @bindings_list", "apply foo with x := 1")]
#[case::missing_required("rewrite {+, @term }", "rewrite")]
fn check_rejects_non_instances(#[case] notation: &str, #[case] text: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tacnote_cmd()
		.current_dir(tmp.path())
		.arg("check")
		.arg(notation)
		.arg(text)
		.assert()
		.code(1)
		.stdout(predicates::str::contains("does not match"));

	Ok(())
}

#[test]
fn check_verbose_prints_pattern() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tacnote_cmd()
		.current_dir(tmp.path())
		.arg("check")
		.arg("--verbose")
		.arg("intro @x")
		.arg("intros")
		.assert()
		.code(1)
		.stdout(predicates::str::contains("pattern: ^(?:intro\\s+"));

	Ok(())
}

#[test]
fn check_invalid_notation_exits_with_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::tacnote_cmd()
		.current_dir(tmp.path())
		.arg("check")
		.arg("intro }")
		.arg("intro")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("unexpected `}`"));

	Ok(())
}
