use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn tacnote_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("tacnote"));
	cmd.env("NO_COLOR", "1").env_remove("TACNOTE_LOG");
	cmd
}
