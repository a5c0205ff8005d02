use assert_cmd::Command;
use tempfile::TempDir;

/// Command running in an empty temp dir so no stray gestate.toml is picked up
pub fn gestate_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gestate").unwrap();
    cmd.current_dir(dir.path());
    cmd.env_remove("GESTATE_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
