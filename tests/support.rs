use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for faceval
pub fn faceval() -> Command {
    cargo_bin_cmd!("faceval")
}
