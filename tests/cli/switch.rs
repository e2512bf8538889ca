use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const TOKEN: &str = r#"pragma solidity ^0.8.0;

import "hardhat/console.sol"; // sol-env:dev

contract Token {
    function mint(uint amount) external {
        console.log("mint", amount); // sol-env:dev
        // require(msg.sender == owner); // sol-env:production,staging
    }
}
"#;

const TOKEN_PRODUCTION: &str = r#"pragma solidity ^0.8.0;

// import "hardhat/console.sol"; // sol-env:dev

contract Token {
    function mint(uint amount) external {
        // console.log("mint", amount); // sol-env:dev
        require(msg.sender == owner); // sol-env:production,staging
    }
}
"#;

#[test]
fn test_switch_directory() -> Result<()> {
    let test = CliTest::with_file("contracts/Token.sol", TOKEN)?;

    let (code, stdout, stderr) = run(test.switch_command("production"))?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "./contracts/Token.sol:L3 deactivated\n\
         ./contracts/Token.sol:L7 deactivated\n\
         ./contracts/Token.sol:L8 activated\n\
         \u{2713} Activated 1 line(s) and deactivated 2 line(s) in 1 file(s).\n"
    );
    assert_eq!(test.read_file("contracts/Token.sol")?, TOKEN_PRODUCTION);
    Ok(())
}

#[test]
fn test_switch_back_restores_file() -> Result<()> {
    let test = CliTest::with_file("contracts/Token.sol", TOKEN)?;

    run(test.switch_command("production"))?;
    let (code, _, _) = run(test.switch_command("dev"))?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("contracts/Token.sol")?, TOKEN);
    Ok(())
}

#[test]
fn test_switch_already_in_environment() -> Result<()> {
    let test = CliTest::with_file("contracts/Token.sol", TOKEN)?;

    let (code, stdout, _) = run(test.switch_command("dev"))?;

    assert_eq!(code, 0);
    assert_snapshot!(
        stdout.trim_end(),
        @"✓ No lines to switch for environment 'dev' (1 file(s) scanned)."
    );
    assert_eq!(test.read_file("contracts/Token.sol")?, TOKEN);
    Ok(())
}

#[test]
fn test_switch_only_searches_contracts_dir() -> Result<()> {
    let test = CliTest::with_file("contracts/nested/A.sol", "a(); // sol-env:dev\n")?;
    test.write_file("scripts/B.sol", "b(); // sol-env:dev\n")?;

    let (code, _, _) = run(test.switch_command("production"))?;

    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("contracts/nested/A.sol")?,
        "// a(); // sol-env:dev\n"
    );
    assert_eq!(test.read_file("scripts/B.sol")?, "b(); // sol-env:dev\n");
    Ok(())
}

#[test]
fn test_switch_silent() -> Result<()> {
    let test = CliTest::with_file("contracts/Token.sol", TOKEN)?;

    let mut cmd = test.switch_command("production");
    cmd.arg("--silent");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "");
    assert_eq!(test.read_file("contracts/Token.sol")?, TOKEN_PRODUCTION);
    Ok(())
}

#[test]
fn test_switch_verbose() -> Result<()> {
    let test = CliTest::with_file("contracts/A.sol", "    a(); // sol-env:dev\n")?;

    let mut cmd = test.switch_command("production");
    cmd.arg("--verbose");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Opening file ./contracts/A.sol\n\
         ./contracts/A.sol:L1 deactivated\n\
         \x20       // a(); // sol-env:dev\n\
         Writing file ./contracts/A.sol\n\
         \u{2713} Activated 0 line(s) and deactivated 1 line(s) in 1 file(s).\n"
    );
    Ok(())
}

#[test]
fn test_switch_single_file_with_hash_delimiter() -> Result<()> {
    let test = CliTest::with_file("echidna.yaml", "seqLen: 100\ntestLimit: 5000 # sol-env:dev")?;

    let mut cmd = test.command();
    cmd.args(["echidna.yaml", "--env", "canonical"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.starts_with("echidna.yaml:L2 deactivated\n"));
    assert_eq!(
        test.read_file("echidna.yaml")?,
        "seqLen: 100\n# testLimit: 5000 # sol-env:dev"
    );
    Ok(())
}

#[test]
fn test_switch_forced_delimiter() -> Result<()> {
    let test = CliTest::with_file("contracts/Pool.sol", "x = 1 # sol-env:dev\n")?;

    let mut cmd = test.switch_command("prod");
    cmd.args(["--delimiter", "#"]);
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("contracts/Pool.sol")?,
        "# x = 1 # sol-env:dev\n"
    );
    Ok(())
}

#[test]
fn test_switch_extension_flag() -> Result<()> {
    let test = CliTest::with_file("contracts/Pool.vy", "x: uint256 # sol-env:dev\n")?;
    test.write_file("contracts/Token.sol", "y(); // sol-env:dev\n")?;

    let mut cmd = test.switch_command("prod");
    cmd.args(["--ext", "vy"]);
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("contracts/Pool.vy")?,
        "# x: uint256 # sol-env:dev\n"
    );
    assert_eq!(test.read_file("contracts/Token.sol")?, "y(); // sol-env:dev\n");
    Ok(())
}

#[test]
fn test_switch_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".solenvrc.json",
        r#"{
            "sourceDir": "src",
            "extensions": ["sol", "cfg"],
            "ignores": ["**/mocks/**"],
            "delimiters": { "cfg": ";" }
        }"#,
    )?;
    test.write_file("src/Token.sol", "a(); // sol-env:dev\n")?;
    test.write_file("src/settings.cfg", "debug = 1 ; sol-env:dev\n")?;
    test.write_file("src/mocks/Mock.sol", "m(); // sol-env:dev\n")?;

    let (code, _, stderr) = run(test.switch_command("prod"))?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(test.read_file("src/Token.sol")?, "// a(); // sol-env:dev\n");
    assert_eq!(
        test.read_file("src/settings.cfg")?,
        "; debug = 1 ; sol-env:dev\n"
    );
    assert_eq!(test.read_file("src/mocks/Mock.sol")?, "m(); // sol-env:dev\n");
    Ok(())
}

#[test]
fn test_switch_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("contracts/Token.sol", TOKEN)?;

    let mut cmd = test.switch_command("production");
    cmd.arg("--dry-run");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("Would activate 1 line(s) and deactivate 2 line(s) in 1 file(s)."));
    assert_eq!(test.read_file("contracts/Token.sol")?, TOKEN);
    Ok(())
}

#[test]
fn test_switch_dry_run_without_changes_succeeds() -> Result<()> {
    let test = CliTest::with_file("contracts/Token.sol", TOKEN)?;

    let mut cmd = test.switch_command("dev");
    cmd.arg("--dry-run");
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn test_malformed_annotation_aborts_without_writing() -> Result<()> {
    let test = CliTest::with_file("contracts/A.sol", "a(); // sol-env:dev\n")?;
    test.write_file(
        "contracts/B.sol",
        "b();\nc(); // sol-env:dev // sol-env:tests\n",
    )?;

    let (code, stdout, stderr) = run(test.switch_command("production"))?;

    assert_eq!(code, 2);
    assert_eq!(stdout, "");
    assert!(
        stderr.contains("./contracts/B.sol:L2: malformed annotation"),
        "stderr: {stderr}"
    );
    // A.sol was scanned before the failure but must not be written
    assert_eq!(test.read_file("contracts/A.sol")?, "a(); // sol-env:dev\n");
    Ok(())
}

#[test]
fn test_missing_path_fails() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["does-not-exist", "--env", "dev"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("path does not exist"), "stderr: {stderr}");
    assert!(!test.root().join("does-not-exist").exists());
    Ok(())
}

#[test]
fn test_env_is_required() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg(".");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("--env"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_env_from_environment_variable() -> Result<()> {
    let test = CliTest::with_file("contracts/A.sol", "a(); // sol-env:dev\n")?;

    let mut cmd = test.command();
    cmd.env("SOL_ENV", "production");
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("contracts/A.sol")?, "// a(); // sol-env:dev\n");
    Ok(())
}
