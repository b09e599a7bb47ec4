use assert_cmd::{crate_name, Command};
use assertables::assert_contains;
use std::io::Write;
use svg2polylines::cli::{run, Config};
use tempfile::NamedTempFile;

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert_contains!(output, "Usage");
    assert_contains!(output, "--tolerance");
}

#[test]
fn test_cmdline_stdin() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin(r#"<svg><path d="M 0 0 L 1 2"/></svg>"#)
        .assert()
        .success()
        .stdout("[[[0.0,0.0],[1.0,2.0]]]\n");
}

#[test]
fn test_cmdline_ids() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = cmd
        .arg("--ids")
        .write_stdin(r#"<svg><path id="p1" d="M 0 0 L 1 2"/></svg>"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_contains!(String::from_utf8(output).unwrap(), r#""id":"p1""#);
}

#[test]
fn test_cmdline_bad_input() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin(r#"<svg><path d="L 1 1"/></svg>"#)
        .assert()
        .failure();

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--tolerance", "0"]).write_stdin("<svg/>").assert().failure();
}

#[test]
fn test_cmdline_config() {
    let config = Config::from_cmdline(&format!("{} --help", crate_name!()));
    assert!(config.is_err());

    let mut infile = NamedTempFile::new().expect("could not create tmpfile");
    write!(infile, r#"<svg><rect width="1" height="1"/></svg>"#).expect("tmpfile write failed");
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let config = Config::from_cmdline(&format!(
        "{} {} -o {} --pretty",
        crate_name!(),
        infile.path().to_str().unwrap(),
        outfile.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    assert!(config.pretty);
    run(config).expect("run failed");

    let output = std::fs::read_to_string(outfile.path()).expect("output readable");
    let polylines: Vec<Vec<(f64, f64)>> = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(
        polylines,
        vec![vec![(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)]]
    );
}

#[test]
fn test_cmdline_same_in_out() {
    let mut infile = NamedTempFile::new().expect("could not create tmpfile");
    write!(infile, "<svg/>").expect("tmpfile write failed");
    let path = infile.path().to_str().unwrap();
    assert!(Config::from_cmdline(&format!("{} {path} -o {path}", crate_name!())).is_err());
}
