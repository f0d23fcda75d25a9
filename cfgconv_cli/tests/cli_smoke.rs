use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_file_path(prefix: &str, ext: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("cfgconv-{prefix}-{nonce}.{ext}"))
}

fn run(args: &[&str], input: &PathBuf, output: &PathBuf) -> Output {
    Command::new(env!("CARGO_BIN_EXE_config-convert"))
        .arg("-f")
        .arg(input)
        .arg("-o")
        .arg(output)
        .args(args)
        .env_remove("CFGCONV_LOG")
        .output()
        .expect("run config-convert")
}

const IOS: &str = "hostname router1\n!\ninterface GigabitEthernet0/1\n ip address 10.0.0.1 255.255.255.0\n!\n";

#[test]
fn config_convert_writes_template() {
    let input = temp_file_path("ios-template-in", "cfg");
    let output = temp_file_path("ios-template-out", "j2");
    fs::write(&input, IOS).expect("write input");

    let result = run(&["-c"], &input, &output);

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Converted"));
    assert!(stdout.contains("(ios)"));
    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(
        written,
        "hostname {{ hostname }}\n!\ninterface {{ GigabitEthernet0_1 }}\n ip address {{ ip_address }} {{ subnet_mask }}\n!\n"
    );
}

#[test]
fn config_convert_writes_xml_tree() {
    let input = temp_file_path("junos-tree-in", "set");
    let output = temp_file_path("junos-tree-out", "xml");
    fs::write(
        &input,
        "set system host-name edge-1\nset interfaces ge-0/0/1 unit 0 family inet address 10.0.0.1/30\n",
    )
    .expect("write input");

    let result = run(&["-j", "-t", "tree"], &input, &output);

    assert!(result.status.success());
    let written = fs::read_to_string(&output).expect("read output");
    assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(written.contains("<junos_configuration>"));
    assert!(written.contains("<hostname>edge-1</hostname>"));
    assert!(written.contains("<ip_address>10.0.0.1/30</ip_address>"));
}

#[test]
fn config_convert_accepts_representation_aliases() {
    let input = temp_file_path("sros-flat-in", "cfg");
    let output = temp_file_path("sros-flat-out", "json");
    fs::write(&input, "configure\n    system\n        name \"sr1\"\n").expect("write input");

    let result = run(&["-s", "--type", "json"], &input, &output);

    assert!(result.status.success());
    let record: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read output"))
            .expect("valid json");
    assert_eq!(record["os_type"], "sros");
    assert_eq!(record["config"][2], "        name \"sr1\"");
}

#[test]
fn config_convert_can_emit_json_tree() {
    let input = temp_file_path("ros-json-in", "rsc");
    let output = temp_file_path("ros-json-out", "json");
    fs::write(
        &input,
        "/interface bridge\nadd name=br-lan\n/ip address\nadd address=192.168.88.1/24 interface=br-lan\n/system identity\nset name=gw\n",
    )
    .expect("write input");

    let result = run(&["-m", "-t", "xml", "--tree-format", "json"], &input, &output);

    assert!(result.status.success());
    let tree: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read output"))
            .expect("valid json");
    assert_eq!(tree["system"]["name"], "gw");
    assert_eq!(tree["interfaces"][0]["ip_address"], "192.168.88.1/24");
    assert_eq!(tree["addresses"][0], "192.168.88.1/24");
}

#[test]
fn config_convert_detects_dialect_on_request() {
    let input = temp_file_path("detect-in", "cfg");
    let output = temp_file_path("detect-out", "j2");
    fs::write(&input, "set system host-name edge-1\n").expect("write input");

    let result = run(&["--detect"], &input, &output);

    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("(junos)"));
    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "set system host-name {{ hostname }}\n"
    );
}

#[test]
fn config_convert_fails_when_detection_is_inconclusive() {
    let input = temp_file_path("undetected-in", "cfg");
    let output = temp_file_path("undetected-out", "j2");
    fs::write(&input, "hostname r1\n").expect("write input");

    let result = run(&["--detect"], &input, &output);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("could not detect"));
    assert!(!output.exists());
}

#[test]
fn config_convert_reports_missing_input() {
    let input = temp_file_path("missing-in", "cfg");
    let output = temp_file_path("missing-out", "j2");

    let result = run(&["-c"], &input, &output);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("cannot read"));
    assert!(!output.exists());
}

#[test]
fn config_convert_requires_exactly_one_dialect() {
    let input = temp_file_path("flags-in", "cfg");
    let output = temp_file_path("flags-out", "j2");
    fs::write(&input, IOS).expect("write input");

    assert!(!run(&[], &input, &output).status.success());
    assert!(!run(&["-c", "-a"], &input, &output).status.success());
    assert!(!output.exists());
}

#[test]
fn config_convert_writes_logs_to_file() {
    let input = temp_file_path("log-in", "cfg");
    let output = temp_file_path("log-out", "j2");
    let log = temp_file_path("log", "log");
    fs::write(&input, IOS).expect("write input");

    let log_arg = log.display().to_string();
    let result = run(&["-c", "-v", "--log-file", &log_arg], &input, &output);

    assert!(result.status.success());
    let logged = fs::read_to_string(&log).expect("read log");
    assert!(logged.contains("conversion written"));
}

#[test]
fn config_convert_reports_unwritable_output() {
    let input = temp_file_path("unwritable-in", "cfg");
    let missing_dir = temp_file_path("missing-dir", "d");
    let output = missing_dir.join("out.j2");
    fs::write(&input, IOS).expect("write input");

    let result = run(&["-c"], &input, &output);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("cannot write"));
    assert!(!output.exists());
    assert!(!missing_dir.exists());
}
