use std::fs;
use std::net::TcpListener;
use std::process::Command;

fn write_config(name: &str, endpoint: &str) -> String {
    let path = std::env::temp_dir().join(format!("relay-probe-{}-{}.toml", name, std::process::id()));
    fs::write(&path, format!("endpoint = \"{}\"\nquery_url = \"https://www.google.com/robots.txt\"\n", endpoint)).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_unreachable_endpoint_exits_zero() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = write_config("refused", &format!("http://127.0.0.1:{}/proxy", port));

    let output = Command::new(env!("CARGO_BIN_EXE_relay-probe"))
        .env("RELAY_PROBE_CONFIG", &config)
        .output()
        .unwrap();
    let _ = fs::remove_file(&config);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{}", stdout);
    assert!(lines[0].starts_with(&format!("Requesting http://127.0.0.1:{}/proxy with params", port)));
    assert!(lines[1].starts_with("Error:"));
}

#[test]
fn test_invalid_endpoint_exits_zero() {
    let config = write_config("invalid", "not a url");

    let output = Command::new(env!("CARGO_BIN_EXE_relay-probe"))
        .env("RELAY_PROBE_CONFIG", &config)
        .output()
        .unwrap();
    let _ = fs::remove_file(&config);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|line| line.starts_with("Error: invalid url")), "{}", stdout);
}

#[test]
fn test_missing_named_config_is_reported() {
    let config = std::env::temp_dir().join(format!("relay-probe-missing-{}.toml", std::process::id()));
    let _ = fs::remove_file(&config);

    let output = Command::new(env!("CARGO_BIN_EXE_relay-probe"))
        .env("RELAY_PROBE_CONFIG", &config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "{}", stdout);
    assert!(lines[0].starts_with("Error: configuration error"), "{}", stdout);
    assert!(!stdout.contains("tripo-file-proxy"), "{}", stdout);
}

/**
连真实的代理，默认 ignore
**/
#[ignore]
#[test]
fn test_live_default_run() {
    let output = Command::new(env!("CARGO_BIN_EXE_relay-probe"))
        .env("RELAY_PROBE_CONFIG", "conf/Settings.toml")
        .output()
        .unwrap();
    assert!(output.status.success());
    println!("{}", String::from_utf8_lossy(&output.stdout));
}
