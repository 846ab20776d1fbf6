//! End-to-end tests driving the binary's event console over stdin.

#[cfg(test)]
mod console_tests {
    use assert_cmd::Command;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[platform]\nos = \"android\"\nis_tv = true\n\n[logging]\nlevel = \"off\"\n")
            .unwrap();
        file
    }

    fn run_console(script: &str) -> String {
        let config = config_file();
        let output = Command::cargo_bin("tvevents")
            .unwrap()
            .arg("--config")
            .arg(config.path())
            .arg("--console")
            .write_stdin(script)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_console_logs_remote_and_touch_events() {
        let output = run_console(
            ":remote select 1\n:remote blur\n:focus Pressable\n:longpress Pressable 0\n:show\n:quit\n",
        );
        assert!(output.contains("remote: type=select, action=1"));
        assert!(output.contains("remote: blur filtered"));
        assert!(output.contains("pressable: Pressable focus"));
        assert!(output.contains("[remote]\ntype=select, action=1\n"));
        assert!(output.contains("[pressable]\nPressable long press start\nPressable focus\n"));
    }

    #[test]
    fn test_console_keeps_six_entries() {
        let script: String = (0..10)
            .map(|i| format!(":remote up {}\n", i))
            .chain(std::iter::once(":show remote\n".to_string()))
            .collect();
        let output = run_console(&script);
        let shown: Vec<&str> = output
            .split("[remote]\n")
            .nth(1)
            .unwrap()
            .lines()
            .take_while(|l| l.starts_with("type="))
            .collect();
        assert_eq!(
            shown,
            vec![
                "type=up, action=9",
                "type=up, action=8",
                "type=up, action=7",
                "type=up, action=6",
                "type=up, action=5",
                "type=up, action=4",
            ]
        );
    }

    #[test]
    fn test_console_lists_native_feedback_on_android() {
        let output = run_console(":widgets\n");
        assert!(output.contains("3 TouchableNativeFeedback (TouchableNativeFeedback)"));
    }

    #[test]
    fn test_missing_config_file_fails() {
        Command::cargo_bin("tvevents")
            .unwrap()
            .args(["--config", "/definitely/not/here.toml", "--console"])
            .write_stdin(":quit\n")
            .assert()
            .failure();
    }
}
