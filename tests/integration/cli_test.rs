//! Integration tests for the treedump binary

#[cfg(test)]
mod cli_tests {
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::process::{Command, Stdio};
    use tempfile::tempdir;

    struct RunResult {
        stdout: String,
        stderr: String,
        success: bool,
    }

    fn run_treedump(dir: &Path, args: &[&str], stdin: &str) -> RunResult {
        let mut child = Command::new(env!("CARGO_BIN_EXE_treedump"))
            .args(args)
            .current_dir(dir)
            .env_remove("TREEDUMP_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to run treedump");

        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        let output = child.wait_with_output().unwrap();

        RunResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        }
    }

    fn read_tree(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_flags_write_output_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "x").unwrap();
        fs::write(dir.path().join("b.md"), "skip").unwrap();

        let result = run_treedump(dir.path(), &["-e", "py, .txt", "-o", "dump"], "");

        assert!(result.success, "stderr: {}", result.stderr);
        assert!(result.stdout.contains("Hierarchy JSON saved to:"), "{}", result.stdout);
        assert!(result.stdout.contains("dump.txt"), "{}", result.stdout);

        let tree = read_tree(&dir.path().join("dump.txt"));
        let root = tree.as_array().unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root[0]["name"], "a.py");
        assert_eq!(root[0]["content"], "x");
    }

    #[test]
    fn test_prompts_read_from_stdin() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.txt"), "y").unwrap();

        let result = run_treedump(dir.path(), &[], "txt\nout\n");

        assert!(result.success, "stderr: {}", result.stderr);
        assert!(result.stdout.contains("Enter file extensions"));
        assert!(result.stdout.contains("Enter the output filename"));

        let tree = read_tree(&dir.path().join("out.txt"));
        assert_eq!(tree[0]["type"], "directory");
        assert_eq!(tree[0]["children"][0]["name"], "c.txt");
        assert_eq!(tree[0]["children"][0]["content"], "y");
    }

    #[test]
    fn test_blank_extensions_write_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "x").unwrap();

        let result = run_treedump(dir.path(), &[], "   \nout\n");

        assert!(result.success);
        assert!(result.stdout.contains("No valid extensions entered. Exiting."));
        assert!(!result.stdout.contains("Enter the output filename"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_blank_filename_writes_nothing() {
        let dir = tempdir().unwrap();

        let result = run_treedump(dir.path(), &["--extensions", "py"], "\n");

        assert!(result.success);
        assert!(result.stdout.contains("No output filename provided. Exiting."));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_stats_and_quiet() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.rs"), "fn a() {}").unwrap();

        let result = run_treedump(dir.path(), &["-e", "rs", "-o", "s", "--stats"], "");
        assert!(result.stdout.contains("Scan Statistics:"), "{}", result.stdout);
        assert!(result.stdout.contains("Files included: 1"), "{}", result.stdout);

        let result = run_treedump(dir.path(), &["-e", "rs", "-o", "q", "--quiet", "--stats"], "");
        assert!(result.success);
        assert!(result.stdout.is_empty(), "{}", result.stdout);
        assert!(dir.path().join("q.txt").exists());
    }

    #[test]
    fn test_write_failure_exits_nonzero() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.rs"), "fn a() {}").unwrap();
        // A directory already occupies the output path
        fs::create_dir(dir.path().join("taken.txt")).unwrap();

        let result = run_treedump(dir.path(), &["-e", "rs", "-o", "taken"], "");

        assert!(!result.success);
        assert!(result.stderr.contains("Could not save"), "{}", result.stderr);
    }
}
