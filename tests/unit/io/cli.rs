//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use safedial::DialError;
    use safedial::io::cli::{Cli, FileProcessor};
    use safedial::io::configuration::{DEFAULT_START, DIAL_SIZE};
    use safedial::io::report::Detail;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn quiet_cli(args: &[&str]) -> Cli {
        let mut full = vec!["program"];
        full.extend_from_slice(args);
        full.push("--quiet");
        Cli::parse_from(full)
    }

    fn run(cli: Cli) -> Result<String, DialError> {
        let mut processor = FileProcessor::new(cli);
        let mut out = Vec::new();
        processor.process_to(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    // Tests CLI parsing with only required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "input.txt"]);

        assert_eq!(cli.target, PathBuf::from("input.txt"));
        assert_eq!(cli.start, DEFAULT_START);
        assert_eq!(cli.size, DIAL_SIZE);
        assert!(!cli.summary);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.detail(), Detail::Full);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the short flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program", "dir", "-s", "3", "--size", "10", "--summary", "-q", "-vv",
        ]);

        assert_eq!(cli.target, PathBuf::from("dir"));
        assert_eq!(cli.start, 3);
        assert_eq!(cli.size, 10);
        assert_eq!(cli.detail(), Detail::Summary);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.dial().unwrap().position(), 3);
    }

    // Tests the sample puzzle input end to end
    // Verified by counting only rotations that end on zero
    #[test]
    fn test_process_sample_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sample.txt");
        fs::write(&input, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n").unwrap();

        let output = run(quiet_cli(&[input.to_str().unwrap()])).unwrap();

        assert!(output.starts_with("The dial starts by pointing at 50.\n"));
        assert!(output.contains("The dial is rotated L30 to point at 52.\n"));
        assert!(output.contains("The dial ended a rotation on 0 3 times."));
        assert!(output.trim_end().ends_with("Password: 6"));
        assert!(!output.contains("=="));
    }

    // Tests a directory processes only .txt files in sorted order with headers
    // Verified by removing the sort
    #[test]
    fn test_process_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "R50\n").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "L150\n").unwrap();
        fs::write(temp_dir.path().join("notes.md"), "not instructions").unwrap();
        fs::create_dir(temp_dir.path().join("nested.txt")).unwrap();

        let output = run(quiet_cli(&[temp_dir.path().to_str().unwrap(), "--summary"])).unwrap();

        let a = output.find("== a.txt ==").unwrap();
        let b = output.find("== b.txt ==").unwrap();
        assert!(a < b);
        assert!(!output.contains("notes.md"));
        assert!(!output.contains("nested.txt"));
        assert!(output.contains("Password: 2"));
        assert!(output.contains("Password: 1"));
    }

    // Tests an empty directory is not an error
    // Verified by adding error for empty directories
    #[test]
    fn test_process_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output = run(quiet_cli(&[temp_dir.path().to_str().unwrap()])).unwrap();
        assert!(output.is_empty());

        let processor = FileProcessor::new(quiet_cli(&[temp_dir.path().to_str().unwrap()]));
        assert!(processor.progress().is_none());
    }

    // Tests error handling for missing targets
    // Verified by treating missing targets as empty
    #[test]
    fn test_process_nonexistent_target() {
        let result = run(quiet_cli(&["does/not/exist.txt"]));
        assert!(matches!(
            result,
            Err(DialError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));
    }

    // Tests a malformed line aborts the run
    // Verified by skipping unparseable lines
    #[test]
    fn test_process_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("bad.txt");
        fs::write(&input, "R5\nforward 3\n").unwrap();

        let result = run(quiet_cli(&[input.to_str().unwrap()]));
        assert!(matches!(result, Err(DialError::Parse { line: Some(2), .. })));
    }

    // Tests invalid dial flags fail before any file is read
    // Verified by validating the dial after collecting files
    #[test]
    fn test_process_rejects_bad_dial() {
        let result = run(quiet_cli(&["does/not/exist.txt", "--start", "100"]));
        assert!(matches!(
            result,
            Err(DialError::InvalidParameter {
                parameter: "start",
                ..
            })
        ));

        let result = run(quiet_cli(&["does/not/exist.txt", "--size", "0", "--start", "0"]));
        assert!(matches!(
            result,
            Err(DialError::InvalidParameter {
                parameter: "size",
                ..
            })
        ));
    }

    // Tests custom dial sizes flow through to the simulation
    // Verified by ignoring the size flag
    #[test]
    fn test_process_custom_dial() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("small.txt");
        fs::write(&input, "R25\n").unwrap();

        let output = run(quiet_cli(&[
            input.to_str().unwrap(),
            "--size",
            "10",
            "--start",
            "5",
        ]))
        .unwrap();

        assert!(output.contains("The dial is rotated R25 to point at 0; during this rotation, it points at 0 3 time(s)."));
        assert!(output.contains("Password: 3"));
    }

    // Tests reports are unchanged when progress bars are drawn around them
    // Verified by writing the report outside the suspended section
    #[test]
    fn test_report_identical_with_progress() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sample.txt");
        fs::write(&input, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n").unwrap();
        let target = input.to_str().unwrap();

        let quiet = run(quiet_cli(&[target])).unwrap();
        let with_bars = run(Cli::parse_from(["program", target])).unwrap();

        assert_eq!(with_bars, quiet);
        assert!(with_bars.starts_with("The dial starts by pointing at 50.\n"));
    }

    // Tests the bars are cleared when a later file fails to parse
    // Verified by returning before finishing the progress manager
    #[test]
    fn test_progress_cleared_on_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "R50\n").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "R5\nsideways\n").unwrap();

        let cli = Cli::parse_from(["program", temp_dir.path().to_str().unwrap()]);
        let mut processor = FileProcessor::new(cli);
        let mut out = Vec::new();
        let result = processor.process_to(&mut out);

        assert!(matches!(result, Err(DialError::Parse { line: Some(2), .. })));
        assert!(processor.progress().is_some_and(|pm| !pm.is_active()));
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("== a.txt =="));
        assert!(!written.contains("== b.txt =="));
    }

    // Tests processing with progress bars enabled
    // Verified by initializing bars after processing
    #[test]
    fn test_process_with_progress() {
        let temp_dir = TempDir::new().unwrap();
        let instructions = "R1\n".repeat(300);
        for i in 0..8 {
            fs::write(temp_dir.path().join(format!("f{i}.txt")), &instructions).unwrap();
        }

        let cli = Cli::parse_from(["program", temp_dir.path().to_str().unwrap(), "--summary"]);
        let output = run(cli).unwrap();
        assert_eq!(output.matches("Password: 3").count(), 8);
    }
}
