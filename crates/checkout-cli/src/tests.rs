//! Tests for the checkout binary.

#[cfg(test)]
mod cli_tests {
    use clap::{CommandFactory, Parser};

    use crate::Cli;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["checkout", "input.txt"]).unwrap();
        assert_eq!(cli.input.to_str(), Some("input.txt"));
        assert!(cli.trace_dir.is_none());
        assert_eq!(cli.snapshot_every, 0);
        assert!(!cli.every_tick);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "checkout", "in.txt", "--trace-dir", "out", "--snapshot-every", "5", "--every-tick", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.trace_dir.as_deref().and_then(|p| p.to_str()), Some("out"));
        assert_eq!(cli.snapshot_every, 5);
        assert!(cli.every_tick);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn input_required() {
        assert!(Cli::try_parse_from(["checkout"]).is_err());
    }
}

// ── Running scenario files ────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use checkout_core::Tick;

    use crate::{Cli, run};

    fn scenario(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("scenario.txt");
        fs::write(&path, text).unwrap();
        path
    }

    fn cli(input: PathBuf) -> Cli {
        Cli { input, trace_dir: None, snapshot_every: 0, every_tick: false, verbose: 0 }
    }

    #[test]
    fn single_register_example() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(&cli(scenario(&dir, "1\nA 1 2\nA 2 1\n"))).unwrap();
        assert_eq!(report.finished_at, Tick(7));
        assert_eq!(report.to_string(), "Finished at: t=7 minutes");
    }

    #[test]
    fn two_register_example_every_tick() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = cli(scenario(&dir, "2\nA 1 5\nB 2 1\nA 3 5\nB 5 3\nA 8 2\n"));
        args.every_tick = true;
        assert_eq!(run(&args).unwrap().finished_at, Tick(13));
    }

    #[test]
    fn writes_trace_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = cli(scenario(&dir, "2\nA 0 3\nB 0 2\n"));
        args.trace_dir = Some(dir.path().join("trace"));
        args.snapshot_every = 1;
        let report = run(&args).unwrap();
        assert_eq!(report.finished_at, Tick(6));
        for file in ["ticks.csv", "registers.csv", "departures.csv"] {
            assert!(dir.path().join("trace").join(file).exists(), "{file} missing");
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&cli(dir.path().join("nope.txt"))).unwrap_err();
        assert!(err.to_string().contains("cannot load scenario"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&cli(scenario(&dir, "2\nC 1 1\n"))).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }
}
