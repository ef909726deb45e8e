//! Runs tests using actual binary with a fake `lsusb` first on `PATH`, adapted from 'fd' method: https://github.com/sharkdp/fd/blob/master/tests/testenv/mod.rs
#![allow(dead_code)]
use std::env;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process;

/// Output of lsusb --tree
pub const LSUSB_TREE_OUTPUT: &str = "./tests/data/lsusb_tree.txt";
/// Output of lsusb
pub const LSUSB_OUTPUT: &str = "./tests/data/lsusb_list.txt";
/// Output of lsusb --verbose
pub const LSUSB_OUTPUT_VERBOSE: &str = "./tests/data/lsusb_verbose.txt";
/// usbtree --no-color of the above
pub const USBTREE_PLAIN_OUTPUT: &str = "./tests/data/usbtree_plain.txt";

pub fn read_dump(file_name: &str) -> BufReader<File> {
    let f = File::open(file_name).expect("Unable to open dump file");
    BufReader::new(f)
}

pub fn read_dump_to_string(file_name: &str) -> String {
    let mut ret = String::new();
    let mut br = read_dump(file_name);
    br.read_to_string(&mut ret)
        .unwrap_or_else(|_| panic!("Failed to read {}", file_name));
    ret
}

/// What the fake `lsusb` does for each of its invocations: print dump file or exit 1
#[derive(Debug, Clone, Copy)]
pub struct FakeLsusb {
    pub tree: Option<&'static str>,
    pub list: Option<&'static str>,
    pub verbose: Option<&'static str>,
}

impl Default for FakeLsusb {
    fn default() -> Self {
        FakeLsusb {
            tree: Some(LSUSB_TREE_OUTPUT),
            list: Some(LSUSB_OUTPUT),
            verbose: Some(LSUSB_OUTPUT_VERBOSE),
        }
    }
}

impl FakeLsusb {
    fn case_arm(pattern: &str, dump: Option<&str>) -> String {
        match dump {
            Some(d) => {
                let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(d);
                format!("  {}) cat '{}' ;;\n", pattern, path.display())
            }
            None => format!("  {}) echo 'lsusb failed' >&2; exit 1 ;;\n", pattern),
        }
    }

    /// Write executable `lsusb` shell script into `dir`
    #[cfg(unix)]
    fn install(&self, dir: &Path) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\ncase \"$1\" in\n{}{}{}esac\n",
            Self::case_arm("-t", self.tree),
            Self::case_arm("-v", self.verbose),
            Self::case_arm("*", self.list),
        );
        let path = dir.join("lsusb");
        fs::write(&path, script).expect("write fake lsusb");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("fake lsusb permissions");
    }
}

/// Environment for the integration tests.
pub struct TestEnv {
    /// Path to the *usbtree* executable.
    usbtree_exe: PathBuf,
    /// Directory put at the front of `PATH`
    bin_dir: PathBuf,
    /// Only search `bin_dir` so system lsusb is never found
    isolated_path: bool,
}

/// Find the *usbtree* executable.
fn find_usbtree_exe() -> PathBuf {
    // Tests exe is in target/debug/deps, the *usbtree* exe is in target/debug
    let root = env::current_exe()
        .expect("tests executable")
        .parent()
        .expect("tests executable directory")
        .parent()
        .expect("usbtree executable directory")
        .to_path_buf();

    let exe_name = if cfg!(windows) {
        "usbtree.exe"
    } else {
        "usbtree"
    };

    root.join(exe_name)
}

/// Format an error message for when *usbtree* did not exit successfully.
fn format_exit_error(args: &[&str], output: &process::Output) -> String {
    format!(
        "`usbtree {}` did not exit successfully.\nstdout:\n---\n{}---\nstderr:\n---\n{}---",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

/// Format an error message for when the output of *usbtree* did not match the expected output.
fn format_output_error(args: &[&str], expected: &str, actual: &str) -> String {
    // Generate diff text.
    let diff_text = diff::lines(expected, actual)
        .into_iter()
        .map(|diff| match diff {
            diff::Result::Left(l) => format!("-{}", l),
            diff::Result::Both(l, _) => format!(" {}", l),
            diff::Result::Right(r) => format!("+{}", r),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        concat!(
            "`usbtree {}` did not produce the expected output.\n",
            "Showing diff between expected and actual:\n{}\n"
        ),
        args.join(" "),
        diff_text
    )
}

impl TestEnv {
    /// New environment named `name` (unique per test) with `fake` lsusb installed
    #[cfg(unix)]
    pub fn new(name: &str, fake: FakeLsusb) -> TestEnv {
        let mut env = TestEnv::without_lsusb(name);
        fake.install(&env.bin_dir);
        env.isolated_path = false;
        env
    }

    /// New environment named `name` where `PATH` contains no lsusb at all
    pub fn without_lsusb(name: &str) -> TestEnv {
        let bin_dir = env::temp_dir().join(format!("usbtree-test-{}-{}", name, process::id()));
        // leftovers from an earlier failed run
        let _ = fs::remove_dir_all(&bin_dir);
        fs::create_dir_all(&bin_dir).expect("create test bin dir");

        TestEnv {
            usbtree_exe: find_usbtree_exe(),
            bin_dir,
            isolated_path: true,
        }
    }

    fn command(&self, args: &[&str]) -> process::Command {
        let path = if self.isolated_path {
            self.bin_dir.display().to_string()
        } else {
            format!("{}:/usr/bin:/bin", self.bin_dir.display())
        };

        let mut cmd = process::Command::new(&self.usbtree_exe);
        cmd.args(args)
            .env("PATH", path)
            .env_remove("CLICOLOR_FORCE");
        cmd
    }

    /// Assert that calling *usbtree* with the specified arguments succeeds and return the output
    pub fn assert_success_and_get_output(&self, args: &[&str]) -> process::Output {
        let output = self.command(args).output().expect("usbtree output");

        // Check for exit status.
        if !output.status.success() {
            panic!("{}", format_exit_error(args, &output));
        }

        output
    }

    /// Assert that calling *usbtree* with the specified arguments produces the expected output.
    pub fn assert_output(&self, args: &[&str], expected: &str, contains: bool) {
        let output = self.assert_success_and_get_output(args);
        let actual = String::from_utf8_lossy(&output.stdout).to_string();

        // Compare actual output to expected output.
        if contains {
            if !actual.contains(expected) {
                panic!("{}", format_output_error(args, expected, &actual));
            }
        } else if expected != actual {
            panic!("{}", format_output_error(args, expected, &actual));
        }
    }

    /// Assert that calling *usbtree* with the specified arguments does not succeed, prints nothing to stdout and has `expected` in stderr.
    pub fn assert_failure_with_error(&self, args: &[&str], expected: &str) {
        let output = self.command(args).output().expect("usbtree output");

        if output.status.success() {
            panic!("error '{}' did not occur.", expected);
        }
        if !output.stdout.is_empty() {
            panic!(
                "`usbtree {}` printed to stdout on failure:\n{}",
                args.join(" "),
                String::from_utf8_lossy(&output.stdout)
            );
        }

        let actual_err = String::from_utf8_lossy(&output.stderr);
        // log lines may come before the error
        if !actual_err.contains(expected) {
            panic!("{}", format_output_error(args, expected, &actual_err));
        }
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.bin_dir);
    }
}
