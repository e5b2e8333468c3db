//! Command-line surface of the plugin

pub mod args;

pub use args::{parse_args, Request};

/// Usage message shown for `--help` and after argument errors
pub const USAGE: &str = "\
kubectl secretvalue SECRET_NAME KEY [options]
Give the value of entry represented by the KEY in the Secret

Options:
    -n, --namespace string    The namespace containing the secret. Default value is the default namespace
    --help                    Show this usage message";

/// Print the usage message to stdout
pub fn print_usage() {
    println!("{}", USAGE);
}
