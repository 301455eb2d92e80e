pub mod chars;
pub mod dump;
pub mod error;
pub mod info;
pub mod list;
pub mod loader;
pub mod output;
pub mod search;
pub mod trace;


use error::CliError;

/// Print the error and exit with status 1.
pub fn or_exit<T>(result: Result<T, CliError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
