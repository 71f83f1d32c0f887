//! Print an Argon2 hash for seeding a `users.password_hash` value.
//!
//! Usage: `hash-password <password>`

use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(password) = std::env::args().nth(1).filter(|p| !p.is_empty()) else {
        eprintln!("usage: hash-password <password>");
        return ExitCode::FAILURE;
    };

    match server::auth::password::hash_password(&password) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
