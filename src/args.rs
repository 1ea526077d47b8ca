use clap::Parser;

pub mod types;
pub mod validation;

pub use types::*;

/// Parses the command line and validates it, exiting with clap's usage
/// error on bad input.
#[must_use]
pub fn args_checks() -> CleanArgs {
    match Args::parse().validate() {
        Ok(args) => args,
        Err(e) => {
            use clap::CommandFactory;
            Args::command()
                .error(clap::error::ErrorKind::ValueValidation, e)
                .exit()
        }
    }
}
