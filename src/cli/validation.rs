use crate::cli::args::{CliArgs, Command};

pub fn validate(args: &CliArgs) -> Result<(), String> {
    match &args.command {
        Command::Generate { page_size, .. } => {
            if let Some(0) = page_size {
                return Err("invalid page-size, expected positive integer".to_string());
            }
        }
    }
    Ok(())
}
