use clap::Parser;

/// Show the current time against the 5-hour mark and the commit rule in force.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_no_arguments() {
        assert!(Cli::try_parse_from(["check-time"]).is_ok());
    }

    #[test]
    fn rejects_positional_and_unknown_arguments() {
        assert!(Cli::try_parse_from(["check-time", "11:30"]).is_err());
        assert!(Cli::try_parse_from(["check-time", "--start", "11:30"]).is_err());
    }
}
