use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: pong-host [--config <file>] [--demo] [--ticks <n>] [--fast-opponent]

Runs the Pong engine at a fixed tick rate. By default, zero-delimited
postcard Control frames are read from stdin and Frame messages are written
to stdout.

Options:
  --config <file>    TOML host configuration
  --demo             Synthetic sweeping hand, frames logged instead of written
  --ticks <n>        Stop after n ticks
  --fast-opponent    Use the fast opponent controller
  -h, --help         Show this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub demo: bool,
    pub ticks: Option<u64>,
    pub fast_opponent: bool,
    pub help: bool,
}

/// Parse arguments (without the program name)
pub fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config requires a file path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--ticks" | "-t" => {
                let value = args.next().ok_or("--ticks requires a value")?;
                let ticks = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid --ticks value '{value}': {e}"))?;
                parsed.ticks = Some(ticks);
            }
            "--demo" => parsed.demo = true,
            "--fast-opponent" => parsed.fast_opponent = true,
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_all_flags() {
        let parsed = parse_args(args(&[
            "--config",
            "pong.toml",
            "--demo",
            "--ticks",
            "600",
            "--fast-opponent",
        ]))
        .unwrap();

        assert_eq!(parsed.config, Some(PathBuf::from("pong.toml")));
        assert!(parsed.demo);
        assert_eq!(parsed.ticks, Some(600));
        assert!(parsed.fast_opponent);
        assert!(!parsed.help);
    }

    #[test]
    fn test_missing_value() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--ticks"])).is_err());
    }

    #[test]
    fn test_bad_values() {
        assert!(parse_args(args(&["--ticks", "-3"])).is_err());
        assert!(parse_args(args(&["--turbo"])).is_err());
    }
}
