pub const USAGE: &str = "\
Usage: smart-calc [OPTIONS] [LINE]

Evaluates LINE once and exits, or starts an interactive session.

Options:
  -v, --verbose   print tokens and RPN of every expression to stderr
      --no-banner do not print the greeting
  -h, --help      print this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    UnexpectedArgument(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option: {}", flag),
            ConfigError::UnexpectedArgument(arg) => write!(f, "Unexpected argument: {}", arg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Command line settings of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub verbose: bool,
    pub banner: bool,
    pub help: bool,
    /// Evaluated once instead of running the interactive session.
    pub line: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            banner: true,
            help: false,
            line: None,
        }
    }
}

/// `-8` is an operand, `-v` and `--x` are flags.
fn is_flag(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-')
        && matches!(chars.next(), Some(c) if c == '-' || c.is_ascii_alphabetic())
}

impl Config {
    /// Parses the arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();
        let mut only_positional = false;

        for arg in args.into_iter().map(Into::into) {
            if !only_positional && is_flag(&arg) {
                match arg.as_str() {
                    "-v" | "--verbose" => config.verbose = true,
                    "--no-banner" => config.banner = false,
                    "-h" | "--help" => config.help = true,
                    "--" => only_positional = true,
                    _ => return Err(ConfigError::UnknownFlag(arg)),
                }
                continue;
            }

            if config.line.is_some() {
                return Err(ConfigError::UnexpectedArgument(arg));
            }
            config.line = Some(arg);
        }

        Ok(config)
    }
}
