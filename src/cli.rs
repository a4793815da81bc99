//! command-line arguments.

use {crate::sampler::CpuMode, thiserror::Error, tracing::debug};

/// how many samples to take by default.
pub const DEFAULT_SAMPLES: u32 = 10;
/// how many seconds to wait between samples by default.
pub const DEFAULT_DELAY: u32 = 1;

pub const USAGE: &str = "\
Usage: sysmon [--system|-s] [--user|-u] [--graphics|-g] [--interval|-i]
              [--samples=N] [--tdelay=N] [samples [delay]]";

/// options controlling a run of the monitor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// the number of ticks to run for.
    pub samples: u32,
    /// seconds to sleep after each tick.
    pub delay: u32,
    /// show the memory and cpu blocks.
    pub system: bool,
    /// show the sessions block.
    pub users: bool,
    /// draw bars beside each sample.
    pub graphics: bool,
    /// how cpu usage is computed from the kernel's counters.
    pub cpu_mode: CpuMode,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum UsageError {
    #[error("Invalid amount given for samples.")]
    Samples,
    #[error("Invalid amount given for delay.")]
    Delay,
    #[error("Invalid flags given!")]
    Flag,
}

enum Token<'a> {
    System,
    User,
    Graphics,
    Interval,
    Samples(&'a str),
    Delay(&'a str),
    Other(&'a str),
}

// === impl Options ===

impl Default for Options {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            delay: DEFAULT_DELAY,
            system: true,
            users: true,
            graphics: false,
            cpu_mode: CpuMode::SinceBoot,
        }
    }
}

impl Options {
    /// parses options from the given arguments, excluding the program name.
    ///
    /// bare numbers are accepted in the last two positions: the second-to-last is the
    /// sample count, and the last is the delay.
    pub fn parse<I, S>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args = args.into_iter().collect::<Vec<_>>();
        let len = args.len();

        let mut options = Self::default();
        let (mut system, mut users) = (false, false);

        for (i, arg) in args.iter().enumerate() {
            let arg: &str = arg.as_ref();
            match Self::token(arg) {
                Token::System => system = true,
                Token::User => users = true,
                Token::Graphics => options.graphics = true,
                Token::Interval => options.cpu_mode = CpuMode::Interval,
                Token::Samples(n) => options.samples = amount(n).ok_or(UsageError::Samples)?,
                Token::Delay(n) => options.delay = amount(n).ok_or(UsageError::Delay)?,
                Token::Other(n) => match (amount(n), len - i) {
                    (Some(n), 2) => options.samples = n,
                    (Some(n), 1) => options.delay = n,
                    _ => {
                        debug!(flag = arg, "unrecognized argument");
                        return Err(UsageError::Flag);
                    }
                },
            }
        }

        // with neither block requested, show both.
        if system || users {
            options.system = system;
            options.users = users;
        }

        Ok(options)
    }

    fn token(arg: &str) -> Token<'_> {
        let value = |name: &str| {
            arg.strip_prefix("--")
                .or_else(|| arg.strip_prefix('-'))
                .and_then(|flag| flag.strip_prefix(name))
                .and_then(|rest| rest.strip_prefix('='))
        };

        match arg {
            "--system" | "-system" | "-s" => Token::System,
            "--user" | "-user" | "-u" => Token::User,
            "--graphics" | "-graphics" | "-g" => Token::Graphics,
            "--interval" | "-interval" | "-i" => Token::Interval,
            _ => {
                if let Some(n) = value("samples") {
                    Token::Samples(n)
                } else if let Some(n) = value("tdelay") {
                    Token::Delay(n)
                } else {
                    Token::Other(arg)
                }
            }
        }
    }
}

/// parses a non-empty, all-digit amount.
fn amount(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok()
}
