use {
    std::{
        io::{self, BufRead, BufReader, Read},
        num::ParseIntError,
        str::FromStr,
    },
    thiserror::Error,
};

pub use self::{
    cpu_time::{CpuTime, Measurement},
    user_hz::UserHz,
};

mod cpu_time;
mod user_hz;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum EntryParseError {
    #[error("missing aggregate cpu entry")]
    Missing,
    #[error("unrecognized entry kind: {kind}")]
    UnrecognizedEntry { kind: String },
    #[error("invalid time value: {0}")]
    UserHzParse(#[from] ParseIntError),
    #[error("expected at least 7 cpu times, found {found}")]
    CpuTime { found: usize },
}

#[derive(Debug, Error)]
pub enum StatReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Entry(#[from] EntryParseError),
}

// === impl CpuTime ===

impl CpuTime {
    /// reads the aggregate "cpu" entry from a `/proc/stat` table.
    ///
    /// the kernel always places the aggregate entry on the first line; the per-cpu
    /// entries and the remaining counters that follow it are not consulted.
    pub fn read(stats: impl Read) -> Result<Self, StatReadError> {
        let mut first = String::new();
        BufReader::new(stats).read_line(&mut first)?;
        first.parse::<Self>().map_err(StatReadError::from)
    }
}

impl FromStr for CpuTime {
    type Err = EntryParseError;
    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let tokens = entry.split_whitespace().collect::<Vec<_>>();
        let [kind, times @ ..] = tokens.as_slice() else {
            return Err(EntryParseError::Missing);
        };

        if *kind != "cpu" {
            return Err(EntryParseError::UnrecognizedEntry {
                kind: (*kind).to_owned(),
            });
        }

        times
            .iter()
            .map(|t| t.parse::<UserHz>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(EntryParseError::UserHzParse)
            .and_then(CpuTime::try_from)
    }
}
