//! `/proc/cpuinfo` facilities.

use std::io::{self, BufRead, BufReader, Read};

/// what the processor descriptor says about the cpu.
///
/// fields are `None` when the descriptor carries no such record.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CpuInfo {
    pub model: Option<String>,
    pub cores: Option<u32>,
}

// === impl CpuInfo ===

impl CpuInfo {
    const MODEL: &str = "model name";
    const CORES: &str = "cpu cores";

    /// scans the descriptor for the first "model name" record, and the first "cpu cores"
    /// record that follows it.
    pub fn read(info: impl Read) -> io::Result<Self> {
        let mut found = Self::default();

        for line in BufReader::new(info).lines() {
            let line = line?;
            match found.model {
                None => found.model = Self::value(&line, Self::MODEL).map(str::to_owned),
                Some(_) => {
                    if let Some(cores) = Self::value(&line, Self::CORES) {
                        found.cores = cores.parse().ok();
                        break;
                    }
                }
            }
        }

        Ok(found)
    }

    /// returns the value of a `key : value` record, if the line is a `key` record.
    ///
    /// the value is everything after the first `:`, trimmed of surrounding whitespace. it
    /// is not cut short at any later `:`, and no leading space is kept.
    fn value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
        line.strip_prefix(key)
            .and_then(|rest| rest.split_once(':'))
            .map(|(_, value)| value.trim())
    }
}
