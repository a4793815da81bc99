//! login accounting facilities.
//!
//! this file provides tools to decode the binary `utmp` table of active logins.

use {
    std::io::{self, ErrorKind, Read},
    thiserror::Error,
};

#[cfg(test)]
mod tests;

/// one active session from the login table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    pub user: String,
    pub line: String,
    pub host: String,
}

/// a raw record of the login table.
///
/// see `utmp(5)` for more information.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// the device name of the tty, less its "/dev/" prefix.
    pub line: String,
    /// the terminal name suffix, or inittab id.
    pub id: String,
    pub user: String,
    /// the hostname for remote logins.
    pub host: String,
}

#[derive(Debug, Error)]
pub enum SessionReadError {
    #[error("failed to read login table: {0}")]
    Io(#[from] io::Error),
}

// === impl Record ===

impl Record {
    /// the size of a glibc `struct utmp` on linux.
    pub const SIZE: usize = 384;

    const LINE: (usize, usize) = (8, 32);
    const ID: (usize, usize) = (40, 4);
    const USER: (usize, usize) = (44, 32);
    const HOST: (usize, usize) = (76, 256);

    /// the placeholder user of a getty waiting for a login.
    const LOGIN: &str = "LOGIN";
    /// the id of a run-level or boot-time housekeeping record.
    const HOUSEKEEPING: &str = "~~";

    pub fn decode(raw: &[u8; Record::SIZE]) -> Self {
        let field = |(offset, len): (usize, usize)| {
            let bytes = &raw[offset..offset + len];
            let end = bytes.iter().position(|b| *b == 0).unwrap_or(len);
            String::from_utf8_lossy(&bytes[..end]).into_owned()
        };

        Self {
            line: field(Self::LINE),
            id: field(Self::ID),
            user: field(Self::USER),
            host: field(Self::HOST),
        }
    }

    /// returns true if this record describes a real, logged-in session.
    pub fn is_session(&self) -> bool {
        let Self { user, id, .. } = self;
        !user.is_empty() && user != Self::LOGIN && id != Self::HOUSEKEEPING
    }
}

#[cfg(test)]
impl Record {
    /// encodes this record in the login table's binary layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut raw = vec![0; Self::SIZE];
        let mut put = |(offset, len): (usize, usize), value: &str| {
            let value = &value.as_bytes()[..value.len().min(len)];
            raw[offset..offset + value.len()].copy_from_slice(value);
        };
        put(Self::LINE, self.line.as_str());
        put(Self::ID, self.id.as_str());
        put(Self::USER, self.user.as_str());
        put(Self::HOST, self.host.as_str());
        raw
    }
}

impl From<Record> for Session {
    fn from(Record { line, user, host, .. }: Record) -> Self {
        Self { user, line, host }
    }
}

// === impl Session ===

impl Session {
    /// lists the active sessions in the given login table, in table order.
    ///
    /// a trailing partial record ends the scan.
    pub fn list(mut table: impl Read) -> Result<Vec<Self>, SessionReadError> {
        let mut sessions = Vec::<Self>::new();
        let mut raw = [0; Record::SIZE];

        loop {
            match table.read_exact(&mut raw) {
                Ok(()) => {}
                Err(error) if error.kind() == ErrorKind::UnexpectedEof => break,
                Err(error) => return Err(error.into()),
            }

            let record = Record::decode(&raw);
            if record.is_session() {
                sessions.push(record.into());
            }
        }

        Ok(sessions)
    }
}
