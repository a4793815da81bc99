use {
    crate::memory::MemoryCounters,
    std::{
        fs::File,
        io::{self, BufReader, Read},
        time::Duration,
    },
};

pub use self::{clock::*, host::*};

mod clock {
    use super::*;

    /// paces the sampling loop.
    pub trait Clock {
        fn sleep(&self, duration: Duration);
    }

    #[derive(Default)]
    pub struct SystemClock;

    impl<C: Clock> Clock for &C {
        fn sleep(&self, duration: Duration) {
            (*self).sleep(duration)
        }
    }

    impl Clock for SystemClock {
        fn sleep(&self, duration: Duration) {
            std::thread::sleep(duration)
        }
    }

    /// a mock clock, which records how long it was asked to sleep.
    #[cfg(test)]
    #[derive(Default)]
    pub struct MockClock {
        slept: std::cell::RefCell<Vec<Duration>>,
    }

    #[cfg(test)]
    impl MockClock {
        pub fn slept(&self) -> Vec<Duration> {
            self.slept.borrow().clone()
        }
    }

    #[cfg(test)]
    impl Clock for MockClock {
        fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }
}

/// abstracts over providers of host metrics.
mod host {
    use {
        super::*,
        nix::{
            errno::Errno,
            sys::{
                resource::{UsageWho, getrusage},
                sysinfo::sysinfo,
                utsname::uname,
            },
        },
        thiserror::Error,
    };

    /// a source of host metrics, with one capability per metric.
    pub trait Host {
        /// returns a reader over the kernel statistics table.
        fn stat(&self) -> io::Result<impl Read>;
        /// returns a reader over the processor descriptor.
        fn cpuinfo(&self) -> io::Result<impl Read>;
        /// returns a reader over the active-login table.
        fn logins(&self) -> io::Result<impl Read>;
        /// returns the system's memory counters.
        fn memory(&self) -> Result<MemoryCounters, HostError>;
        /// returns this process's peak resident set size, in kilobytes.
        fn peak_rss(&self) -> Result<u64, HostError>;
        /// returns the host's identity.
        fn identity(&self) -> Result<Identity, HostError>;
    }

    /// what the host says about itself.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Identity {
        pub os_name: String,
        pub hostname: String,
        pub version: String,
        pub release: String,
        pub arch: String,
    }

    #[derive(Debug, Error)]
    pub enum HostError {
        #[error(transparent)]
        Errno(#[from] Errno),
        #[error(transparent)]
        Io(#[from] io::Error),
    }

    /// metrics backed by procfs and system calls.
    #[derive(Default)]
    pub struct LinuxHost;

    // === impl LinuxHost ===

    impl LinuxHost {
        const STAT: &str = "/proc/stat";
        const CPU_INFO: &str = "/proc/cpuinfo";
        const UTMP: &str = "/var/run/utmp";
    }

    impl Host for LinuxHost {
        fn stat(&self) -> io::Result<impl Read> {
            File::open(Self::STAT).map(BufReader::new)
        }

        fn cpuinfo(&self) -> io::Result<impl Read> {
            File::open(Self::CPU_INFO).map(BufReader::new)
        }

        fn logins(&self) -> io::Result<impl Read> {
            File::open(Self::UTMP).map(BufReader::new)
        }

        fn memory(&self) -> Result<MemoryCounters, HostError> {
            let info = sysinfo()?;
            Ok(MemoryCounters {
                total_ram: info.ram_total(),
                free_ram: info.ram_unused(),
                total_swap: info.swap_total(),
                free_swap: info.swap_free(),
            })
        }

        fn peak_rss(&self) -> Result<u64, HostError> {
            let usage = getrusage(UsageWho::RUSAGE_SELF)?;
            Ok(usage.max_rss().max(0) as u64)
        }

        fn identity(&self) -> Result<Identity, HostError> {
            let uts = uname()?;
            let text = |s: &std::ffi::OsStr| s.to_string_lossy().into_owned();
            Ok(Identity {
                os_name: text(uts.sysname()),
                hostname: text(uts.nodename()),
                version: text(uts.version()),
                release: text(uts.release()),
                arch: text(uts.machine()),
            })
        }
    }
}

#[cfg(test)]
pub use self::mock::MockHost;
