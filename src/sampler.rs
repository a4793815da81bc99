use {
    crate::{
        cpuinfo::CpuInfo,
        memory::MemoryReading,
        session::{Session, SessionReadError},
        source::{Host, Identity, LinuxHost},
        stat::{CpuTime, Measurement, StatReadError},
    },
    tracing::{debug, error},
};

/// reads point-in-time metrics from a [`Host`].
///
/// the last successful reading of each metric is kept. when a read fails, the failure is
/// reported and the stale reading is returned in its place.
pub struct Sampler<H = LinuxHost> {
    host: H,
    mode: CpuMode,
    /// the last observed cpu counters, for interval measurements.
    last: Option<CpuTime>,
    cpu: CpuReading,
    memory: MemoryReading,
    /// peak resident set size of this process, in kilobytes.
    rss: u64,
}

/// how cpu usage is computed from the kernel's counters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CpuMode {
    /// usage since boot, from each tick's counters alone.
    #[default]
    SinceBoot,
    /// usage since the previous tick. the first tick falls back to usage since boot.
    Interval,
}

/// what is known about the cpu as of the latest tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CpuReading {
    pub cores: u32,
    pub usage: f64,
    pub model: String,
}

// === impl Sampler ===

impl<H: Host> Sampler<H> {
    pub fn new(host: H, mode: CpuMode) -> Self {
        Self {
            host,
            mode,
            last: None,
            cpu: CpuReading::default(),
            memory: MemoryReading::default(),
            rss: 0,
        }
    }

    /// samples the cpu's usage and its descriptor.
    pub fn sample_cpu(&mut self) -> &CpuReading {
        if let Err(error) = self.read_usage() {
            error!(%error, "failed to read cpu statistics");
        }

        match self.host.cpuinfo().and_then(CpuInfo::read) {
            Ok(CpuInfo { model, cores }) => {
                if let Some(model) = model {
                    self.cpu.model = model;
                }
                if let Some(cores) = cores {
                    self.cpu.cores = cores;
                }
            }
            Err(error) => error!(%error, "failed to read cpu information"),
        }

        &self.cpu
    }

    fn read_usage(&mut self) -> Result<(), StatReadError> {
        let Self {
            host,
            mode,
            last,
            cpu,
            ..
        } = self;

        let now = CpuTime::read(host.stat()?)?;
        let since_boot = now.usage();
        let usage = match (*mode, last.replace(now)) {
            (CpuMode::Interval, Some(prev)) => Measurement::new(prev, now).usage().or(since_boot),
            _ => since_boot,
        };

        match usage {
            Some(usage) => cpu.usage = usage,
            None => debug!("no cpu time accounted for, keeping last usage"),
        }

        Ok(())
    }

    /// samples the system's memory usage.
    pub fn sample_memory(&mut self) -> MemoryReading {
        match self.host.memory() {
            Ok(counters) => self.memory = counters.into(),
            Err(error) => error!(%error, "failed to get memory information"),
        }

        self.memory
    }

    /// samples this process's peak memory footprint, in kilobytes.
    pub fn sample_self_memory(&mut self) -> u64 {
        match self.host.peak_rss() {
            Ok(rss) => self.rss = rss,
            Err(error) => error!(%error, "failed to get process resource usage"),
        }

        self.rss
    }

    /// lists the active sessions, or `None` if the login table could not be read.
    ///
    /// the table is only held open for the duration of this call.
    pub fn list_sessions(&self) -> Option<Vec<Session>> {
        let sessions = self
            .host
            .logins()
            .map_err(SessionReadError::from)
            .and_then(Session::list);

        sessions
            .inspect_err(|error| error!(%error, "failed to list sessions"))
            .ok()
    }

    /// reads the host's identity, or `None` if it is unavailable.
    pub fn system_identity(&self) -> Option<Identity> {
        self.host
            .identity()
            .inspect_err(|error| error!(%error, "failed to get system information"))
            .ok()
    }
}
