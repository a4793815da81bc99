use super::*;

/// how the system's cpus, in aggregate, have spent their time.
///
/// only the seven classic accounting buckets are kept. later kernels append steal and
/// guest times, which are not part of the total used here.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CpuTime {
    /// time spent in user mode.
    pub user: UserHz,
    /// time spent in user mode with low priority (nice).
    pub nice: UserHz,
    /// time spent in system mode.
    pub system: UserHz,
    /// time spent in the idle task.
    pub idle: UserHz,
    /// time waiting for i/o to complete.
    ///
    /// this value is not reliable, and may decrease in certain conditions.
    pub iowait: UserHz,
    /// time servicing interrupts.
    pub irq: UserHz,
    /// time servicing softirqs.
    pub softirq: UserHz,
}

/// a measurement of the difference between two [`CpuTime`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Measurement {
    delta: CpuTime,
}

// === impl CpuTime ===

impl CpuTime {
    /// the number of buckets a "cpu" entry must carry.
    pub const FIELDS: usize = 7;

    pub fn total(&self) -> UserHz {
        self.buckets().into_iter().sum()
    }

    /// returns the percentage of non-idle time since boot.
    ///
    /// NB: this is an absolute reading, not the usage over any particular interval.
    /// returns `None` if no time has been accounted for at all.
    pub fn usage(&self) -> Option<f64> {
        usage(self.idle, self.total())
    }

    fn buckets(self) -> [UserHz; Self::FIELDS] {
        let Self {
            user,
            nice,
            system,
            idle,
            iowait,
            irq,
            softirq,
        } = self;

        [user, nice, system, idle, iowait, irq, softirq]
    }
}

impl TryFrom<Vec<UserHz>> for CpuTime {
    type Error = EntryParseError;
    fn try_from(times: Vec<UserHz>) -> Result<Self, Self::Error> {
        let found = times.len();
        let [user, nice, system, idle, iowait, irq, softirq, ..] = times.as_slice() else {
            return Err(EntryParseError::CpuTime { found });
        };

        Ok(Self {
            user: *user,
            nice: *nice,
            system: *system,
            idle: *idle,
            iowait: *iowait,
            irq: *irq,
            softirq: *softirq,
        })
    }
}

// === impl Measurement ===

impl Measurement {
    /// measures the time spent between reading `a` and reading `b`.
    pub fn new(a: CpuTime, b: CpuTime) -> Self {
        let [user, nice, system, idle, iowait, irq, softirq] = {
            let (a, b) = (a.buckets(), b.buckets());
            std::array::from_fn(|i| b[i] - a[i])
        };

        Self {
            delta: CpuTime {
                user,
                nice,
                system,
                idle,
                iowait,
                irq,
                softirq,
            },
        }
    }

    /// returns the percentage of non-idle time within the interval.
    ///
    /// returns `None` if no time elapsed between the two readings.
    pub fn usage(&self) -> Option<f64> {
        let Self { delta } = self;
        usage(delta.idle, delta.total())
    }
}

fn usage(idle: UserHz, total: UserHz) -> Option<f64> {
    if total == UserHz::ZERO {
        return None;
    }

    let busy = total - idle;
    Some((busy / total) * 100.0)
}
