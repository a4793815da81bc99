use std::iter::once;

/// one iteration's worth of samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleTick {
    /// the 1-based position of this tick within the run.
    pub index: usize,
    pub cpu_usage: f64,
    /// physical memory used, in gigabytes.
    pub phys_used: f64,
    /// virtual memory used, in gigabytes.
    pub vir_used: f64,
}

/// every tick observed so far in a run.
#[derive(Clone, Debug, Default)]
pub struct RunHistory {
    ticks: Vec<SampleTick>,
    cpu_total: f64,
}

// === impl SampleTick ===

impl SampleTick {
    /// the combined physical and virtual usage.
    pub fn combined(&self) -> f64 {
        self.phys_used + self.vir_used
    }
}

// === impl RunHistory ===

impl RunHistory {
    /// the most ticks reserved up front. longer runs grow as they go.
    const RESERVE: usize = 1024;

    /// creates an empty history for a run of `samples` ticks.
    pub fn for_run(samples: u32) -> Self {
        let reserve = usize::try_from(samples).map_or(Self::RESERVE, |n| n.min(Self::RESERVE));
        Self {
            ticks: Vec::with_capacity(reserve),
            cpu_total: 0.0,
        }
    }

    /// appends the next tick, returning a reference to it.
    ///
    /// the tick's index is assigned here.
    pub fn push(
        &mut self,
        SampleTick {
            cpu_usage,
            phys_used,
            vir_used,
            index: _,
        }: SampleTick,
    ) -> &SampleTick {
        let Self { ticks, cpu_total } = self;

        *cpu_total += cpu_usage;
        ticks.push(SampleTick {
            index: ticks.len() + 1,
            cpu_usage,
            phys_used,
            vir_used,
        });

        &ticks[ticks.len() - 1]
    }

    pub fn ticks(&self) -> &[SampleTick] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// the mean cpu usage over every tick so far, or zero before the first tick.
    pub fn running_cpu_average(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            n => self.cpu_total / n as f64,
        }
    }

    /// yields each tick alongside the change in combined memory usage since the tick
    /// before it. the first tick has no change.
    pub fn memory_deltas(&self) -> impl Iterator<Item = (&SampleTick, Option<f64>)> {
        let previous = once(None).chain(self.ticks.iter().map(Some));
        self.ticks.iter().zip(previous).map(|(tick, previous)| {
            let delta = previous.map(|previous| tick.combined() - previous.combined());
            (tick, delta)
        })
    }
}
