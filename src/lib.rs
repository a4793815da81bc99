//! a compact host monitor.

use {
    self::{
        cli::Options,
        history::{RunHistory, SampleTick},
        report::Screen,
        sampler::Sampler,
        source::{Clock, Host, LinuxHost, SystemClock},
    },
    std::{io, time::Duration},
    tracing::debug,
};

pub mod cli;
pub mod cpuinfo;
pub mod history;
pub mod memory;
pub mod meter;
pub mod report;
pub mod sampler;
pub mod session;
pub mod source;
/// kernel statistics facilities.
///
/// this file provides tools to interact with `/proc/stat`.
pub mod stat;


/// samples the host and reports on it, a fixed number of times.
pub struct App<H = LinuxHost, C = SystemClock> {
    options: Options,
    sampler: Sampler<H>,
    clock: C,
}

// === impl App ===

impl App {
    /// initializes a new application, observing this host.
    pub fn new(options: Options) -> Self {
        Self::with_sources(options, LinuxHost, SystemClock)
    }
}

impl<H: Host, C: Clock> App<H, C> {
    pub fn with_sources(options: Options, host: H, clock: C) -> Self {
        let sampler = Sampler::new(host, options.cpu_mode);
        Self {
            options,
            sampler,
            clock,
        }
    }

    /// runs the application, writing each tick's report to `out`.
    ///
    /// returns the run's history once every sample has been taken. failures to read
    /// metrics are logged and do not end the run; failures to write the report do.
    pub fn run(self, out: impl io::Write) -> io::Result<RunHistory> {
        let Self {
            options:
                Options {
                    samples,
                    delay,
                    system,
                    users,
                    graphics,
                    cpu_mode: _,
                },
            mut sampler,
            clock,
        } = self;

        debug!(samples, delay, system, users, graphics, "sampling");

        let mut screen = Screen::new(out, graphics);
        let mut history = RunHistory::for_run(samples);
        let pause = Duration::from_secs(delay.into());

        for index in 1..=samples as usize {
            let rss = sampler.sample_self_memory();

            screen.clear()?;
            screen.header(samples, delay, rss, index)?;
            screen.divider()?;
            // diagnostics from sampling must land after the clear.
            screen.flush()?;

            // memory and cpu are only sampled when they are shown.
            let (memory, cpu) = if system {
                (sampler.sample_memory(), sampler.sample_cpu().clone())
            } else {
                Default::default()
            };
            history.push(SampleTick {
                index,
                cpu_usage: cpu.usage,
                phys_used: memory.used_phys,
                vir_used: memory.used_vir,
            });

            if system {
                screen.memory(&history, &memory)?;
                screen.divider()?;
            }

            if users {
                let sessions = sampler.list_sessions();
                screen.sessions(sessions.as_deref())?;
                screen.divider()?;
            }

            if system {
                screen.cpu(&history, &cpu)?;
                screen.divider()?;
            }

            let identity = sampler.system_identity();
            screen.identity(identity.as_ref())?;
            screen.divider()?;
            screen.flush()?;

            clock.sleep(pause);
        }

        debug!(ticks = history.len(), "finished sampling");
        Ok(history)
    }
}
