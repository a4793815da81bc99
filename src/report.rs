//! composes one screen of the report.

use {
    crate::{
        history::RunHistory,
        memory::MemoryReading,
        meter::{cpu_bar, memory_bar},
        sampler::CpuReading,
        session::Session,
        source::Identity,
    },
    crossterm::{QueueableCommand, cursor, terminal},
    std::io::{self, Write},
};

/// writes report sections to an underlying writer.
pub struct Screen<W> {
    out: W,
    graphics: bool,
}

// === impl Screen ===

impl<W: Write> Screen<W> {
    const DIVIDER: &str = "-------------------------------------------------";

    pub fn new(out: W, graphics: bool) -> Self {
        Self { out, graphics }
    }

    /// homes the cursor and clears the terminal.
    pub fn clear(&mut self) -> io::Result<()> {
        self.out
            .queue(cursor::MoveTo(0, 0))?
            .queue(terminal::Clear(terminal::ClearType::All))
            .map(drop)
    }

    pub fn divider(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", Self::DIVIDER)
    }

    /// describes the run, and this process's own footprint.
    pub fn header(&mut self, samples: u32, delay: u32, rss: u64, index: usize) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "Number of samples: {samples} -- every {delay} seconds")?;
        writeln!(out, "Memory Usage: {rss} kb")?;
        writeln!(out, "Displaying sample {index} / {samples}")
    }

    /// one row per tick. totals are taken from the latest reading.
    pub fn memory(&mut self, history: &RunHistory, latest: &MemoryReading) -> io::Result<()> {
        let Self { out, graphics } = self;
        let MemoryReading {
            total_phys,
            total_vir,
            ..
        } = latest;

        writeln!(out, "### Memory (Physical Used/Total -- Virtual Used/Total) ###")?;
        for (tick, delta) in history.memory_deltas() {
            let bar = if *graphics {
                memory_bar(delta)
            } else {
                String::new()
            };
            writeln!(
                out,
                "{:.2} GB / {total_phys:.2} GB  --  {:.2} GB / {total_vir:.2} GB\t|{bar}",
                tick.phys_used, tick.vir_used,
            )?;
        }

        Ok(())
    }

    /// lists active sessions. an unreadable login table lists nothing.
    pub fn sessions(&mut self, sessions: Option<&[Session]>) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "### Sessions/Users ###")?;
        for Session { user, line, host } in sessions.unwrap_or_default() {
            writeln!(out, "{user}\t{line} ({host})")?;
        }

        Ok(())
    }

    /// the cpu's description, its running average usage, and one row per tick.
    pub fn cpu(&mut self, history: &RunHistory, cpu: &CpuReading) -> io::Result<()> {
        let Self { out, graphics } = self;
        let CpuReading { cores, model, .. } = cpu;

        writeln!(out, "### CPU ###")?;
        writeln!(out, "Model: {model}")?;
        writeln!(out, "Number of cores: {cores}")?;
        writeln!(
            out,
            "CPU Usage: {:.2}% (average over {} samples)",
            history.running_cpu_average(),
            history.len(),
        )?;

        for tick in history.ticks() {
            let bar = if *graphics {
                cpu_bar(tick.cpu_usage)
            } else {
                String::new()
            };
            writeln!(out, "\tSample {}: {bar} {:.2}%", tick.index, tick.cpu_usage)?;
        }

        Ok(())
    }

    /// the host's identity. nothing is written if it is unavailable.
    pub fn identity(&mut self, identity: Option<&Identity>) -> io::Result<()> {
        let Some(Identity {
            os_name,
            hostname,
            version,
            release,
            arch,
        }) = identity
        else {
            return Ok(());
        };

        let out = &mut self.out;
        writeln!(out, "### System Information ###")?;
        writeln!(out, "System Name: {os_name}")?;
        writeln!(out, "Machine Name: {hostname}")?;
        writeln!(out, "Version: {version}")?;
        writeln!(out, "Release: {release}")?;
        writeln!(out, "Architecture: {arch}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::history::SampleTick};

    fn new_screen(graphics: bool) -> Screen<Vec<u8>> {
        Screen::new(Vec::new(), graphics)
    }

    fn text(screen: Screen<Vec<u8>>) -> String {
        String::from_utf8(screen.into_inner()).unwrap()
    }

    fn history(ticks: &[(f64, f64, f64)]) -> RunHistory {
        let mut history = RunHistory::default();
        for (cpu_usage, phys_used, vir_used) in ticks {
            history.push(SampleTick {
                index: 0,
                cpu_usage: *cpu_usage,
                phys_used: *phys_used,
                vir_used: *vir_used,
            });
        }
        history
    }

    #[test]
    fn clear_homes_and_clears() {
        let mut screen = new_screen(false);
        screen.clear().unwrap();
        assert_eq!(text(screen), "\x1b[1;1H\x1b[2J");
    }

    #[test]
    fn header() {
        let mut screen = new_screen(false);
        screen.header(10, 1, 2048, 3).unwrap();
        assert_eq!(
            text(screen),
            "Number of samples: 10 -- every 1 seconds\n\
             Memory Usage: 2048 kb\n\
             Displaying sample 3 / 10\n"
        );
    }

    #[test]
    fn memory_rows() {
        let history = history(&[(0.0, 4.0, 5.0), (0.0, 4.02, 5.02), (0.0, 4.02, 5.02)]);
        let latest = MemoryReading {
            used_phys: 4.02,
            total_phys: 16.0,
            used_vir: 5.02,
            total_vir: 18.0,
        };

        let mut screen = new_screen(true);
        screen.memory(&history, &latest).unwrap();
        let text = text(screen);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "### Memory (Physical Used/Total -- Virtual Used/Total) ###");
        assert_eq!(lines[1], "4.00 GB / 16.00 GB  --  5.00 GB / 18.00 GB\t|o");
        assert!(lines[2].starts_with("4.02 GB / 16.00 GB  --  5.02 GB / 18.00 GB\t|#"));
        assert!(lines[2].ends_with('*'));
        assert!(lines[3].ends_with("\t|o"));
    }

    #[test]
    fn memory_rows_without_graphics() {
        let history = history(&[(0.0, 1.0, 1.0), (0.0, 2.0, 2.0)]);
        let mut screen = new_screen(false);
        screen.memory(&history, &MemoryReading::default()).unwrap();
        assert!(text(screen).lines().skip(1).all(|line| line.ends_with("\t|")));
    }

    #[test]
    fn sessions() {
        let sessions = [Session {
            user: "kate".to_owned(),
            line: "pts/0".to_owned(),
            host: "laptop".to_owned(),
        }];

        let mut screen = new_screen(false);
        screen.sessions(Some(sessions.as_slice())).unwrap();
        assert_eq!(text(screen), "### Sessions/Users ###\nkate\tpts/0 (laptop)\n");

        let mut screen = new_screen(false);
        screen.sessions(None).unwrap();
        assert_eq!(text(screen), "### Sessions/Users ###\n");
    }

    #[test]
    fn cpu_block() {
        let history = history(&[(10.0, 0.0, 0.0), (30.5, 0.0, 0.0)]);
        let cpu = CpuReading {
            cores: 4,
            usage: 30.5,
            model: "toaster".to_owned(),
        };

        let mut screen = new_screen(true);
        screen.cpu(&history, &cpu).unwrap();
        let bar = |n| "|".repeat(n);
        assert_eq!(
            text(screen),
            format!(
                "### CPU ###\n\
                 Model: toaster\n\
                 Number of cores: 4\n\
                 CPU Usage: 20.25% (average over 2 samples)\n\
                 \tSample 1: {} 10.00%\n\
                 \tSample 2: {} 30.50%\n",
                bar(13),
                bar(33),
            )
        );
    }

    #[test]
    fn cpu_rows_without_graphics() {
        let history = history(&[(12.346, 0.0, 0.0)]);
        let mut screen = new_screen(false);
        screen.cpu(&history, &CpuReading::default()).unwrap();
        assert!(text(screen).ends_with("\tSample 1:  12.35%\n"));
    }

    #[test]
    fn identity() {
        let identity = Identity {
            os_name: "Linux".to_owned(),
            hostname: "box".to_owned(),
            version: "#1 SMP".to_owned(),
            release: "6.1.0".to_owned(),
            arch: "x86_64".to_owned(),
        };

        let mut screen = new_screen(false);
        screen.identity(Some(&identity)).unwrap();
        assert_eq!(
            text(screen),
            "### System Information ###\n\
             System Name: Linux\n\
             Machine Name: box\n\
             Version: #1 SMP\n\
             Release: 6.1.0\n\
             Architecture: x86_64\n"
        );
    }

    #[test]
    fn identity_unavailable() {
        let mut screen = new_screen(false);
        screen.identity(None).unwrap();
        assert_eq!(text(screen), "");
    }
}
