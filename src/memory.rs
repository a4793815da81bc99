//! memory accounting.

/// raw memory counters reported by the kernel, in bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MemoryCounters {
    pub total_ram: u64,
    pub free_ram: u64,
    pub total_swap: u64,
    pub free_swap: u64,
}

/// memory usage, in decimal gigabytes.
///
/// "virtual" memory is physical memory plus swap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryReading {
    pub used_phys: f64,
    pub total_phys: f64,
    pub used_vir: f64,
    pub total_vir: f64,
}

// === impl MemoryReading ===

impl MemoryReading {
    /// bytes per reported unit. these are decimal gigabytes, not gibibytes.
    const GB: f64 = 1_000_000_000.0;
}

impl From<MemoryCounters> for MemoryReading {
    fn from(
        MemoryCounters {
            total_ram,
            free_ram,
            total_swap,
            free_swap,
        }: MemoryCounters,
    ) -> Self {
        let gb = |bytes: u64| bytes as f64 / Self::GB;

        let used_phys = gb(total_ram.saturating_sub(free_ram));
        let total_phys = gb(total_ram);

        Self {
            used_phys,
            total_phys,
            used_vir: gb(total_swap.saturating_sub(free_swap)) + used_phys,
            total_vir: gb(total_swap) + total_phys,
        }
    }
}
