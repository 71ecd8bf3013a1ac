//! Simulator configuration.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator: superscalar width and ROB capacity for the [`Core`](crate::core::cpu::Core),
//! and geometry plus JEDEC-style timing constants for the
//! [`Dram`](crate::dram::controller::Dram) controller.
//!
//! Configuration has no persisted form of its own; the CLI either uses
//! `Config::default()` or deserializes a JSON override with [`serde`].

use serde::Deserialize;

use crate::common::error::{SimError, SimResult};

/// Default configuration constants.
///
/// These are the design defaults from the timing model: a channel clock
/// divider of 4 simulator cycles per DRAM cycle, and JEDEC-style CAS/RAS/
/// precharge latencies in DRAM cycles.
mod defaults {
    /// Max instructions issued and retired per cycle.
    pub const SUPERSCALAR_WIDTH: usize = 4;
    /// Reorder buffer capacity.
    pub const ROB_SIZE: usize = 192;
    /// Number of DRAM channels, as a power-of-two exponent.
    pub const CHANNEL_BITS: u32 = 0;
    /// Number of banks per channel, as a power-of-two exponent.
    pub const BANK_BITS: u32 = 3;
    /// Simulator cycles per DRAM cycle.
    pub const CLOCK_DIV: i64 = 4;
    /// Column-to-column delay, in DRAM cycles.
    pub const T_CCD: i64 = 4;
    /// Column latency (RD/WR command to first data beat), in DRAM cycles.
    pub const T_CL: i64 = 11;
    /// Activate-to-column latency, in DRAM cycles.
    pub const T_RCD: i64 = 11;
    /// Precharge-to-activate latency, in DRAM cycles.
    pub const T_RP: i64 = 11;
    /// Activate-to-precharge latency, in DRAM cycles.
    pub const T_RAS: i64 = 28;
    /// Default simulation cycle budget (100 million cycles).
    pub const CYCLE_BUDGET: u64 = 100_000_000;
}

/// Fixed address-decode bit widths (spec §4.2): `offset_bits` and
/// `row_size_bits` are not configurable — only channel/bank counts are.
pub const OFFSET_BITS: u32 = 6;
/// Row size in address bits, below the channel/bank fields.
pub const ROW_SIZE_BITS: u32 = 13;

/// Root configuration for a simulation run.
///
/// # Examples
///
/// ```
/// use memsim_core::Config;
///
/// let config = Config::default();
/// assert_eq!(config.core.superscalar_width, 4);
/// assert_eq!(config.dram.t_ras, 28);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Core (ROB/issue/retire) parameters.
    #[serde(default)]
    pub core: CoreConfig,
    /// DRAM geometry and timing parameters.
    #[serde(default)]
    pub dram: DramConfig,
    /// Number of simulated cycles to run before stopping.
    #[serde(default = "Config::default_cycle_budget")]
    pub cycle_budget: u64,
}

impl Config {
    /// Returns the default simulation cycle budget.
    fn default_cycle_budget() -> u64 {
        defaults::CYCLE_BUDGET
    }

    /// Validates this configuration, returning a [`SimError::Config`] naming
    /// the first violated constraint.
    ///
    /// Checks performed:
    /// - `superscalar_width` and `rob_size` are nonzero.
    /// - `channel_bits + bank_bits + ROW_SIZE_BITS` does not reach 64, so the
    ///   row field of a decoded address is always well-defined.
    pub fn validate(&self) -> SimResult<()> {
        if self.core.superscalar_width == 0 {
            return Err(SimError::Config("superscalar_width must be positive".to_string()));
        }
        if self.core.rob_size == 0 {
            return Err(SimError::Config("rob_size must be positive".to_string()));
        }
        let geometry_bits = ROW_SIZE_BITS + self.dram.channel_bits + self.dram.bank_bits;
        if geometry_bits >= 64 {
            return Err(SimError::Config(format!(
                "channel_bits ({}) + bank_bits ({}) + row_size_bits ({ROW_SIZE_BITS}) must be < 64, got {geometry_bits}",
                self.dram.channel_bits, self.dram.bank_bits,
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            core: CoreConfig::default(),
            dram: DramConfig::default(),
            cycle_budget: defaults::CYCLE_BUDGET,
        }
    }
}

/// Core (ROB/issue/retire) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Max instructions issued and retired per cycle.
    #[serde(default = "CoreConfig::default_superscalar_width")]
    pub superscalar_width: usize,
    /// Reorder buffer capacity.
    #[serde(default = "CoreConfig::default_rob_size")]
    pub rob_size: usize,
}

impl CoreConfig {
    /// Returns the default superscalar issue/retire width.
    fn default_superscalar_width() -> usize {
        defaults::SUPERSCALAR_WIDTH
    }

    /// Returns the default reorder-buffer capacity.
    fn default_rob_size() -> usize {
        defaults::ROB_SIZE
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            superscalar_width: defaults::SUPERSCALAR_WIDTH,
            rob_size: defaults::ROB_SIZE,
        }
    }
}

/// DRAM geometry and JEDEC-style timing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DramConfig {
    /// Number of channels, as a power-of-two exponent.
    #[serde(default = "DramConfig::default_channel_bits")]
    pub channel_bits: u32,
    /// Number of banks per channel, as a power-of-two exponent.
    #[serde(default = "DramConfig::default_bank_bits")]
    pub bank_bits: u32,
    /// Simulator cycles per DRAM cycle.
    #[serde(default = "DramConfig::default_clock_div")]
    pub clock_div: i64,
    /// Column-to-column delay, in DRAM cycles.
    #[serde(default = "DramConfig::default_t_ccd")]
    pub t_ccd: i64,
    /// Column latency (CAS), in DRAM cycles.
    #[serde(default = "DramConfig::default_t_cl")]
    pub t_cl: i64,
    /// Activate-to-column latency (RAS-to-CAS), in DRAM cycles.
    #[serde(default = "DramConfig::default_t_rcd")]
    pub t_rcd: i64,
    /// Precharge-to-activate latency, in DRAM cycles.
    #[serde(default = "DramConfig::default_t_rp")]
    pub t_rp: i64,
    /// Activate-to-precharge latency, in DRAM cycles.
    #[serde(default = "DramConfig::default_t_ras")]
    pub t_ras: i64,
}

impl DramConfig {
    /// Returns the default channel-count exponent.
    fn default_channel_bits() -> u32 {
        defaults::CHANNEL_BITS
    }

    /// Returns the default bank-count exponent.
    fn default_bank_bits() -> u32 {
        defaults::BANK_BITS
    }

    /// Returns the default channel clock divider.
    fn default_clock_div() -> i64 {
        defaults::CLOCK_DIV
    }

    /// Returns the default column-to-column delay.
    fn default_t_ccd() -> i64 {
        defaults::T_CCD
    }

    /// Returns the default column (CAS) latency.
    fn default_t_cl() -> i64 {
        defaults::T_CL
    }

    /// Returns the default activate-to-column (RAS-to-CAS) latency.
    fn default_t_rcd() -> i64 {
        defaults::T_RCD
    }

    /// Returns the default precharge-to-activate latency.
    fn default_t_rp() -> i64 {
        defaults::T_RP
    }

    /// Returns the default activate-to-precharge latency.
    fn default_t_ras() -> i64 {
        defaults::T_RAS
    }
}

impl Default for DramConfig {
    fn default() -> Self {
        Self {
            channel_bits: defaults::CHANNEL_BITS,
            bank_bits: defaults::BANK_BITS,
            clock_div: defaults::CLOCK_DIV,
            t_ccd: defaults::T_CCD,
            t_cl: defaults::T_CL,
            t_rcd: defaults::T_RCD,
            t_rp: defaults::T_RP,
            t_ras: defaults::T_RAS,
        }
    }
}
