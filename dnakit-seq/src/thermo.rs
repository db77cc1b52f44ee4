//! Melting and annealing temperature estimates.
//!
//! Two regimes, chosen by length:
//!
//! - fewer than 14 bases: Wallace rule, `Tm = 2(A+T) + 4(G+C)`
//! - 14 bases or more: `Tm = 64.9 + 41 (G+C - 16.4) / length`

use std::fmt;

use dnakit_core::Sequence;

use crate::types::{format_gc_content, DnaSequence};

/// Length at which the salt-adjusted formula replaces the Wallace rule.
pub const LONG_SEQUENCE_THRESHOLD: usize = 14;

/// Which formula produced a melting temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TmMethod {
    /// `2(A+T) + 4(G+C)`, for sequences shorter than 14 bases.
    Wallace,
    /// `64.9 + 41 (G+C - 16.4) / length`, for 14 bases and longer.
    SaltAdjusted,
}

/// An estimated melting temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MeltingTemperature {
    pub celsius: f64,
    pub method: TmMethod,
}

impl fmt::Display for MeltingTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°C", self.celsius)
    }
}

/// Estimate the melting temperature of `seq`.
pub fn melting_temperature(seq: &DnaSequence) -> MeltingTemperature {
    let counts = seq.nucleotide_counts();
    let len = seq.len();
    if len < LONG_SEQUENCE_THRESHOLD {
        let tm = 2 * counts.at() + 4 * counts.gc();
        MeltingTemperature {
            celsius: tm as f64,
            method: TmMethod::Wallace,
        }
    } else {
        MeltingTemperature {
            celsius: 64.9 + 41.0 * ((counts.gc() as f64 - 16.4) / len as f64),
            method: TmMethod::SaltAdjusted,
        }
    }
}

/// Primer melting temperature reported against a template.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnnealingTemperature {
    /// Tm of the primer, by [`melting_temperature`].
    pub primer_tm: MeltingTemperature,
    /// GC content of the template, percent.
    pub template_gc_content: f64,
}

impl fmt::Display for AnnealingTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Primer Tm: {}, GC Content: {}",
            self.primer_tm,
            format_gc_content(self.template_gc_content)
        )
    }
}

/// Annealing estimate for `primer` on `template`.
pub fn annealing_temperature(template: &DnaSequence, primer: &DnaSequence) -> AnnealingTemperature {
    AnnealingTemperature {
        primer_tm: melting_temperature(primer),
        template_gc_content: template.gc_content(),
    }
}

/// One-argument annealing variant: the melting temperature of `seq` itself.
pub fn annealing_temperature_single(seq: &DnaSequence) -> MeltingTemperature {
    melting_temperature(seq)
}
