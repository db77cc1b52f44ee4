//! Restriction enzyme recognition-site search.
//!
//! Sites are literal `ACGT` patterns searched with a non-overlapping,
//! left-to-right scan: after a match the cursor jumps past the whole site, so
//! overlapping occurrences are counted once.

use std::borrow::Cow;
use std::fmt;

use dnakit_core::{DnakitError, Result, Sequence};

use crate::alphabet::StrictDnaAlphabet;
use crate::seq::ValidatedSeq;
use crate::types::DnaSequence;

/// A restriction enzyme and its recognition site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionEnzyme {
    /// Enzyme name (e.g., "EcoRI").
    pub name: Cow<'static, str>,
    /// Recognition site (uppercase `ACGT`).
    pub recognition_site: Cow<'static, [u8]>,
}

impl RestrictionEnzyme {
    const fn builtin(name: &'static str, site: &'static [u8]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            recognition_site: Cow::Borrowed(site),
        }
    }

    /// Build an enzyme from a caller-supplied name and site.
    ///
    /// # Errors
    ///
    /// Returns [`DnakitError::InvalidInput`] if the name is blank or the site
    /// is not a non-empty `ACGT` pattern.
    pub fn new(name: &str, site: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DnakitError::InvalidInput("enzyme name is empty".into()));
        }
        let site = ValidatedSeq::<StrictDnaAlphabet>::new(site).map_err(|e| {
            DnakitError::InvalidInput(format!("recognition site for {name}: {e}"))
        })?;
        Ok(Self {
            name: Cow::Owned(name.to_string()),
            recognition_site: Cow::Owned(site.into_bytes()),
        })
    }
}

/// The enzymes reported by default: EcoRI, HindIII, BamHI.
pub static DEFAULT_ENZYMES: [RestrictionEnzyme; 3] = [
    RestrictionEnzyme::builtin("EcoRI", b"GAATTC"),
    RestrictionEnzyme::builtin("HindIII", b"AAGCTT"),
    RestrictionEnzyme::builtin("BamHI", b"GGATCC"),
];

/// A curated set of 20 common six- and eight-cutters.
pub fn common_enzymes() -> Vec<RestrictionEnzyme> {
    const TABLE: [(&str, &[u8]); 20] = [
        ("EcoRI", b"GAATTC"),
        ("BamHI", b"GGATCC"),
        ("HindIII", b"AAGCTT"),
        ("NotI", b"GCGGCCGC"),
        ("XhoI", b"CTCGAG"),
        ("SalI", b"GTCGAC"),
        ("BglII", b"AGATCT"),
        ("NcoI", b"CCATGG"),
        ("NdeI", b"CATATG"),
        ("XbaI", b"TCTAGA"),
        ("SpeI", b"ACTAGT"),
        ("KpnI", b"GGTACC"),
        ("SacI", b"GAGCTC"),
        ("PstI", b"CTGCAG"),
        ("SphI", b"GCATGC"),
        ("ApaI", b"GGGCCC"),
        ("EcoRV", b"GATATC"),
        ("SmaI", b"CCCGGG"),
        ("HpaI", b"GTTAAC"),
        ("ScaI", b"AGTACT"),
    ];
    TABLE
        .into_iter()
        .map(|(name, site)| RestrictionEnzyme::builtin(name, site))
        .collect()
}

/// Build an enzyme table from `(name, site)` pairs, keeping their order.
pub fn parse_enzyme_table<'a, I>(pairs: I) -> Result<Vec<RestrictionEnzyme>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(name, site)| RestrictionEnzyme::new(name, site))
        .collect()
}

/// Resolve a table selector: `default` (or blank), `common`, or a
/// comma-separated list of `NAME=SITE` pairs.
///
/// # Errors
///
/// Returns [`DnakitError::InvalidInput`] for an unknown keyword, a pair
/// without `=`, or an invalid site.
pub fn enzyme_table(selector: &str) -> Result<Vec<RestrictionEnzyme>> {
    match selector.trim() {
        "" | "default" => Ok(DEFAULT_ENZYMES.to_vec()),
        "common" => Ok(common_enzymes()),
        pairs => pairs
            .split(',')
            .map(|pair| {
                let (name, site) = pair.split_once('=').ok_or_else(|| {
                    DnakitError::InvalidInput(format!(
                        "enzyme table '{}': expected default, common or NAME=SITE",
                        pair.trim()
                    ))
                })?;
                RestrictionEnzyme::new(name, site)
            })
            .collect(),
    }
}

/// Start offsets (0-indexed) of non-overlapping occurrences of `site`.
fn scan_site(seq: &[u8], site: &[u8]) -> Vec<usize> {
    let m = site.len();
    let mut hits = Vec::new();
    if m == 0 || m > seq.len() {
        return hits;
    }
    let mut i = 0;
    while i + m <= seq.len() {
        if &seq[i..i + m] == site {
            hits.push(i);
            i += m;
        } else {
            i += 1;
        }
    }
    hits
}

/// Occurrence count of one enzyme's site.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SiteCount {
    pub enzyme: String,
    pub count: usize,
}

/// One located recognition site.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SiteHit {
    pub enzyme: String,
    /// 1-based position of the first base of the site.
    pub position: usize,
}

/// Count each enzyme's sites, one entry per enzyme in table order (zero
/// counts included).
pub fn restriction_site_counts(seq: &DnaSequence, enzymes: &[RestrictionEnzyme]) -> Vec<SiteCount> {
    enzymes
        .iter()
        .map(|enz| SiteCount {
            enzyme: enz.name.to_string(),
            count: scan_site(seq.as_bytes(), &enz.recognition_site).len(),
        })
        .collect()
}

/// List every site as `(enzyme, 1-based position)`, grouped by enzyme in
/// table order and ascending by position within each enzyme.
pub fn restriction_site_positions(seq: &DnaSequence, enzymes: &[RestrictionEnzyme]) -> Vec<SiteHit> {
    enzymes
        .iter()
        .flat_map(|enz| {
            scan_site(seq.as_bytes(), &enz.recognition_site)
                .into_iter()
                .map(move |i| SiteHit {
                    enzyme: enz.name.to_string(),
                    position: i + 1,
                })
        })
        .collect()
}

/// Display adapter rendering counts as `EcoRI: 1, HindIII: 0, BamHI: 0`.
pub struct CountSummary<'a>(pub &'a [SiteCount]);

impl fmt::Display for CountSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", c.enzyme, c.count)?;
        }
        Ok(())
    }
}
