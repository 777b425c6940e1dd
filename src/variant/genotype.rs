//! Genotype calls and the predicates derived from them.
//!
//! Each diploid call is a pair of allele slots; every predicate is a pure
//! function of the slot pair.  A `.` slot is neither ref nor alt, so e.g.
//! `[Alt, Missing]` counts as carrying alt (and as het) while
//! `[Ref, Missing]` counts as carrying no alt without being hom-ref.

/// One allele slot of a diploid genotype call.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Allele {
    /// The reference allele.
    Ref,
    /// The alternate allele.
    Alt,
    /// No-call (`.`).
    Missing,
}

impl Allele {
    /// The opposite concrete allele; a no-call has none.
    pub fn opposite(self) -> Option<Allele> {
        match self {
            Allele::Ref => Some(Allele::Alt),
            Allele::Alt => Some(Allele::Ref),
            Allele::Missing => None,
        }
    }
}

/// Observed call of one family member at one variant site.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CallInfo {
    /// The two allele slots of the diploid call.
    pub alleles: [Allele; 2],
    /// Read depth per allele, reference first.
    pub allele_depths: Vec<i32>,
    /// Genotype quality.
    pub genotype_quality: i32,
    /// Total read coverage at the site.
    pub total_depth: i32,
}

impl CallInfo {
    /// Both slots are no-calls.
    pub fn is_missing(&self) -> bool {
        self.alleles.iter().all(|a| *a == Allele::Missing)
    }

    /// At least one slot carries the alternate allele.
    pub fn has_alt(&self) -> bool {
        self.alleles.contains(&Allele::Alt)
    }

    /// No slot carries the alternate allele (hom-ref, partially missing
    /// without alt, and fully missing all qualify).
    pub fn has_no_alt(&self) -> bool {
        !self.has_alt()
    }

    pub fn is_hom_ref(&self) -> bool {
        self.alleles.iter().all(|a| *a == Allele::Ref)
    }

    pub fn is_hom_alt(&self) -> bool {
        self.alleles.iter().all(|a| *a == Allele::Alt)
    }

    /// Carries alt without being hom-alt; a half-missing call with alt
    /// counts as het.
    pub fn is_het(&self) -> bool {
        self.has_alt() && !self.is_hom_alt()
    }

    /// The allele the call is homozygous for, if any.
    pub fn hom_allele(&self) -> Option<Allele> {
        match self.alleles {
            [Allele::Ref, Allele::Ref] => Some(Allele::Ref),
            [Allele::Alt, Allele::Alt] => Some(Allele::Alt),
            _ => None,
        }
    }

    pub fn carries(&self, allele: Allele) -> bool {
        self.alleles.contains(&allele)
    }

    /// Carries both concrete alleles.
    pub fn carries_both(&self) -> bool {
        self.carries(Allele::Ref) && self.carries(Allele::Alt)
    }

    /// Fraction of reads supporting the alternate allele, computed over the
    /// sum of `allele_depths`.  `None` when no alt depth is recorded or the
    /// depths sum to zero.
    pub fn alt_read_ratio(&self) -> Option<f64> {
        let total: i32 = self.allele_depths.iter().sum();
        if total <= 0 {
            return None;
        }
        let alt = *self.allele_depths.get(1)?;
        Some(f64::from(alt) / f64::from(total))
    }
}
