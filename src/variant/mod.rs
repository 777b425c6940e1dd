//! Variant records: locus identity, per-member genotype calls, transcript
//! annotations, and the classification façade.

pub mod genotype;

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::common;
use crate::err::{StateError, ValidationError};
use crate::inheritance::{self, InheritanceMode};
use crate::ped::Family;

pub use genotype::{Allele, CallInfo};

/// A single transcript-level annotation of a variant.
///
/// At least one of `feature` and `symbol` must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptAnnotation {
    /// Transcript / feature identifier, e.g. an ENST accession.
    pub feature: Option<String>,
    /// Gene symbol.
    pub symbol: Option<String>,
    /// Predicted consequence, e.g. `missense_variant`.
    pub consequence: String,
}

impl TranscriptAnnotation {
    /// Gene identifier used for grouping (feature id, falling back to the
    /// symbol).
    pub fn gene_id(&self) -> Option<&str> {
        self.feature.as_deref().or(self.symbol.as_deref())
    }

    /// Gene symbol (falling back to the feature id).
    pub fn gene_symbol(&self) -> Option<&str> {
        self.symbol.as_deref().or(self.feature.as_deref())
    }
}

/// A biallelic sequence variant, optionally bound to a family.
///
/// Locus identity is immutable; genotype calls and annotations are added
/// during construction of the record and validated eagerly.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Variant {
    /// Chromosome name (one of `1..22`, `X`, `Y`, `MT`).
    chrom: String,
    /// 1-based position.
    pos: u32,
    /// Reference allele.
    ref_allele: String,
    /// Alternate allele.
    alt_allele: String,
    /// Shared handle to the family the genotypes belong to.
    #[serde(skip)]
    family: Option<Arc<Family>>,
    /// Genotype calls by member id, in insertion order.
    calls: IndexMap<String, CallInfo>,
    /// Transcript annotations, in insertion order.
    annotations: Vec<TranscriptAnnotation>,
}

impl Variant {
    /// Create a new variant at the given locus.
    pub fn new(
        chrom: &str,
        pos: u32,
        ref_allele: &str,
        alt_allele: &str,
    ) -> Result<Self, ValidationError> {
        if !common::is_canonical_chrom(chrom) {
            return Err(ValidationError::UnknownChrom(chrom.to_string()));
        }
        if ref_allele.is_empty() {
            return Err(ValidationError::EmptyAllele("reference"));
        }
        if alt_allele.is_empty() {
            return Err(ValidationError::EmptyAllele("alternate"));
        }
        Ok(Self {
            chrom: chrom.to_string(),
            pos,
            ref_allele: ref_allele.to_string(),
            alt_allele: alt_allele.to_string(),
            family: None,
            calls: IndexMap::new(),
            annotations: Vec::new(),
        })
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn pos(&self) -> u32 {
        self.pos
    }

    pub fn ref_allele(&self) -> &str {
        &self.ref_allele
    }

    pub fn alt_allele(&self) -> &str {
        &self.alt_allele
    }

    /// The unique string key of the variant, e.g. `2:10G>A`.
    pub fn key(&self) -> String {
        format!(
            "{}:{}{}>{}",
            self.chrom, self.pos, self.ref_allele, self.alt_allele
        )
    }

    /// Bind the family the genotype calls belong to.
    pub fn add_family(&mut self, family: Arc<Family>) {
        self.family = Some(family);
    }

    pub fn family(&self) -> Option<&Family> {
        self.family.as_deref()
    }

    /// Record the genotype observation for one family member.
    ///
    /// `alleles` must be exactly two strings, each the reference allele, the
    /// alternate allele, or `"."`.  Re-adding a member's genotype replaces
    /// the previous observation.  On error the variant is left unchanged.
    pub fn add_genotype(
        &mut self,
        member_id: &str,
        alleles: &[&str],
        allele_depths: &[i32],
        genotype_quality: i32,
        total_depth: i32,
    ) -> Result<(), ValidationError> {
        let family = self.family.as_deref().ok_or(ValidationError::NoFamilySet)?;
        if family.member(member_id).is_none() {
            return Err(ValidationError::UnknownMember(member_id.to_string()));
        }
        if alleles.len() != 2 {
            return Err(ValidationError::BadGenotypeShape {
                member: member_id.to_string(),
                len: alleles.len(),
            });
        }
        let alleles = [
            self.parse_allele(member_id, alleles[0])?,
            self.parse_allele(member_id, alleles[1])?,
        ];
        if allele_depths.is_empty() {
            return Err(ValidationError::EmptyAlleleDepths(member_id.to_string()));
        }
        if allele_depths.iter().any(|depth| *depth < 0) || total_depth < 0 {
            return Err(ValidationError::NegativeDepth(member_id.to_string()));
        }
        if genotype_quality < 0 {
            return Err(ValidationError::NegativeQuality(member_id.to_string()));
        }
        self.calls.insert(
            member_id.to_string(),
            CallInfo {
                alleles,
                allele_depths: allele_depths.to_vec(),
                genotype_quality,
                total_depth,
            },
        );
        Ok(())
    }

    fn parse_allele(&self, member_id: &str, raw: &str) -> Result<Allele, ValidationError> {
        if raw == "." {
            Ok(Allele::Missing)
        } else if raw == self.ref_allele {
            Ok(Allele::Ref)
        } else if raw == self.alt_allele {
            Ok(Allele::Alt)
        } else {
            Err(ValidationError::UnexpectedAllele {
                member: member_id.to_string(),
                allele: raw.to_string(),
            })
        }
    }

    /// Append transcript annotations after validating each one.
    pub fn add_transcript_annotations(
        &mut self,
        annotations: Vec<TranscriptAnnotation>,
    ) -> Result<(), ValidationError> {
        for annotation in &annotations {
            if annotation.gene_id().is_none() {
                return Err(ValidationError::MissingGeneId);
            }
            if annotation.consequence.is_empty() {
                return Err(ValidationError::EmptyConsequence);
            }
        }
        self.annotations.extend(annotations);
        Ok(())
    }

    pub fn annotations(&self) -> &[TranscriptAnnotation] {
        &self.annotations
    }

    /// Gene identifiers for grouping, deduplicated in annotation order.
    pub fn gene_ids(&self) -> Vec<&str> {
        let mut genes = Vec::new();
        for annotation in &self.annotations {
            if let Some(gene) = annotation.gene_id() {
                if !genes.contains(&gene) {
                    genes.push(gene);
                }
            }
        }
        genes
    }

    /// Gene symbols, deduplicated in annotation order.
    pub fn gene_symbols(&self) -> Vec<&str> {
        let mut genes = Vec::new();
        for annotation in &self.annotations {
            if let Some(gene) = annotation.gene_symbol() {
                if !genes.contains(&gene) {
                    genes.push(gene);
                }
            }
        }
        genes
    }

    /// The recorded call for `member_id`, if any.
    pub fn call(&self, member_id: &str) -> Option<&CallInfo> {
        self.calls.get(member_id)
    }

    // -- genotype predicates ----------------------------------------------
    //
    // A member without a recorded call behaves like a fully missing call.

    pub fn is_hom_ref(&self, member_id: &str) -> bool {
        self.call(member_id).map_or(false, CallInfo::is_hom_ref)
    }

    pub fn is_hom_alt(&self, member_id: &str) -> bool {
        self.call(member_id).map_or(false, CallInfo::is_hom_alt)
    }

    pub fn is_het(&self, member_id: &str) -> bool {
        self.call(member_id).map_or(false, CallInfo::is_het)
    }

    pub fn has_alt(&self, member_id: &str) -> bool {
        self.call(member_id).map_or(false, CallInfo::has_alt)
    }

    pub fn has_no_alt(&self, member_id: &str) -> bool {
        !self.has_alt(member_id)
    }

    pub fn is_missing(&self, member_id: &str) -> bool {
        self.call(member_id).map_or(true, CallInfo::is_missing)
    }

    // -- classification façade --------------------------------------------

    /// Whether the variant segregates as autosomal dominant.
    ///
    /// `lenient` forgives hom-alt calls in the proband and affected
    /// relatives.  When any of the variant's gene symbols is contained in
    /// `low_penetrance_genes`, carrier checks on relatives are skipped
    /// (incomplete penetrance).
    pub fn matches_autosomal_dominant(
        &self,
        lenient: bool,
        low_penetrance_genes: &HashSet<String>,
    ) -> Result<bool, StateError> {
        inheritance::dominant::matches(self, lenient, low_penetrance_genes)
    }

    /// Whether the variant segregates as autosomal recessive.
    pub fn matches_autosomal_recessive(&self) -> Result<bool, StateError> {
        inheritance::recessive::matches(self)
    }

    /// Whether the variant is a de novo candidate in `member_id` (default:
    /// the proband).
    pub fn matches_denovo(&self, member_id: Option<&str>) -> Result<bool, StateError> {
        inheritance::denovo::matches(self, member_id)
    }

    /// Whether the variant segregates as X-linked recessive.
    pub fn matches_x_recessive(&self) -> Result<bool, StateError> {
        inheritance::x_linked::matches_recessive(self)
    }

    /// Whether the variant segregates as X-linked dominant.
    pub fn matches_x_dominant(&self) -> Result<bool, StateError> {
        inheritance::x_linked::matches_dominant(self)
    }

    /// Whether the variant indicates uniparental isodisomy from either
    /// parent, with parental call quality gates applied.
    pub fn matches_uniparental_isodisomy(&self) -> Result<bool, StateError> {
        inheritance::upd::matches_uniparental_isodisomy(self)
    }

    /// Whether the genotype configuration is consistent with paternal UPD
    /// without distinguishing iso- from heterodisomy.
    pub fn matches_paternal_uniparental_ambiguous(&self) -> Result<bool, StateError> {
        inheritance::upd::matches_paternal_uniparental_ambiguous(self)
    }

    /// Whether the genotype configuration is consistent with maternal UPD
    /// without distinguishing iso- from heterodisomy.
    pub fn matches_maternal_uniparental_ambiguous(&self) -> Result<bool, StateError> {
        inheritance::upd::matches_maternal_uniparental_ambiguous(self)
    }

    /// Whether the genotype configuration indicates paternal isodisomy.
    pub fn matches_paternal_uniparental_isodisomy(&self) -> Result<bool, StateError> {
        inheritance::upd::matches_paternal_uniparental_isodisomy(self)
    }

    /// Whether the genotype configuration indicates maternal isodisomy.
    pub fn matches_maternal_uniparental_isodisomy(&self) -> Result<bool, StateError> {
        inheritance::upd::matches_maternal_uniparental_isodisomy(self)
    }

    /// Whether the proband's allele pair equals the father's, as a multiset.
    pub fn alleles_identical_to_dad(&self) -> Result<bool, StateError> {
        inheritance::upd::alleles_identical_to_dad(self)
    }

    /// Whether the proband carries one allele from each parent, with the
    /// parents being genotypically distinct homozygotes.
    pub fn is_biparental_inheritance(&self) -> Result<bool, StateError> {
        inheritance::upd::is_biparental_inheritance(self)
    }

    /// Dispatch on an [`InheritanceMode`] tag, using default modifiers.
    pub fn matches_inheritance(&self, mode: InheritanceMode) -> Result<bool, StateError> {
        match mode {
            InheritanceMode::AutosomalDominant => {
                self.matches_autosomal_dominant(false, &HashSet::new())
            }
            InheritanceMode::AutosomalRecessive => self.matches_autosomal_recessive(),
            InheritanceMode::DeNovo => self.matches_denovo(None),
            InheritanceMode::XLinkedRecessive => self.matches_x_recessive(),
            InheritanceMode::XLinkedDominant => self.matches_x_dominant(),
            InheritanceMode::UniparentalIsodisomy => self.matches_uniparental_isodisomy(),
            InheritanceMode::PaternalUniparentalAmbiguous => {
                self.matches_paternal_uniparental_ambiguous()
            }
            InheritanceMode::MaternalUniparentalAmbiguous => {
                self.matches_maternal_uniparental_ambiguous()
            }
            InheritanceMode::PaternalUniparentalIsodisomy => {
                self.matches_paternal_uniparental_isodisomy()
            }
            InheritanceMode::MaternalUniparentalIsodisomy => {
                self.matches_maternal_uniparental_isodisomy()
            }
        }
    }

    /// All inheritance modes the variant matches, in declaration order.
    pub fn matching_inheritance_modes(&self) -> Result<Vec<InheritanceMode>, StateError> {
        use strum::IntoEnumIterator as _;

        let mut modes = Vec::new();
        for mode in InheritanceMode::iter() {
            if self.matches_inheritance(mode)? {
                modes.push(mode);
            }
        }
        Ok(modes)
    }
}
