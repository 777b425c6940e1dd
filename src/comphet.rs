//! Compound heterozygous candidate discovery and genuine-pair filtering.
//!
//! Works in two phases over a set of variants for one family: phase 1
//! collects per-gene candidates the proband carries heterozygously, phase 2
//! keeps only the unordered pairs with a plausible trans configuration (one
//! allele from each parent) that also survive the sibling refinements.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools as _;

use crate::common;
use crate::err::{StateError, ValidationError};
use crate::ped::{Family, FamilyMember, Sex};
use crate::variant::Variant;

/// Possible exclusive parental origin of one variant's alt allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// The parent carries alt and the other parent does not.
    Observed,
    /// The parent's genotype is uninformative while the other parent has no
    /// alt, so the origin is assumed rather than observed.
    Assumed,
    /// Incompatible with exclusive origin from this parent.
    No,
}

/// A set of variants observed in one family, with compound-het state.
#[derive(Debug, Clone, Default)]
pub struct VariantSet {
    /// Shared handle to the family.
    family: Option<Arc<Family>>,
    /// Variants by key, in insertion order.
    variants: IndexMap<String, Variant>,
    /// Gene id to candidate variant keys, built by phase 1.
    candidates: IndexMap<String, Vec<String>>,
    /// Keys of variants participating in at least one surviving pair.
    final_compound_hets: IndexSet<String>,
}

impl VariantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the family the variants belong to.
    pub fn add_family(&mut self, family: Arc<Family>) {
        self.family = Some(family);
    }

    pub fn family(&self) -> Option<&Family> {
        self.family.as_deref()
    }

    /// Add a variant.  A family must be bound first, the variant must be
    /// bound to the same family, and its key must be new to the set.
    pub fn add_variant(&mut self, variant: Variant) -> Result<(), ValidationError> {
        let family = self.family.as_deref().ok_or(ValidationError::NoFamilySet)?;
        let bound = variant.family().ok_or(ValidationError::NoFamilySet)?;
        if bound.family_id() != family.family_id() {
            return Err(ValidationError::FamilyMismatch {
                expected: family.family_id().to_string(),
                found: bound.family_id().to_string(),
            });
        }
        let key = variant.key();
        if self.variants.contains_key(&key) {
            return Err(ValidationError::DuplicateVariant(key));
        }
        self.variants.insert(key, variant);
        Ok(())
    }

    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.values()
    }

    /// Phase 1: rebuild the gene-to-candidates dictionary.
    ///
    /// A variant is a candidate for each of its genes when the proband
    /// carries alt without being hom-alt; on X the proband must further be
    /// female, on autosomes no unaffected member may be hom-alt.
    pub fn candidate_compound_hets(
        &mut self,
    ) -> Result<&IndexMap<String, Vec<String>>, StateError> {
        let family = self.family.as_deref().ok_or(StateError::NoFamily)?;
        let proband = family
            .proband()
            .ok_or_else(|| StateError::ProbandNotSet(family.family_id().to_string()))?;

        let mut candidates: IndexMap<String, Vec<String>> = IndexMap::new();
        for variant in self.variants.values() {
            if !is_candidate(variant, family, proband) {
                continue;
            }
            for gene in variant.gene_ids() {
                candidates
                    .entry(gene.to_string())
                    .or_default()
                    .push(variant.key());
            }
        }
        self.candidates = candidates;
        Ok(&self.candidates)
    }

    /// Phase 2: rebuild `final_compound_hets` from all surviving pairs.
    ///
    /// `include_denovo` keeps pairs whose trans configuration rests on both
    /// parental genotypes being missing (both alleles potentially de novo).
    pub fn filter_compound_hets(
        &mut self,
        include_denovo: bool,
    ) -> Result<&IndexSet<String>, StateError> {
        self.candidate_compound_hets()?;
        let family = self.family.as_deref().ok_or(StateError::NoFamily)?;
        let proband = family
            .proband()
            .ok_or_else(|| StateError::ProbandNotSet(family.family_id().to_string()))?;
        let mum_id = family.mum_of(proband.id()).map(|m| m.id().to_string());
        let dad_id = family.dad_of(proband.id()).map(|m| m.id().to_string());

        let mut surviving = IndexSet::new();
        for (gene, keys) in &self.candidates {
            for (key1, key2) in keys.iter().tuple_combinations() {
                let variant1 = &self.variants[key1];
                let variant2 = &self.variants[key2];
                let genuine = trans_configuration(
                    variant1,
                    variant2,
                    mum_id.as_deref(),
                    dad_id.as_deref(),
                    include_denovo,
                ) && siblings_compatible(
                    variant1,
                    variant2,
                    family,
                    proband,
                    mum_id.as_deref(),
                    dad_id.as_deref(),
                );
                if genuine {
                    surviving.insert(key1.clone());
                    surviving.insert(key2.clone());
                } else {
                    tracing::trace!(
                        "pair ({}, {}) in gene {} is not a genuine compound het",
                        key1,
                        key2,
                        gene
                    );
                }
            }
        }
        self.final_compound_hets = surviving;
        Ok(&self.final_compound_hets)
    }

    /// Keys of the variants in at least one surviving pair, as set by the
    /// most recent phase-2 (or unfiltered) computation.
    pub fn final_compound_hets(&self) -> &IndexSet<String> {
        &self.final_compound_hets
    }

    /// The surviving variants keyed by variant key.
    pub fn filtered_compound_hets_as_dict(&self) -> IndexMap<String, Variant> {
        self.final_dict()
    }

    /// Admit every variant of every gene with at least two candidates,
    /// without pair filtering, and return them keyed by variant key.
    /// Single-candidate genes produce nothing.
    pub fn unfiltered_compound_hets_as_dict(
        &mut self,
    ) -> Result<IndexMap<String, Variant>, StateError> {
        self.candidate_compound_hets()?;
        let mut surviving = IndexSet::new();
        for keys in self.candidates.values() {
            if keys.len() >= 2 {
                for key in keys {
                    surviving.insert(key.clone());
                }
            }
        }
        self.final_compound_hets = surviving;
        Ok(self.final_dict())
    }

    fn final_dict(&self) -> IndexMap<String, Variant> {
        self.final_compound_hets
            .iter()
            .filter_map(|key| {
                self.variants
                    .get(key)
                    .map(|variant| (key.clone(), variant.clone()))
            })
            .collect()
    }
}

fn is_candidate(variant: &Variant, family: &Family, proband: &FamilyMember) -> bool {
    if !variant.has_alt(proband.id()) || variant.is_hom_alt(proband.id()) {
        return false;
    }
    if common::is_chrom_x(variant.chrom()) {
        // Hemizygous male X never yields a trans configuration.
        proband.sex() == Sex::Female
    } else {
        family
            .unaffected_members()
            .all(|member| !variant.is_hom_alt(member.id()))
    }
}

/// Exclusive origin of `variant`'s alt from `parent`, given the `other`
/// parent.
fn origin_from(variant: &Variant, parent: Option<&str>, other: Option<&str>) -> Origin {
    let other_has_alt = other.map_or(false, |id| variant.has_alt(id));
    if other_has_alt {
        return Origin::No;
    }
    let parent_has_alt = parent.map_or(false, |id| variant.has_alt(id));
    if parent_has_alt {
        Origin::Observed
    } else if parent.map_or(true, |id| variant.is_missing(id)) {
        Origin::Assumed
    } else {
        Origin::No
    }
}

/// Whether one variant can come from mum only and the other from dad only.
fn trans_configuration(
    variant1: &Variant,
    variant2: &Variant,
    mum: Option<&str>,
    dad: Option<&str>,
    include_denovo: bool,
) -> bool {
    let assignments = [
        (origin_from(variant1, mum, dad), origin_from(variant2, dad, mum)),
        (origin_from(variant2, mum, dad), origin_from(variant1, dad, mum)),
    ];
    assignments
        .iter()
        .any(|(maternal, paternal)| match (maternal, paternal) {
            (Origin::No, _) | (_, Origin::No) => false,
            (Origin::Assumed, Origin::Assumed) => include_denovo,
            _ => true,
        })
}

/// Sibling refinements: affected siblings must carry alt (or be missing) on
/// both variants, unaffected siblings must not carry alt on both.
fn siblings_compatible(
    variant1: &Variant,
    variant2: &Variant,
    family: &Family,
    proband: &FamilyMember,
    mum: Option<&str>,
    dad: Option<&str>,
) -> bool {
    for member in family.members() {
        if member.id() == proband.id()
            || Some(member.id()) == mum
            || Some(member.id()) == dad
        {
            continue;
        }
        if member.is_affected() {
            for variant in [variant1, variant2] {
                if !variant.has_alt(member.id()) && !variant.is_missing(member.id()) {
                    return false;
                }
            }
        } else if variant1.has_alt(member.id()) && variant2.has_alt(member.id()) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::ped::Sex;
    use crate::testutil;
    use crate::variant::Variant;

    use super::VariantSet;

    /// Trio variant set with two `geneA` variants at pos 10 and 100, with
    /// the given genotype assignments `(member, alleles)` per variant.
    fn set_with_pair(
        family: &std::sync::Arc<crate::ped::Family>,
        genotypes1: &[(&str, [&str; 2])],
        genotypes2: &[(&str, [&str; 2])],
    ) -> VariantSet {
        let mut variant1 = testutil::variant(family, "2", 10);
        testutil::annotate(&mut variant1, "geneA");
        for (member, alleles) in genotypes1 {
            testutil::gt(&mut variant1, member, *alleles);
        }
        let mut variant2 = testutil::variant(family, "2", 100);
        testutil::annotate(&mut variant2, "geneA");
        for (member, alleles) in genotypes2 {
            testutil::gt(&mut variant2, member, *alleles);
        }

        let mut set = VariantSet::new();
        set.add_family(std::sync::Arc::clone(family));
        set.add_variant(variant1).unwrap();
        set.add_variant(variant2).unwrap();
        set
    }

    fn final_keys(set: &VariantSet) -> Vec<String> {
        let mut keys = set
            .final_compound_hets()
            .iter()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();
        keys
    }

    #[test]
    fn add_variant_validations() {
        let family = testutil::trio_family();
        let mut set = VariantSet::new();

        let variant = testutil::variant(&family, "2", 10);
        assert!(set.add_variant(variant.clone()).is_err());

        set.add_family(std::sync::Arc::clone(&family));
        let unbound = Variant::new("2", 10, "G", "A").unwrap();
        assert!(set.add_variant(unbound).is_err());

        set.add_variant(variant.clone()).unwrap();
        assert!(matches!(
            set.add_variant(variant),
            Err(crate::err::ValidationError::DuplicateVariant(_))
        ));
    }

    #[test]
    fn candidate_pair_autosome_trio() {
        let family = testutil::trio(Sex::Female, false, false);
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
            ],
        );

        let candidates = set.candidate_compound_hets().unwrap();
        assert_eq!(candidates["geneA"].len(), 2);
    }

    #[test]
    fn candidate_single_variant_gene_yields_nothing() {
        let family = testutil::trio(Sex::Female, false, false);
        let mut variant = testutil::variant(&family, "2", 10);
        testutil::annotate(&mut variant, "geneA");
        testutil::gt(&mut variant, "proband", ["G", "A"]);
        testutil::gt(&mut variant, "mum", ["G", "A"]);
        testutil::gt(&mut variant, "dad", ["G", "G"]);

        let mut set = VariantSet::new();
        set.add_family(std::sync::Arc::clone(&family));
        set.add_variant(variant).unwrap();

        set.candidate_compound_hets().unwrap();
        assert_eq!(set.candidates["geneA"].len(), 1);
        let dict = set.unfiltered_compound_hets_as_dict().unwrap();
        assert!(dict.is_empty());
        assert!(set.final_compound_hets().is_empty());
    }

    #[test]
    fn candidate_excludes_hom_alt_unaffected() {
        let family = testutil::trio(Sex::Female, false, false);
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["A", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
            ],
        );

        let candidates = set.candidate_compound_hets().unwrap();
        assert_eq!(candidates["geneA"].len(), 1);
    }

    #[test]
    fn candidate_excludes_hom_alt_proband() {
        let family = testutil::trio(Sex::Female, false, false);
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["A", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
            ],
        );

        let candidates = set.candidate_compound_hets().unwrap();
        assert_eq!(candidates["geneA"].len(), 1);
    }

    #[test]
    fn candidates_on_x_require_female_proband() {
        for (sex, expected_genes) in [(Sex::Female, 1), (Sex::Male, 0)] {
            let family = testutil::trio(sex, false, false);
            let mut variant1 = testutil::variant(&family, "X", 10);
            testutil::annotate(&mut variant1, "geneA");
            testutil::gt(&mut variant1, "proband", ["G", "A"]);
            testutil::gt(&mut variant1, "mum", ["G", "A"]);
            testutil::gt(&mut variant1, "dad", ["G", "G"]);
            let mut variant2 = testutil::variant(&family, "X", 100);
            testutil::annotate(&mut variant2, "geneA");
            testutil::gt(&mut variant2, "proband", ["G", "A"]);
            testutil::gt(&mut variant2, "mum", ["G", "G"]);
            testutil::gt(&mut variant2, "dad", ["G", "A"]);

            let mut set = VariantSet::new();
            set.add_family(std::sync::Arc::clone(&family));
            set.add_variant(variant1).unwrap();
            set.add_variant(variant2).unwrap();

            let candidates = set.candidate_compound_hets().unwrap();
            assert_eq!(candidates.len(), expected_genes, "proband sex {:?}", sex);

            // No male proband ever yields an X compound het.
            set.filter_compound_hets(true).unwrap();
            if sex == Sex::Male {
                assert!(set.final_compound_hets().is_empty());
            }
        }
    }

    #[test]
    fn genuine_pair_one_from_each_parent() {
        let family = testutil::trio_family();
        for (genotypes1, genotypes2) in [
            (
                [("proband", ["G", "A"]), ("mum", ["G", "A"]), ("dad", ["G", "G"])],
                [("proband", ["G", "A"]), ("mum", ["G", "G"]), ("dad", ["G", "A"])],
            ),
            // and the other way around
            (
                [("proband", ["G", "A"]), ("mum", ["G", "G"]), ("dad", ["G", "A"])],
                [("proband", ["G", "A"]), ("mum", ["G", "A"]), ("dad", ["G", "G"])],
            ),
        ] {
            let mut set = set_with_pair(&family, &genotypes1, &genotypes2);
            set.candidate_compound_hets().unwrap();
            set.filter_compound_hets(true).unwrap();

            assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);
            assert_eq!(
                set.filtered_compound_hets_as_dict()
                    .keys()
                    .cloned()
                    .collect::<std::collections::BTreeSet<_>>(),
                std::collections::BTreeSet::from([
                    String::from("2:10G>A"),
                    String::from("2:100G>A")
                ])
            );
        }
    }

    #[test]
    fn pair_rejected_when_one_parent_has_both() {
        let family = testutil::trio_family();
        // dad carries both variants
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
            ],
        );
        set.filter_compound_hets(true).unwrap();
        assert!(set.final_compound_hets().is_empty());

        // mum carries both variants
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
            ],
        );
        set.filter_compound_hets(true).unwrap();
        assert!(set.final_compound_hets().is_empty());
    }

    #[test]
    fn both_parents_missing_follows_include_denovo() {
        let family = testutil::trio_family();
        let genotypes = [
            ("proband", ["G", "A"]),
            ("mum", [".", "."]),
            ("dad", [".", "."]),
        ];
        let mut set = set_with_pair(&family, &genotypes, &genotypes);
        set.filter_compound_hets(true).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);

        let mut set = set_with_pair(&family, &genotypes, &genotypes);
        set.filter_compound_hets(false).unwrap();
        assert!(set.final_compound_hets().is_empty());
    }

    #[test]
    fn one_informative_parent_is_enough() {
        let family = testutil::trio_family();
        // dad missing on both; mum separates the two variants
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", [".", "."]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", [".", "."]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);

        // mum missing on both; dad separates the two variants
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", [".", "."]),
                ("dad", ["G", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", [".", "."]),
                ("dad", ["G", "G"]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);

        // dad missing on one, informative carrier on the other
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", [".", "."]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);

        // but both variants seen in mum with dad missing cannot be trans
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", [".", "."]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", [".", "."]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert!(set.final_compound_hets().is_empty());
    }

    #[test]
    fn more_than_two_candidates() {
        let family = testutil::trio_family();

        let mut set = VariantSet::new();
        set.add_family(std::sync::Arc::clone(&family));
        for (pos, mum, dad) in [
            (10, ["G", "A"], ["G", "G"]),
            (100, ["G", "A"], ["G", "G"]),
            (1000, ["G", "G"], ["G", "A"]),
        ] {
            let mut variant = testutil::variant(&family, "2", pos);
            testutil::annotate(&mut variant, "geneA");
            testutil::gt(&mut variant, "proband", ["G", "A"]);
            testutil::gt(&mut variant, "mum", mum);
            testutil::gt(&mut variant, "dad", dad);
            set.add_variant(variant).unwrap();
        }
        set.filter_compound_hets(false).unwrap();
        // Both maternal variants pair with the paternal one.
        assert_eq!(
            final_keys(&set),
            vec!["2:1000G>A", "2:100G>A", "2:10G>A"]
        );

        let mut set = VariantSet::new();
        set.add_family(std::sync::Arc::clone(&family));
        for (pos, mum, dad) in [
            (10, ["G", "A"], ["G", "G"]),
            (100, ["G", "A"], ["G", "A"]),
            (1000, ["G", "G"], ["G", "A"]),
        ] {
            let mut variant = testutil::variant(&family, "2", pos);
            testutil::annotate(&mut variant, "geneA");
            testutil::gt(&mut variant, "proband", ["G", "A"]);
            testutil::gt(&mut variant, "mum", mum);
            testutil::gt(&mut variant, "dad", dad);
            set.add_variant(variant).unwrap();
        }
        set.filter_compound_hets(false).unwrap();
        // The variant seen in both parents pairs with neither.
        assert_eq!(final_keys(&set), vec!["2:1000G>A", "2:10G>A"]);
    }

    #[test]
    fn affected_sibling_must_carry_both() {
        let family = testutil::trio_with_sibling(Sex::Male, false, false, Sex::Male, true);

        // sibling carries both variants
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
                ("sibling", ["G", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
                ("sibling", ["G", "A"]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);

        // sibling misses the second variant
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
                ("sibling", ["G", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
                ("sibling", ["G", "G"]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert!(set.final_compound_hets().is_empty());

        // missing sibling genotypes are permissive
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
                ("sibling", ["G", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
                ("sibling", [".", "."]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);

        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
                ("sibling", [".", "."]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
                ("sibling", [".", "."]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);
    }

    #[test]
    fn unaffected_sibling_must_not_carry_both() {
        let family = testutil::trio_with_sibling(Sex::Male, false, false, Sex::Male, false);

        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
                ("sibling", ["G", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
                ("sibling", ["G", "A"]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert!(set.final_compound_hets().is_empty());

        // carrying only one of the pair is fine
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
                ("sibling", ["G", "A"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
                ("sibling", ["G", "G"]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);

        // missing genotypes are permissive
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
                ("sibling", [".", "."]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
                ("sibling", [".", "."]),
            ],
        );
        set.filter_compound_hets(false).unwrap();
        assert_eq!(final_keys(&set), vec!["2:100G>A", "2:10G>A"]);
    }

    #[test]
    fn candidate_then_filter_is_idempotent() {
        let family = testutil::trio_family();
        let mut set = set_with_pair(
            &family,
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "A"]),
                ("dad", ["G", "G"]),
            ],
            &[
                ("proband", ["G", "A"]),
                ("mum", ["G", "G"]),
                ("dad", ["G", "A"]),
            ],
        );

        set.candidate_compound_hets().unwrap();
        set.filter_compound_hets(true).unwrap();
        let first = final_keys(&set);
        set.candidate_compound_hets().unwrap();
        set.filter_compound_hets(true).unwrap();
        assert_eq!(final_keys(&set), first);
    }
}
