//! Shared scaffolding for module tests.

use std::sync::Arc;

use crate::ped::{Family, FamilyMember, Sex};
use crate::variant::{TranscriptAnnotation, Variant};

pub(crate) const FAMILY_ID: &str = "FAM001";

pub(crate) fn member(id: &str, sex: Sex, affected: bool) -> FamilyMember {
    FamilyMember::new(id, FAMILY_ID, sex, affected)
}

pub(crate) fn child(
    id: &str,
    sex: Sex,
    affected: bool,
    mum: Option<&FamilyMember>,
    dad: Option<&FamilyMember>,
) -> FamilyMember {
    let mut child = member(id, sex, affected);
    if let Some(mum) = mum {
        child.set_mum(mum).unwrap();
    }
    if let Some(dad) = dad {
        child.set_dad(dad).unwrap();
    }
    child
}

pub(crate) fn family_of(members: Vec<FamilyMember>, proband_id: &str) -> Arc<Family> {
    let mut family = Family::new(FAMILY_ID);
    for member in members {
        family.add_member(member).unwrap();
    }
    family.set_proband(proband_id).unwrap();
    Arc::new(family)
}

/// Trio with an affected proband; parent statuses as given.
pub(crate) fn trio(proband_sex: Sex, mum_affected: bool, dad_affected: bool) -> Arc<Family> {
    let mum = member("mum", Sex::Female, mum_affected);
    let dad = member("dad", Sex::Male, dad_affected);
    let proband = child("proband", proband_sex, true, Some(&mum), Some(&dad));
    family_of(vec![mum, dad, proband], "proband")
}

/// Trio with unaffected parents and a male proband.
pub(crate) fn trio_family() -> Arc<Family> {
    trio(Sex::Male, false, false)
}

/// Trio plus one full sibling of the proband.
pub(crate) fn trio_with_sibling(
    proband_sex: Sex,
    mum_affected: bool,
    dad_affected: bool,
    sibling_sex: Sex,
    sibling_affected: bool,
) -> Arc<Family> {
    let mum = member("mum", Sex::Female, mum_affected);
    let dad = member("dad", Sex::Male, dad_affected);
    let proband = child("proband", proband_sex, true, Some(&mum), Some(&dad));
    let sibling = child("sibling", sibling_sex, sibling_affected, Some(&mum), Some(&dad));
    family_of(vec![mum, dad, proband, sibling], "proband")
}

pub(crate) fn singleton(proband_sex: Sex) -> Arc<Family> {
    family_of(vec![member("proband", proband_sex, true)], "proband")
}

pub(crate) fn duo_with_mum(proband_sex: Sex, mum_affected: bool) -> Arc<Family> {
    let mum = member("mum", Sex::Female, mum_affected);
    let proband = child("proband", proband_sex, true, Some(&mum), None);
    family_of(vec![mum, proband], "proband")
}

pub(crate) fn duo_with_dad(proband_sex: Sex, dad_affected: bool) -> Arc<Family> {
    let dad = member("dad", Sex::Male, dad_affected);
    let proband = child("proband", proband_sex, true, None, Some(&dad));
    family_of(vec![dad, proband], "proband")
}

/// A `G>A` variant at the given locus, bound to `family`.
pub(crate) fn variant(family: &Arc<Family>, chrom: &str, pos: u32) -> Variant {
    let mut variant = Variant::new(chrom, pos, "G", "A").unwrap();
    variant.add_family(Arc::clone(family));
    variant
}

/// Record a genotype with unremarkable depths and quality.
pub(crate) fn gt(variant: &mut Variant, member_id: &str, alleles: [&str; 2]) {
    variant
        .add_genotype(member_id, &alleles, &[10, 2], 99, 20)
        .unwrap();
}

/// Record a genotype with explicit depths and quality.
pub(crate) fn gt_full(
    variant: &mut Variant,
    member_id: &str,
    alleles: [&str; 2],
    allele_depths: &[i32],
    genotype_quality: i32,
    total_depth: i32,
) {
    variant
        .add_genotype(
            member_id,
            &alleles,
            allele_depths,
            genotype_quality,
            total_depth,
        )
        .unwrap();
}

/// Annotate the variant with a single missense transcript of `feature`.
pub(crate) fn annotate(variant: &mut Variant, feature: &str) {
    variant
        .add_transcript_annotations(vec![TranscriptAnnotation {
            feature: Some(feature.to_string()),
            symbol: None,
            consequence: String::from("missense_variant"),
        }])
        .unwrap();
}
