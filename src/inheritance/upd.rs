//! Uniparental disomy patterns and parental-origin utilities.

use crate::common;
use crate::err::StateError;
use crate::ped::{FamilyMember, Sex};
use crate::variant::{Allele, Variant};

use super::family_and_proband;

/// Minimal genotype quality required of both parental calls.
pub const UPD_MIN_PARENTAL_GQ: i32 = 20;

/// Minimal total read depth required of both parental calls.
pub const UPD_MIN_PARENTAL_DEPTH: i32 = 10;

/// The proband together with both parents, or `None` for pedigrees where a
/// parent is absent.
fn trio_of(
    variant: &Variant,
) -> Result<Option<(&FamilyMember, &FamilyMember, &FamilyMember)>, StateError> {
    let (family, proband) = family_and_proband(variant)?;
    Ok(
        match (family.mum_of(proband.id()), family.dad_of(proband.id())) {
            (Some(mum), Some(dad)) => Some((proband, mum, dad)),
            _ => None,
        },
    )
}

fn hom_allele_of(variant: &Variant, member_id: &str) -> Option<Allele> {
    variant.call(member_id).and_then(|call| call.hom_allele())
}

/// Isodisomy from `donor`: the proband is hom for an allele the het donor
/// carries, while the other parent is hom for the opposite allele.
fn directional_isodisomy(
    variant: &Variant,
    proband: &FamilyMember,
    donor: &FamilyMember,
    other: &FamilyMember,
) -> bool {
    let Some(allele) = hom_allele_of(variant, proband.id()) else {
        return false;
    };
    let Some(opposite) = allele.opposite() else {
        return false;
    };
    let donor_het = variant
        .call(donor.id())
        .map_or(false, |call| call.carries_both());
    donor_het && hom_allele_of(variant, other.id()) == Some(opposite)
}

/// UPD from `donor` without distinguishing iso- from heterodisomy: proband
/// and donor are hom for the same allele, the other parent is hom for the
/// opposite one.
fn directional_ambiguous(
    variant: &Variant,
    proband: &FamilyMember,
    donor: &FamilyMember,
    other: &FamilyMember,
) -> bool {
    let Some(allele) = hom_allele_of(variant, proband.id()) else {
        return false;
    };
    let Some(opposite) = allele.opposite() else {
        return false;
    };
    hom_allele_of(variant, donor.id()) == Some(allele)
        && hom_allele_of(variant, other.id()) == Some(opposite)
}

/// Decide whether `variant` indicates uniparental isodisomy from either
/// parent, gating on parental call quality.
pub(crate) fn matches_uniparental_isodisomy(variant: &Variant) -> Result<bool, StateError> {
    let (_, proband) = family_and_proband(variant)?;
    // Males are hemizygous on X, so isodisomy is not observable there.
    if common::is_chrom_x(variant.chrom()) && proband.sex() == Sex::Male {
        return Ok(false);
    }
    let Some((proband, mum, dad)) = trio_of(variant)? else {
        return Ok(false);
    };

    for parent in [mum, dad] {
        let passes = variant.call(parent.id()).map_or(false, |call| {
            call.genotype_quality >= UPD_MIN_PARENTAL_GQ
                && call.total_depth >= UPD_MIN_PARENTAL_DEPTH
        });
        if !passes {
            tracing::trace!(
                "variant {} fails isodisomy: parental call {} below quality gates",
                variant.key(),
                parent.id()
            );
            return Ok(false);
        }
    }

    Ok(directional_isodisomy(variant, proband, mum, dad)
        || directional_isodisomy(variant, proband, dad, mum))
}

pub(crate) fn matches_paternal_uniparental_isodisomy(
    variant: &Variant,
) -> Result<bool, StateError> {
    Ok(trio_of(variant)?
        .map_or(false, |(proband, mum, dad)| {
            directional_isodisomy(variant, proband, dad, mum)
        }))
}

pub(crate) fn matches_maternal_uniparental_isodisomy(
    variant: &Variant,
) -> Result<bool, StateError> {
    Ok(trio_of(variant)?
        .map_or(false, |(proband, mum, dad)| {
            directional_isodisomy(variant, proband, mum, dad)
        }))
}

pub(crate) fn matches_paternal_uniparental_ambiguous(
    variant: &Variant,
) -> Result<bool, StateError> {
    Ok(trio_of(variant)?
        .map_or(false, |(proband, mum, dad)| {
            directional_ambiguous(variant, proband, dad, mum)
        }))
}

pub(crate) fn matches_maternal_uniparental_ambiguous(
    variant: &Variant,
) -> Result<bool, StateError> {
    Ok(trio_of(variant)?
        .map_or(false, |(proband, mum, dad)| {
            directional_ambiguous(variant, proband, mum, dad)
        }))
}

/// Whether the proband's allele pair equals the father's, as a multiset.
pub(crate) fn alleles_identical_to_dad(variant: &Variant) -> Result<bool, StateError> {
    let (family, proband) = family_and_proband(variant)?;
    let Some(dad) = family.dad_of(proband.id()) else {
        return Ok(false);
    };
    let (Some(proband_call), Some(dad_call)) =
        (variant.call(proband.id()), variant.call(dad.id()))
    else {
        return Ok(false);
    };
    let mut proband_alleles = proband_call.alleles;
    let mut dad_alleles = dad_call.alleles;
    proband_alleles.sort();
    dad_alleles.sort();
    Ok(proband_alleles == dad_alleles)
}

/// Whether the proband carries one allele from each parent, the parents
/// being genotypically distinct homozygotes.
pub(crate) fn is_biparental_inheritance(variant: &Variant) -> Result<bool, StateError> {
    let Some((proband, mum, dad)) = trio_of(variant)? else {
        return Ok(false);
    };
    let proband_carries_both = variant
        .call(proband.id())
        .map_or(false, |call| call.carries_both());
    let (Some(from_mum), Some(from_dad)) = (
        hom_allele_of(variant, mum.id()),
        hom_allele_of(variant, dad.id()),
    ) else {
        return Ok(false);
    };
    Ok(proband_carries_both && from_mum != from_dad)
}
