//! X-linked recessive and dominant inheritance.
//!
//! Males are hemizygous on X outside the pseudoautosomal regions, so a
//! single alt allele is a full genotype for them while females need two for
//! a recessive presentation.

use crate::common;
use crate::err::StateError;
use crate::ped::Sex;
use crate::variant::Variant;

use super::family_and_proband;

/// Decide whether `variant` segregates as X-linked recessive.
pub(crate) fn matches_recessive(variant: &Variant) -> Result<bool, StateError> {
    if !common::is_chrom_x(variant.chrom()) {
        return Ok(false);
    }
    let (family, proband) = family_and_proband(variant)?;

    let proband_ok = match proband.sex() {
        Sex::Male => variant.has_alt(proband.id()),
        Sex::Female => variant.is_hom_alt(proband.id()),
    };
    if !proband_ok {
        return Ok(false);
    }

    for member in family.members() {
        if member.id() == proband.id() {
            continue;
        }
        let ok = match (member.sex(), member.is_affected()) {
            (Sex::Male, true) => {
                variant.has_alt(member.id()) || variant.is_missing(member.id())
            }
            (Sex::Male, false) => !variant.has_alt(member.id()),
            (Sex::Female, true) => {
                variant.is_hom_alt(member.id()) || variant.is_missing(member.id())
            }
            (Sex::Female, false) => !variant.is_hom_alt(member.id()),
        };
        if !ok {
            tracing::trace!(
                "variant {} fails X recessive on member {}",
                variant.key(),
                member.id()
            );
            return Ok(false);
        }
    }

    Ok(true)
}

/// Decide whether `variant` segregates as X-linked dominant.
pub(crate) fn matches_dominant(variant: &Variant) -> Result<bool, StateError> {
    if !common::is_chrom_x(variant.chrom()) {
        return Ok(false);
    }
    let (family, proband) = family_and_proband(variant)?;

    if !variant.has_alt(proband.id()) {
        return Ok(false);
    }
    // A hom-alt female presents recessively, not dominantly.
    if proband.sex() == Sex::Female && variant.is_hom_alt(proband.id()) {
        return Ok(false);
    }

    for member in family.members() {
        if member.id() == proband.id() {
            continue;
        }
        let ok = if member.is_affected() {
            variant.has_alt(member.id()) || variant.is_missing(member.id())
        } else {
            !variant.has_alt(member.id())
        };
        if !ok {
            tracing::trace!(
                "variant {} fails X dominant on member {}",
                variant.key(),
                member.id()
            );
            return Ok(false);
        }
    }

    // An affected male passes his only X to every daughter and never to a
    // son.
    for father in family.affected_male_members() {
        for son in family.sons_of(father.id()) {
            if variant.has_alt(son.id()) {
                return Ok(false);
            }
        }
        for daughter in family.daughters_of(father.id()) {
            if !daughter.is_affected() {
                return Ok(false);
            }
            if !variant.has_alt(daughter.id()) && !variant.is_missing(daughter.id()) {
                return Ok(false);
            }
        }
    }

    Ok(true)
}
