//! Autosomal dominant inheritance.

use std::collections::HashSet;

use crate::err::StateError;
use crate::variant::Variant;

use super::family_and_proband;

/// Decide whether `variant` segregates as autosomal dominant.
///
/// The proband must carry alt without being hom-alt (a hom-alt proband is
/// only acceptable with `lenient`, as is a hom-alt affected relative).
/// Affected relatives must carry alt or be missing; unaffected relatives
/// must not carry alt.  When any of the variant's gene symbols is in
/// `low_penetrance_genes`, the relative checks are skipped so that
/// unaffected carriers do not disqualify the variant.
pub(crate) fn matches(
    variant: &Variant,
    lenient: bool,
    low_penetrance_genes: &HashSet<String>,
) -> Result<bool, StateError> {
    let (family, proband) = family_and_proband(variant)?;

    if !variant.has_alt(proband.id()) {
        return Ok(false);
    }
    if variant.is_hom_alt(proband.id()) && !lenient {
        return Ok(false);
    }

    let low_penetrance = variant
        .gene_symbols()
        .iter()
        .any(|gene| low_penetrance_genes.contains(*gene));
    if low_penetrance {
        return Ok(true);
    }

    for member in family.members() {
        if member.id() == proband.id() {
            continue;
        }
        if member.is_affected() {
            if variant.is_hom_alt(member.id()) && !lenient {
                tracing::trace!(
                    "variant {} fails dominant: affected member {} is hom-alt",
                    variant.key(),
                    member.id()
                );
                return Ok(false);
            }
            if !variant.has_alt(member.id()) && !variant.is_missing(member.id()) {
                return Ok(false);
            }
        } else if variant.has_alt(member.id()) {
            tracing::trace!(
                "variant {} fails dominant: unaffected member {} carries alt",
                variant.key(),
                member.id()
            );
            return Ok(false);
        }
    }

    Ok(true)
}
