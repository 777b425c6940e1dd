//! Autosomal recessive inheritance.

use crate::err::StateError;
use crate::variant::Variant;

use super::family_and_proband;

/// Decide whether `variant` segregates as autosomal recessive.
///
/// The proband must be hom-alt.  Affected relatives must be hom-alt or
/// fully missing (a half-missing call does not count).  Unaffected members
/// must not be hom-alt; carrier hets and hom-ref are fine.
pub(crate) fn matches(variant: &Variant) -> Result<bool, StateError> {
    let (family, proband) = family_and_proband(variant)?;

    if !variant.is_hom_alt(proband.id()) {
        return Ok(false);
    }

    for member in family.members() {
        if member.id() == proband.id() {
            continue;
        }
        if member.is_affected() {
            if !variant.is_hom_alt(member.id()) && !variant.is_missing(member.id()) {
                tracing::trace!(
                    "variant {} fails recessive: affected member {} is not hom-alt",
                    variant.key(),
                    member.id()
                );
                return Ok(false);
            }
        } else if variant.is_hom_alt(member.id()) {
            tracing::trace!(
                "variant {} fails recessive: unaffected member {} is hom-alt",
                variant.key(),
                member.id()
            );
            return Ok(false);
        }
    }

    Ok(true)
}
