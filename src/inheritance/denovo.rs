//! De novo variants.

use crate::err::StateError;
use crate::variant::Variant;

/// Maximal fraction of alternate reads tolerated in a parental call.
///
/// Parents with an alt read fraction at or above this are likely mosaic or
/// under-called rather than true non-carriers, so the de novo call is
/// rejected.
pub const DENOVO_MAX_PARENTAL_ALT_RATIO: f64 = 0.05;

/// Decide whether `variant` is a de novo candidate in `member_id` (default:
/// the proband).
///
/// Both parents of the index member must be present in the family;
/// singleton and single-parent pedigrees are rejected.  The index must
/// carry alt, each parent must carry no alt (missingness qualifies), and
/// neither parental call may exceed the alt read fraction threshold.
pub(crate) fn matches(variant: &Variant, member_id: Option<&str>) -> Result<bool, StateError> {
    let family = variant.family().ok_or(StateError::NoFamily)?;
    let index = match member_id {
        Some(id) => family
            .member(id)
            .ok_or_else(|| StateError::UnknownMember(id.to_string()))?,
        None => family
            .proband()
            .ok_or_else(|| StateError::ProbandNotSet(family.family_id().to_string()))?,
    };

    let (Some(mum), Some(dad)) = (family.mum_of(index.id()), family.dad_of(index.id())) else {
        tracing::trace!(
            "variant {} fails de novo: member {} lacks both parents",
            variant.key(),
            index.id()
        );
        return Ok(false);
    };

    if !variant.has_alt(index.id()) {
        return Ok(false);
    }

    for parent in [mum, dad] {
        if variant.has_alt(parent.id()) {
            return Ok(false);
        }
        if let Some(call) = variant.call(parent.id()) {
            if call
                .alt_read_ratio()
                .map_or(false, |ratio| ratio >= DENOVO_MAX_PARENTAL_ALT_RATIO)
            {
                tracing::trace!(
                    "variant {} fails de novo: alt read fraction in parent {} too high",
                    variant.key(),
                    parent.id()
                );
                return Ok(false);
            }
        }
    }

    Ok(true)
}
