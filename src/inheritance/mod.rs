//! Per-pattern inheritance interpreters.
//!
//! Each submodule decides membership of one variant in one inheritance
//! pattern, given the family bound to the variant.  The interpreters are
//! pure: they read genotype predicates and pedigree queries and combine
//! them into a boolean, never mutating state.  Missing genotypes on
//! non-proband members are answers (usually permissive), not errors.

pub mod denovo;
pub mod dominant;
pub mod recessive;
pub mod upd;
pub mod x_linked;

use crate::err::StateError;
use crate::ped::{Family, FamilyMember};
use crate::variant::Variant;

/// The closed set of supported inheritance patterns.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum InheritanceMode {
    /// Autosomal dominant.
    #[strum(serialize = "autosomal_dominant")]
    AutosomalDominant,
    /// Autosomal recessive.
    #[strum(serialize = "autosomal_recessive")]
    AutosomalRecessive,
    /// De novo in the proband.
    #[strum(serialize = "de_novo")]
    DeNovo,
    /// X-linked recessive.
    #[strum(serialize = "x_linked_recessive")]
    XLinkedRecessive,
    /// X-linked dominant.
    #[strum(serialize = "x_linked_dominant")]
    XLinkedDominant,
    /// Uniparental isodisomy from either parent.
    #[strum(serialize = "uniparental_isodisomy")]
    UniparentalIsodisomy,
    /// Paternal UPD, iso- vs heterodisomy not distinguished.
    #[strum(serialize = "paternal_uniparental_ambiguous")]
    PaternalUniparentalAmbiguous,
    /// Maternal UPD, iso- vs heterodisomy not distinguished.
    #[strum(serialize = "maternal_uniparental_ambiguous")]
    MaternalUniparentalAmbiguous,
    /// Paternal uniparental isodisomy.
    #[strum(serialize = "paternal_uniparental_isodisomy")]
    PaternalUniparentalIsodisomy,
    /// Maternal uniparental isodisomy.
    #[strum(serialize = "maternal_uniparental_isodisomy")]
    MaternalUniparentalIsodisomy,
}

/// Look up the family bound to `variant` and its proband.
pub(crate) fn family_and_proband(
    variant: &Variant,
) -> Result<(&Family, &FamilyMember), StateError> {
    let family = variant.family().ok_or(StateError::NoFamily)?;
    let proband = family
        .proband()
        .ok_or_else(|| StateError::ProbandNotSet(family.family_id().to_string()))?;
    Ok((family, proband))
}
