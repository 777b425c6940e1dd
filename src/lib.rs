//! Pedigree-aware Mendelian inheritance filtering for sequence variants.
//!
//! The crate consumes pre-parsed pedigrees ([`ped::Family`]) and biallelic
//! variant observations ([`variant::Variant`]) and answers membership queries
//! for the classic Mendelian and non-Mendelian inheritance patterns
//! ([`inheritance`]), plus compound-heterozygous pair resolution over a set
//! of variants for one family ([`comphet::VariantSet`]).
//!
//! All decision functions are pure: pedigrees and variants are built up
//! front, classification never mutates.  The family handle held by a variant
//! is an `Arc`, so `(Family, Variant)` tuples can be evaluated in parallel
//! by callers.

pub mod common;
pub mod comphet;
pub mod err;
pub mod inheritance;
pub mod ped;
pub mod variant;

#[cfg(test)]
pub(crate) mod testutil;
