//! Error types used by the crate.
//!
//! Validation failures are raised eagerly at the point of construction or
//! mutation and leave the target unchanged.  Classifiers never raise on
//! well-formed inputs; [`StateError`] only covers broken preconditions such
//! as a family without a proband.

/// Errors raised when constructing or mutating pedigrees and variants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid sex code {0} (expected 1=male, 2=female)")]
    InvalidSexCode(i32),
    #[error("{role} {parent:?} of member {member:?} has the wrong sex")]
    ParentSexMismatch {
        member: String,
        role: &'static str,
        parent: String,
    },
    #[error("{role} {parent:?} of member {member:?} belongs to another family")]
    CrossFamilyParent {
        member: String,
        role: &'static str,
        parent: String,
    },
    #[error("member {0:?} cannot be its own parent")]
    SelfParent(String),
    #[error("member {member:?} belongs to family {found:?}, not {expected:?}")]
    CrossFamilyMember {
        member: String,
        expected: String,
        found: String,
    },
    #[error("member {0:?} already present in family")]
    DuplicateMember(String),
    #[error("parent {parent:?} of member {member:?} has not been added to the family yet")]
    ParentNotInFamily { member: String, parent: String },
    #[error("unknown family member {0:?}")]
    UnknownMember(String),
    #[error("proband {0:?} must be affected")]
    UnaffectedProband(String),
    #[error("unknown chromosome {0:?}")]
    UnknownChrom(String),
    #[error("{0} allele must not be empty")]
    EmptyAllele(&'static str),
    #[error("genotype for member {member:?} must have exactly two alleles, got {len}")]
    BadGenotypeShape { member: String, len: usize },
    #[error("allele {allele:?} for member {member:?} is neither ref, alt nor missing")]
    UnexpectedAllele { member: String, allele: String },
    #[error("allele depths for member {0:?} must not be empty")]
    EmptyAlleleDepths(String),
    #[error("negative read depth for member {0:?}")]
    NegativeDepth(String),
    #[error("negative genotype quality for member {0:?}")]
    NegativeQuality(String),
    #[error("transcript annotation carries no gene identifier")]
    MissingGeneId,
    #[error("transcript annotation carries no consequence")]
    EmptyConsequence,
    #[error("no family has been set")]
    NoFamilySet,
    #[error("variant is bound to family {found:?}, not {expected:?}")]
    FamilyMismatch { expected: String, found: String },
    #[error("variant {0:?} already present in set")]
    DuplicateVariant(String),
}

/// Errors raised when a classifier is invoked on incomplete state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("variant has no family attached")]
    NoFamily,
    #[error("no proband has been set on family {0:?}")]
    ProbandNotSet(String),
    #[error("unknown family member {0:?}")]
    UnknownMember(String),
}
