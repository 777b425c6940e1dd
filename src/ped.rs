//! Pedigree representation: family members, families, and PED file loading.
//!
//! Parent links are stored as member ids and resolved through the
//! [`Family`], so a family is a flat id-keyed map rather than a web of
//! owning pointers.  Members are constructed eagerly and validated at
//! construction / insertion time; derived sets (affected members, sons of a
//! given parent, ...) are recomputed on demand.

use std::path::Path;

use anyhow::Context as _;
use indexmap::IndexMap;

use crate::err::ValidationError;

/// Biological sex as encoded in PED files.
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
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Sex {
    /// Male (PED code 1).
    #[strum(serialize = "male")]
    Male = 1,
    /// Female (PED code 2).
    #[strum(serialize = "female")]
    Female = 2,
}

impl TryFrom<i32> for Sex {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Sex::Male),
            2 => Ok(Sex::Female),
            _ => Err(ValidationError::InvalidSexCode(value)),
        }
    }
}

/// A single member of a family.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FamilyMember {
    /// Member id, unique within the family.
    id: String,
    /// Id of the family this member belongs to.
    family_id: String,
    /// Biological sex.
    sex: Sex,
    /// Whether the member presents the phenotype.
    affected: bool,
    /// Id of the mother, if known.
    mum: Option<String>,
    /// Id of the father, if known.
    dad: Option<String>,
}

impl FamilyMember {
    /// Create a new member without parent links.
    pub fn new(id: &str, family_id: &str, sex: Sex, affected: bool) -> Self {
        Self {
            id: id.to_string(),
            family_id: family_id.to_string(),
            sex,
            affected,
            mum: None,
            dad: None,
        }
    }

    /// Attach the mother.  She must be female, share the family id, and not
    /// be the member itself.
    pub fn set_mum(&mut self, mum: &FamilyMember) -> Result<(), ValidationError> {
        self.check_parent(mum, "mum", Sex::Female)?;
        self.mum = Some(mum.id.clone());
        Ok(())
    }

    /// Attach the father.  He must be male, share the family id, and not be
    /// the member itself.
    pub fn set_dad(&mut self, dad: &FamilyMember) -> Result<(), ValidationError> {
        self.check_parent(dad, "dad", Sex::Male)?;
        self.dad = Some(dad.id.clone());
        Ok(())
    }

    fn check_parent(
        &self,
        parent: &FamilyMember,
        role: &'static str,
        expected_sex: Sex,
    ) -> Result<(), ValidationError> {
        if parent.id == self.id {
            return Err(ValidationError::SelfParent(self.id.clone()));
        }
        if parent.family_id != self.family_id {
            return Err(ValidationError::CrossFamilyParent {
                member: self.id.clone(),
                role,
                parent: parent.id.clone(),
            });
        }
        if parent.sex != expected_sex {
            return Err(ValidationError::ParentSexMismatch {
                member: self.id.clone(),
                role,
                parent: parent.id.clone(),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn family_id(&self) -> &str {
        &self.family_id
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn is_affected(&self) -> bool {
        self.affected
    }

    pub fn mum_id(&self) -> Option<&str> {
        self.mum.as_deref()
    }

    pub fn dad_id(&self) -> Option<&str> {
        self.dad.as_deref()
    }
}

/// One row of a PED file.
#[derive(Debug, Clone, serde::Deserialize)]
struct PedRecord {
    family_id: String,
    individual_id: String,
    paternal_id: String,
    maternal_id: String,
    sex: i32,
    phenotype: i32,
}

/// A family aggregating members, with at most one designated proband.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Family {
    /// Id of the family.
    family_id: String,
    /// Members by id, in insertion order.
    members: IndexMap<String, FamilyMember>,
    /// Id of the proband, if set.
    proband_id: Option<String>,
}

impl Family {
    /// Create a new, empty family.
    pub fn new(family_id: &str) -> Self {
        Self {
            family_id: family_id.to_string(),
            members: IndexMap::new(),
            proband_id: None,
        }
    }

    /// Load one family from a PED file.
    ///
    /// Rows of other families are skipped.  Rows may appear in any order;
    /// parents are inserted before their children.
    pub fn from_ped_path(
        path: impl AsRef<Path>,
        family_id: &str,
        proband_id: &str,
    ) -> Result<Self, anyhow::Error> {
        let file = std::fs::File::open(path.as_ref())
            .with_context(|| format!("opening PED file {:?}", path.as_ref()))?;
        Self::from_ped_reader(file, family_id, proband_id)
            .with_context(|| format!("loading family {:?} from {:?}", family_id, path.as_ref()))
    }

    /// Load one family from PED records read from `read`.
    ///
    /// The PED columns are `family_id individual_id paternal_id maternal_id
    /// sex phenotype` with `sex` one of 1=male / 2=female, `phenotype` one of
    /// 2=affected, 1=unaffected, 0/-9=unknown (mapped to unaffected), and
    /// missing parents encoded as `0`.
    pub fn from_ped_reader(
        read: impl std::io::Read,
        family_id: &str,
        proband_id: &str,
    ) -> Result<Self, anyhow::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_reader(read);
        let mut pending = Vec::new();
        for result in reader.deserialize() {
            let record: PedRecord = result.context("problem reading PED record")?;
            if record.family_id == family_id {
                pending.push(record);
            }
        }

        let mut family = Family::new(family_id);
        while !pending.is_empty() {
            let before = pending.len();
            let mut deferred = Vec::new();
            for record in pending.drain(..) {
                let resolved =
                    |id: &str| -> bool { id == "0" || family.members.contains_key(id) };
                if resolved(&record.maternal_id) && resolved(&record.paternal_id) {
                    family.add_member(member_from_record(&record, &family)?)?;
                } else {
                    deferred.push(record);
                }
            }
            if deferred.len() == before {
                anyhow::bail!(
                    "unresolvable parent ids in PED records: {:?}",
                    deferred
                        .iter()
                        .map(|r| r.individual_id.as_str())
                        .collect::<Vec<_>>()
                );
            }
            pending = deferred;
        }

        family.set_proband(proband_id)?;
        tracing::debug!(
            "loaded family {:?} with {} members",
            family_id,
            family.members.len()
        );
        Ok(family)
    }

    pub fn family_id(&self) -> &str {
        &self.family_id
    }

    /// Add a member.  Its declared parents (if any) must already be present.
    pub fn add_member(&mut self, member: FamilyMember) -> Result<(), ValidationError> {
        if member.family_id != self.family_id {
            return Err(ValidationError::CrossFamilyMember {
                member: member.id.clone(),
                expected: self.family_id.clone(),
                found: member.family_id.clone(),
            });
        }
        if self.members.contains_key(&member.id) {
            return Err(ValidationError::DuplicateMember(member.id.clone()));
        }
        for parent in [&member.mum, &member.dad].into_iter().flatten() {
            if !self.members.contains_key(parent) {
                return Err(ValidationError::ParentNotInFamily {
                    member: member.id.clone(),
                    parent: parent.clone(),
                });
            }
        }
        self.members.insert(member.id.clone(), member);
        Ok(())
    }

    /// Designate the proband.  The member must exist and be affected.
    pub fn set_proband(&mut self, id: &str) -> Result<(), ValidationError> {
        let member = self
            .members
            .get(id)
            .ok_or_else(|| ValidationError::UnknownMember(id.to_string()))?;
        if !member.affected {
            return Err(ValidationError::UnaffectedProband(id.to_string()));
        }
        self.proband_id = Some(id.to_string());
        Ok(())
    }

    pub fn proband_id(&self) -> Option<&str> {
        self.proband_id.as_deref()
    }

    pub fn proband(&self) -> Option<&FamilyMember> {
        self.proband_id.as_deref().and_then(|id| self.members.get(id))
    }

    pub fn member(&self, id: &str) -> Option<&FamilyMember> {
        self.members.get(id)
    }

    pub fn members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.members.values()
    }

    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// The mother of the given member, if present in the family.
    pub fn mum_of(&self, id: &str) -> Option<&FamilyMember> {
        self.members
            .get(id)
            .and_then(|m| m.mum.as_deref())
            .and_then(|mum| self.members.get(mum))
    }

    /// The father of the given member, if present in the family.
    pub fn dad_of(&self, id: &str) -> Option<&FamilyMember> {
        self.members
            .get(id)
            .and_then(|m| m.dad.as_deref())
            .and_then(|dad| self.members.get(dad))
    }

    pub fn affected_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.members().filter(|m| m.affected)
    }

    pub fn unaffected_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.members().filter(|m| !m.affected)
    }

    pub fn male_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.members().filter(|m| m.sex == Sex::Male)
    }

    pub fn female_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.members().filter(|m| m.sex == Sex::Female)
    }

    pub fn affected_male_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.male_members().filter(|m| m.affected)
    }

    pub fn unaffected_male_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.male_members().filter(|m| !m.affected)
    }

    pub fn affected_female_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.female_members().filter(|m| m.affected)
    }

    pub fn unaffected_female_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.female_members().filter(|m| !m.affected)
    }

    /// All sons of the given parent.
    pub fn sons_of<'a>(&'a self, parent_id: &'a str) -> impl Iterator<Item = &'a FamilyMember> + 'a {
        self.members.values().filter(move |m| {
            m.sex == Sex::Male
                && (m.mum.as_deref() == Some(parent_id) || m.dad.as_deref() == Some(parent_id))
        })
    }

    /// All daughters of the given parent.
    pub fn daughters_of<'a>(
        &'a self,
        parent_id: &'a str,
    ) -> impl Iterator<Item = &'a FamilyMember> + 'a {
        self.members.values().filter(move |m| {
            m.sex == Sex::Female
                && (m.mum.as_deref() == Some(parent_id) || m.dad.as_deref() == Some(parent_id))
        })
    }

    /// Whether the proband is set and both of its parents are in the family.
    pub fn proband_has_both_parents(&self) -> bool {
        self.proband().map_or(false, |p| {
            self.mum_of(p.id()).is_some() && self.dad_of(p.id()).is_some()
        })
    }
}

fn member_from_record(record: &PedRecord, family: &Family) -> Result<FamilyMember, anyhow::Error> {
    let sex = Sex::try_from(record.sex)?;
    let affected = record.phenotype == 2;
    let mut member = FamilyMember::new(&record.individual_id, &record.family_id, sex, affected);
    if record.maternal_id != "0" {
        let mum = family
            .member(&record.maternal_id)
            .with_context(|| format!("mum {:?} not in family", record.maternal_id))?;
        member.set_mum(mum)?;
    }
    if record.paternal_id != "0" {
        let dad = family
            .member(&record.paternal_id)
            .with_context(|| format!("dad {:?} not in family", record.paternal_id))?;
        member.set_dad(dad)?;
    }
    Ok(member)
}
