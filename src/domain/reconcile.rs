// src/domain/reconcile.rs
//! The reconciliation planner: classifies import candidates against a
//! snapshot of existing vendors into add/update/delete/skip sets.
//!
//! Pure logic only. Executing the plan against a repository is the
//! application service's job.

use crate::domain::import::{
    DuplicateKey, DuplicateKind, ImportMode, ReconciliationPlan,
};
use crate::domain::vendor::{ExistingVendor, VendorCandidate, VendorId};
use std::collections::{HashMap, HashSet};

/// Lookup indices over the existing-vendor snapshot.
///
/// Keys are lowercased; the email index only holds vendors with a non-empty
/// email. On key collisions the later vendor in iteration order wins the
/// slot (last-write-wins); collisions are reported, not resolved.
struct SnapshotIndex<'a> {
    by_name: HashMap<String, &'a ExistingVendor>,
    by_email: HashMap<String, &'a ExistingVendor>,
    duplicate_keys: Vec<DuplicateKey>,
}

impl<'a> SnapshotIndex<'a> {
    fn build(existing: &'a [ExistingVendor]) -> Self {
        let mut by_name: HashMap<String, &ExistingVendor> = HashMap::new();
        let mut by_email: HashMap<String, &ExistingVendor> = HashMap::new();
        let mut duplicate_keys = Vec::new();

        for vendor in existing {
            let name_key = vendor.normalized_name();
            if !name_key.is_empty() && by_name.insert(name_key.clone(), vendor).is_some() {
                duplicate_keys.push(DuplicateKey {
                    kind: DuplicateKind::Name,
                    key: name_key,
                });
            }
            if let Some(email_key) = vendor.normalized_email() {
                if by_email.insert(email_key.clone(), vendor).is_some() {
                    duplicate_keys.push(DuplicateKey {
                        kind: DuplicateKind::Email,
                        key: email_key,
                    });
                }
            }
        }

        Self {
            by_name,
            by_email,
            duplicate_keys,
        }
    }

    /// Name-first, email-fallback match. A candidate matches at most one
    /// vendor; the email index is only consulted when the name misses.
    fn find(&self, candidate: &VendorCandidate) -> Option<&'a ExistingVendor> {
        if let Some(vendor) = self.by_name.get(&candidate.normalized_name()) {
            return Some(vendor);
        }
        candidate
            .normalized_email()
            .and_then(|email| self.by_email.get(&email).copied())
    }
}

/// Computes the reconciliation plan for one batch of candidates against one
/// snapshot of existing vendors.
///
/// Add-only: unmatched candidates land in `to_add`, matched ones are counted
/// as skipped; existing vendors are never touched.
///
/// Sync: unmatched candidates land in `to_add`; a matched vendor's id is
/// recorded in `to_update` (preserved, not overwritten) exactly once even if
/// several candidates match it; every existing vendor never matched lands in
/// `to_delete`. Every existing vendor ends up in exactly one of the two sets.
pub fn plan(
    candidates: &[VendorCandidate],
    existing: &[ExistingVendor],
    mode: ImportMode,
) -> ReconciliationPlan {
    let index = SnapshotIndex::build(existing);
    let mut plan = ReconciliationPlan {
        duplicate_keys: index.duplicate_keys.clone(),
        ..Default::default()
    };
    let mut matched: HashSet<VendorId> = HashSet::new();

    for candidate in candidates {
        match index.find(candidate) {
            Some(vendor) => match mode {
                ImportMode::AddOnly => plan.skipped += 1,
                ImportMode::Sync => {
                    if matched.insert(vendor.id) {
                        plan.to_update.push(vendor.id);
                    }
                }
            },
            None => plan.to_add.push(candidate.clone()),
        }
    }

    if mode == ImportMode::Sync {
        for vendor in existing {
            if !matched.contains(&vendor.id) {
                plan.to_delete.push(vendor.id);
            }
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vendor::{TenantId, VendorCandidateBuilder};

    fn tenant() -> TenantId {
        TenantId::new("wedding-1").unwrap()
    }

    fn candidate(name: &str, email: Option<&str>) -> VendorCandidate {
        let mut builder = VendorCandidateBuilder::default();
        builder.name(name).tenant_id(tenant());
        if let Some(email) = email {
            builder.email(email);
        }
        builder.build().unwrap()
    }

    fn vendor(id: i64, name: &str, email: Option<&str>) -> ExistingVendor {
        ExistingVendor::from_candidate(VendorId(id), &candidate(name, email))
    }

    #[test]
    fn test_name_match_is_case_insensitive_and_wins_over_email() {
        let existing = vec![vendor(1, "Acme Co", Some("a@x.com"))];
        let candidates = vec![candidate("ACME CO", Some("different@y.com"))];

        let plan = plan(&candidates, &existing, ImportMode::AddOnly);
        assert!(plan.to_add.is_empty());
        assert_eq!(plan.skipped, 1);
    }

    #[test]
    fn test_email_fallback_applies_when_name_misses() {
        let existing = vec![vendor(1, "Acme Co", Some("a@x.com"))];
        let candidates = vec![candidate("New Name", Some("A@X.com"))];

        let plan = plan(&candidates, &existing, ImportMode::Sync);
        assert!(plan.to_add.is_empty());
        assert_eq!(plan.to_update, vec![VendorId(1)]);
        assert!(plan.to_delete.is_empty());
    }

    #[test]
    fn test_add_only_never_deletes_and_accounts_for_every_candidate() {
        let existing = vec![vendor(1, "Alice Catering", None), vendor(2, "Bob Blooms", None)];
        let candidates = vec![
            candidate("Alice Catering", None),
            candidate("New Florist", None),
        ];

        let plan = plan(&candidates, &existing, ImportMode::AddOnly);
        assert!(plan.to_delete.is_empty());
        assert!(plan.to_update.is_empty());
        assert_eq!(plan.to_add.len() + plan.skipped, candidates.len());
        assert_eq!(plan.to_add[0].name, "New Florist");
        assert_eq!(plan.skipped, 1);
    }

    #[test]
    fn test_sync_accounts_for_every_existing_vendor_exactly_once() {
        let existing = vec![
            vendor(1, "Alice Catering", None),
            vendor(2, "Bob Blooms", None),
            vendor(3, "Carol Cakes", None),
        ];
        let candidates = vec![candidate("alice catering", None), candidate("Dan DJ", None)];

        let plan = plan(&candidates, &existing, ImportMode::Sync);
        assert_eq!(plan.to_update.len() + plan.to_delete.len(), existing.len());
        assert_eq!(plan.to_update, vec![VendorId(1)]);
        assert_eq!(plan.to_delete, vec![VendorId(2), VendorId(3)]);
        assert_eq!(plan.to_add.len(), 1);
    }

    #[test]
    fn test_concrete_scenario_from_both_modes() {
        let existing = vec![vendor(1, "Alice Catering", None), vendor(2, "Bob Blooms", None)];
        let candidates = vec![
            candidate("Alice Catering", None),
            candidate("New Florist", None),
        ];

        let sync = plan(&candidates, &existing, ImportMode::Sync);
        assert_eq!(sync.to_add.len(), 1);
        assert_eq!(sync.to_update, vec![VendorId(1)]);
        assert_eq!(sync.to_delete, vec![VendorId(2)]);

        let add_only = plan(&candidates, &existing, ImportMode::AddOnly);
        assert_eq!(add_only.to_add.len(), 1);
        assert_eq!(add_only.skipped, 1);
        assert!(add_only.to_delete.is_empty());
    }

    #[test]
    fn test_two_candidates_matching_one_vendor_count_once() {
        let existing = vec![vendor(1, "Acme Co", Some("a@x.com"))];
        let candidates = vec![
            candidate("Acme Co", None),
            candidate("Acme Rebrand", Some("a@x.com")),
        ];

        let plan = plan(&candidates, &existing, ImportMode::Sync);
        assert_eq!(plan.to_update, vec![VendorId(1)]);
        assert!(plan.to_add.is_empty());
        assert!(plan.to_delete.is_empty());
    }

    #[test]
    fn test_duplicate_snapshot_keys_are_reported() {
        let existing = vec![
            vendor(1, "Acme Co", Some("a@x.com")),
            vendor(2, "ACME CO", Some("b@x.com")),
            vendor(3, "Other", Some("A@X.COM")),
        ];

        let plan = plan(&[], &existing, ImportMode::AddOnly);
        assert_eq!(plan.duplicate_keys.len(), 2);
        assert!(plan
            .duplicate_keys
            .iter()
            .any(|d| d.kind == DuplicateKind::Name && d.key == "acme co"));
        assert!(plan
            .duplicate_keys
            .iter()
            .any(|d| d.kind == DuplicateKind::Email && d.key == "a@x.com"));
    }

    #[test]
    fn test_empty_inputs() {
        let plan_empty = plan(&[], &[], ImportMode::Sync);
        assert!(plan_empty.to_add.is_empty());
        assert!(plan_empty.to_update.is_empty());
        assert!(plan_empty.to_delete.is_empty());
        assert_eq!(plan_empty.skipped, 0);
    }
}
