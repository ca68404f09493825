//! Aid-request workflow — append-only submission and one-way approval.
//!
//! Requests live in an ordered sequence owned by the session; the positional
//! index is the request's identity. The only transition is
//! `Pending → Approved`. There is no rejection, cancellation, or deletion,
//! and duplicate submissions are permitted and tracked as separate entries.

use serde::{Deserialize, Serialize};

/// Approval state of one aid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
        }
    }
}

/// One requested intervention for a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidRequest {
    /// District the aid is requested for.
    pub region: String,
    /// Free-form kind of aid (e.g. "food", "shelter", "medical").
    pub aid_type: String,
    pub status: RequestStatus,
}

/// Outcome of a submission attempt. Every variant is user-reportable; none
/// are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Appended; the index identifies the new request.
    Submitted { index: usize },
    /// Empty aid type is silently dropped, not an error.
    EmptyAidType,
    /// The region is not a district of the currently loaded dataset.
    UnknownDistrict,
}

/// Append a new `Pending` request if the inputs are acceptable.
///
/// `district_names` are the districts of the currently loaded dataset; the
/// requested region must be one of them.
pub fn submit(
    requests: &mut Vec<AidRequest>,
    district_names: &[&str],
    region: &str,
    aid_type: &str,
) -> SubmitOutcome {
    if aid_type.trim().is_empty() {
        return SubmitOutcome::EmptyAidType;
    }
    if !district_names.contains(&region) {
        return SubmitOutcome::UnknownDistrict;
    }
    requests.push(AidRequest {
        region: region.to_string(),
        aid_type: aid_type.to_string(),
        status: RequestStatus::Pending,
    });
    SubmitOutcome::Submitted {
        index: requests.len() - 1,
    }
}

/// Outcome of an approval attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApproveOutcome {
    Approved,
    /// Already approved; repeated approval is a no-op.
    AlreadyApproved,
    /// Approval is gated on the session login flag.
    NotLoggedIn,
    /// No request at that index.
    NotFound,
}

/// Transition the addressed request `Pending → Approved` in place.
///
/// Rejections leave every status unchanged.
pub fn approve(requests: &mut [AidRequest], index: usize, logged_in: bool) -> ApproveOutcome {
    if !logged_in {
        return ApproveOutcome::NotLoggedIn;
    }
    match requests.get_mut(index) {
        None => ApproveOutcome::NotFound,
        Some(request) if request.status == RequestStatus::Approved => {
            ApproveOutcome::AlreadyApproved
        }
        Some(request) => {
            request.status = RequestStatus::Approved;
            ApproveOutcome::Approved
        }
    }
}

/// Pending requests with their positional indices, for the approval panel.
pub fn pending(requests: &[AidRequest]) -> Vec<(usize, &AidRequest)> {
    requests
        .iter()
        .enumerate()
        .filter(|(_, r)| r.status == RequestStatus::Pending)
        .collect()
}

/// Whether a login attempt is accepted: both fields non-empty.
///
/// No credential comparison happens here on purpose — the deployed
/// configuration carries a username/password pair that the reference
/// behavior never checks. Only the Approve action is gated on the
/// resulting session flag.
pub fn credentials_accepted(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISTRICTS: [&str; 3] = ["Hyderabad", "Warangal", "Medak"];

    #[test]
    fn submit_appends_one_pending_request() {
        let mut requests = Vec::new();
        let outcome = submit(&mut requests, &DISTRICTS, "Hyderabad", "food");
        assert_eq!(outcome, SubmitOutcome::Submitted { index: 0 });
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].region, "Hyderabad");
        assert_eq!(requests[0].aid_type, "food");
        assert_eq!(requests[0].status, RequestStatus::Pending);
    }

    #[test]
    fn submit_leaves_prior_requests_unchanged() {
        let mut requests = Vec::new();
        submit(&mut requests, &DISTRICTS, "Warangal", "shelter");
        let before = requests.clone();
        submit(&mut requests, &DISTRICTS, "Hyderabad", "food");
        assert_eq!(&requests[..1], &before[..]);
        assert_eq!(requests.len(), 2);
    }

    #[test]
    fn duplicates_are_tracked_separately() {
        let mut requests = Vec::new();
        submit(&mut requests, &DISTRICTS, "Hyderabad", "food");
        let outcome = submit(&mut requests, &DISTRICTS, "Hyderabad", "food");
        assert_eq!(outcome, SubmitOutcome::Submitted { index: 1 });
        assert_eq!(requests.len(), 2);
    }

    #[test]
    fn empty_aid_type_is_a_noop() {
        let mut requests = Vec::new();
        assert_eq!(
            submit(&mut requests, &DISTRICTS, "Hyderabad", ""),
            SubmitOutcome::EmptyAidType
        );
        assert_eq!(
            submit(&mut requests, &DISTRICTS, "Hyderabad", "   "),
            SubmitOutcome::EmptyAidType
        );
        assert!(requests.is_empty());
    }

    #[test]
    fn unknown_district_is_rejected() {
        let mut requests = Vec::new();
        assert_eq!(
            submit(&mut requests, &DISTRICTS, "Atlantis", "food"),
            SubmitOutcome::UnknownDistrict
        );
        assert!(requests.is_empty());
    }

    #[test]
    fn approve_requires_login() {
        let mut requests = Vec::new();
        submit(&mut requests, &DISTRICTS, "Hyderabad", "food");
        assert_eq!(approve(&mut requests, 0, false), ApproveOutcome::NotLoggedIn);
        assert_eq!(requests[0].status, RequestStatus::Pending);
    }

    #[test]
    fn approve_transitions_pending_to_approved() {
        let mut requests = Vec::new();
        submit(&mut requests, &DISTRICTS, "Hyderabad", "food");
        assert_eq!(approve(&mut requests, 0, true), ApproveOutcome::Approved);
        assert_eq!(requests[0].status, RequestStatus::Approved);
    }

    #[test]
    fn approve_is_idempotent() {
        let mut requests = Vec::new();
        submit(&mut requests, &DISTRICTS, "Hyderabad", "food");
        approve(&mut requests, 0, true);
        assert_eq!(
            approve(&mut requests, 0, true),
            ApproveOutcome::AlreadyApproved
        );
        assert_eq!(requests[0].status, RequestStatus::Approved);
    }

    #[test]
    fn approve_out_of_range_is_not_found() {
        let mut requests = Vec::new();
        assert_eq!(approve(&mut requests, 5, true), ApproveOutcome::NotFound);
    }

    #[test]
    fn pending_keeps_positional_indices() {
        let mut requests = Vec::new();
        submit(&mut requests, &DISTRICTS, "Hyderabad", "food");
        submit(&mut requests, &DISTRICTS, "Warangal", "shelter");
        submit(&mut requests, &DISTRICTS, "Medak", "medical");
        approve(&mut requests, 1, true);
        let open: Vec<usize> = pending(&requests).iter().map(|(i, _)| *i).collect();
        assert_eq!(open, [0, 2]);
    }

    #[test]
    fn login_accepts_any_non_empty_pair() {
        assert!(credentials_accepted("govt_user", "secure123"));
        assert!(credentials_accepted("anyone", "anything"));
        assert!(!credentials_accepted("", "secret"));
        assert!(!credentials_accepted("user", ""));
        assert!(!credentials_accepted("  ", "secret"));
    }
}
