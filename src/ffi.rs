//! JSON and C entry points (enabled with the `ffi` feature).
//!
//! Request:
//!
//! ```json
//! {"preferences": [[0, 1], [1]], "licensed": [0, 1], "seat_policy": null}
//! ```
//!
//! Response:
//!
//! ```json
//! {"feasible": true, "groups": [[0, 1]], "error": null}
//! ```
//!
//! `error` is only set for malformed requests (fewer than two people,
//! license indices out of range). An infeasible problem is reported as
//! `feasible: false` with no further detail.

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;
use serde::{Deserialize, Serialize};

use crate::models::{AllocationProblem, SeatPolicy};
use crate::solver::{Allocator, AllocatorConfig};

#[derive(Debug, Deserialize)]
struct AllocationRequest {
    preferences: Vec<Vec<usize>>,
    licensed: Vec<usize>,
    #[serde(default)]
    seat_policy: Option<SeatPolicy>,
}

#[derive(Debug, Serialize)]
struct AllocationResponse {
    feasible: bool,
    groups: Option<Vec<Vec<usize>>>,
    error: Option<String>,
}

impl AllocationResponse {
    fn solved(groups: Vec<Vec<usize>>) -> Self {
        Self {
            feasible: true,
            groups: Some(groups),
            error: None,
        }
    }

    fn infeasible() -> Self {
        Self {
            feasible: false,
            groups: None,
            error: None,
        }
    }

    fn rejected(error: String) -> Self {
        Self {
            feasible: false,
            groups: None,
            error: Some(error),
        }
    }
}

/// Solves a JSON allocation request, returning the JSON response.
///
/// Fails only if the request is not valid JSON for the expected shape.
pub fn allocate_json(input: &str) -> Result<String, serde_json::Error> {
    let request: AllocationRequest = serde_json::from_str(input)?;
    let response = match AllocationProblem::new(request.preferences, &request.licensed) {
        Err(e) => AllocationResponse::rejected(e.to_string()),
        Ok(problem) => {
            let config = AllocatorConfig::default()
                .with_seat_policy(request.seat_policy.unwrap_or_default());
            match Allocator::new(config).allocate(&problem) {
                Some(allocation) => AllocationResponse::solved(allocation.into_groups()),
                None => AllocationResponse::infeasible(),
            }
        }
    };
    serde_json::to_string(&response)
}

/// C entry point for [`allocate_json`].
///
/// Returns a newly allocated NUL-terminated JSON string, or null if `input`
/// is null, not UTF-8, or not a valid request. The result must be released
/// with [`u_carpool_free_string`].
///
/// # Safety
///
/// `input` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn u_carpool_allocate_json(input: *const c_char) -> *mut c_char {
    if input.is_null() {
        return ptr::null_mut();
    }
    let text = match unsafe { CStr::from_ptr(input) }.to_str() {
        Ok(text) => text,
        Err(_) => return ptr::null_mut(),
    };
    match allocate_json(text).ok().and_then(|json| CString::new(json).ok()) {
        Some(json) => json.into_raw(),
        None => ptr::null_mut(),
    }
}

/// Releases a string returned by [`u_carpool_allocate_json`].
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by [`u_carpool_allocate_json`]
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn u_carpool_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).expect("valid json")
    }

    #[test]
    fn test_allocate_json_feasible() {
        let out = allocate_json(r#"{"preferences": [[0], [0]], "licensed": [0, 1]}"#)
            .expect("valid request");
        let v = parse(&out);
        assert_eq!(v["feasible"], true);
        assert_eq!(v["groups"], serde_json::json!([[0, 1]]));
        assert!(v["error"].is_null());
    }

    #[test]
    fn test_allocate_json_infeasible() {
        let out = allocate_json(r#"{"preferences": [[0], [0], [0], [0]], "licensed": [0]}"#)
            .expect("valid request");
        let v = parse(&out);
        assert_eq!(v["feasible"], false);
        assert!(v["groups"].is_null());
        assert!(v["error"].is_null());
    }

    #[test]
    fn test_allocate_json_rejected() {
        let out = allocate_json(r#"{"preferences": [[0]], "licensed": [0]}"#)
            .expect("valid request");
        let v = parse(&out);
        assert_eq!(v["feasible"], false);
        assert_eq!(v["error"], "at least 2 people are required, got 1");
    }

    #[test]
    fn test_allocate_json_custom_policy() {
        let out = allocate_json(
            r#"{"preferences": [[0], [0], [0]], "licensed": [0],
                "seat_policy": {"min_occupants": 1, "max_occupants": 3, "min_drivers": 1}}"#,
        )
        .expect("valid request");
        assert_eq!(parse(&out)["feasible"], true);
    }

    #[test]
    fn test_allocate_json_malformed() {
        assert!(allocate_json("{").is_err());
        assert!(allocate_json(
            r#"{"preferences": [[0], [0]], "licensed": [0, 1],
                "seat_policy": {"min_occupants": 9, "max_occupants": 3, "min_drivers": 1}}"#
        )
        .is_err());
    }

    #[test]
    fn test_c_round_trip() {
        let input = CString::new(r#"{"preferences": [[0], [0]], "licensed": [0, 1]}"#)
            .expect("no interior nul");
        unsafe {
            let out = u_carpool_allocate_json(input.as_ptr());
            assert!(!out.is_null());
            let text = CStr::from_ptr(out).to_str().expect("utf-8").to_owned();
            u_carpool_free_string(out);
            assert_eq!(parse(&text)["feasible"], true);

            assert!(u_carpool_allocate_json(ptr::null()).is_null());
            u_carpool_free_string(ptr::null_mut());
        }
    }
}
