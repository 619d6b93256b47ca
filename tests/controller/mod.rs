//! Handler-level tests for the HTTP endpoints.
//!
//! Each endpoint is called directly with a `State` built against the mock
//! provider and an in-memory session, covering the success path and the
//! error statuses the route documents.

mod auth;

use warband_test_utils::prelude::*;

use crate::util::TestSetupExt;
