//! Integration test modules.

mod localized_session_test;
