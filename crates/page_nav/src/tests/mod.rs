//! Scenario tests for page navigation

mod recording;
