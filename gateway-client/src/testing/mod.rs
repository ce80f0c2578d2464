//! Test doubles for the console surfaces and list fetchers.

pub mod mocks;

pub use mocks::{MockFetcher, RecordingNavigator, RecordingNotifier};
