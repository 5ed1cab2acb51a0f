#![allow(dead_code, unused_imports)]

pub use watch_test_utils::builders;
pub use watch_test_utils::{init_tracing, with_timeout, RecordingScreen};
