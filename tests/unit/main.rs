//! Unit test harness mirroring the `src/` tree
