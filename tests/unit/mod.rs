/// Unit test harness
///
/// Wired through the [[test]] entry in Cargo.toml.

mod basic_tests;
