// crates/sapwalk-cli/src/io/mod.rs

pub mod store;
