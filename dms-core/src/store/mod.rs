//! Concrete `MetadataStore` adapters (§3, §4.3). `arangodb` is the
//! production backend; `memory` is the test double used throughout
//! `dms-core`'s own unit tests and is cheap enough to also serve local dev.

pub mod arangodb;
pub mod memory;
