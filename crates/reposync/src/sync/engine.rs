//! The upsert engine and the pipelines that feed it.
//!
//! Everything here is strictly sequential: one record is mapped and written
//! before the next one starts, and the destination index is built once per
//! run and only read afterwards.

mod direct;
mod export;
mod import;
mod upsert;

pub use direct::sync_direct;
pub use export::export_repositories;
pub use import::{import_rows, import_tabular};
pub use upsert::{upsert_one, upsert_records};
