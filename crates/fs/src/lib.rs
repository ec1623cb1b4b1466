mod error;
mod perms;
mod record;
mod walker;

pub use error::ScanError;
pub use perms::{ReadonlyTally, is_writable, make_readonly, make_readonly_all};
pub use record::FileRecord;
pub use walker::{check_root, collect_files, filter_writable};
