pub mod snapshot_site_client;

pub use snapshot_site_client::{SiteSnapshot, SnapshotFormat, SnapshotSiteClient};
