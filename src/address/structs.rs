/// Lock-guarded address store fed by the tracker.
pub mod address_cache;
