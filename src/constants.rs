/// Map key (and file stem) of the single partition used when no grouping is configured.
pub const NO_GROUPING_KEY: &str = "collection";

/// Extension of every partition file.
pub const PARTITION_EXTENSION: &str = "json";

/// Name of the optional configuration file kept in the base directory.
pub const CONFIG_FILE_NAME: &str = "sbr.config";

/// Root element of a call log export.
pub const CALLS_ROOT: &[u8] = b"calls";

/// Root element of a message export.
pub const MESSAGES_ROOT: &[u8] = b"smses";
