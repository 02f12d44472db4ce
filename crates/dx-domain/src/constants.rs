//! Domain layer constants
//!
//! Well-known configuration paths and descriptor field names shared by the
//! application and infrastructure layers. Resource locations (search roots,
//! manifest directory, file names) are infrastructure settings and live in
//! `dx_infrastructure::constants`.

// ============================================================================
// JOB DEFINITION PATHS
// ============================================================================

/// Path of the requested reader plugin name inside a job definition
pub const JOB_CONTENT_READER_NAME: &str = "job.content[0].reader.name";

/// Path of the requested writer plugin name inside a job definition
pub const JOB_CONTENT_WRITER_NAME: &str = "job.content[0].writer.name";

// ============================================================================
// PLUGIN DESCRIPTOR FIELDS
// ============================================================================

/// Root path under which matched descriptors are nested
pub const PLUGIN_ROOT: &str = "plugin";

/// Descriptor field holding the plugin name
pub const DESCRIPTOR_NAME: &str = "name";

/// Descriptor field injected with the descriptor's origin
pub const DESCRIPTOR_PATH: &str = "path";

/// Descriptor field injected with the load strategy
pub const DESCRIPTOR_LOAD_TYPE: &str = "loadType";

/// Default load strategy recorded on matched descriptors
pub const DEFAULT_LOAD_TYPE: &str = "classLoader";

// ============================================================================
// PATH SYNTAX
// ============================================================================

/// Separator between path segments
pub const PATH_SEPARATOR: char = '.';

/// Marker that opens a sequence index inside a segment
pub const INDEX_OPEN: char = '[';

/// Marker that closes a sequence index inside a segment
pub const INDEX_CLOSE: char = ']';

/// Most `null` elements a single `set` may pad onto a sequence
pub const MAX_INDEX_GROWTH: usize = 1024;

/// Start of a line comment in capability manifests
pub const MANIFEST_COMMENT: char = '#';
