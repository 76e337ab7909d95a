//! Static metric catalog.
//!
//! Every statistic the exporter publishes is listed here once, in output
//! order. The first block comes from the Go runtime section of `SERVER EXT`,
//! the second from the Tile38 server section.

/// Prometheus metric kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    /// Token used on the `# TYPE` line.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

/// One catalog entry: the stats key doubles as the metric name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub kind: MetricKind,
    pub key: &'static str,
    pub help: &'static str,
}

impl MetricSpec {
    pub const fn gauge(key: &'static str, help: &'static str) -> Self {
        Self { kind: MetricKind::Gauge, key, help }
    }

    pub const fn counter(key: &'static str, help: &'static str) -> Self {
        Self { kind: MetricKind::Counter, key, help }
    }
}

/// The full catalog. Keys are unique.
pub static CATALOG: &[MetricSpec] = &[
    // Go runtime / memory
    MetricSpec::gauge("go_goroutines", "Number of goroutines that currently exist"),
    MetricSpec::gauge("go_threads", "Number of OS threads created"),
    MetricSpec::gauge("alloc_bytes", "Number of bytes allocated and still in use"),
    MetricSpec::counter("alloc_bytes_total", "Total number of bytes allocated, even if freed"),
    MetricSpec::gauge("sys_cpus", "Number of CPUS available on the system"),
    MetricSpec::gauge("sys_bytes", "Number of bytes obtained from system"),
    MetricSpec::counter("lookups_total", "Total number of pointer lookups"),
    MetricSpec::counter("mallocs_total", "Total number of mallocs"),
    MetricSpec::counter("frees_total", "Total number of frees"),
    MetricSpec::gauge("heap_alloc_bytes", "Number of heap bytes allocated and still in use"),
    MetricSpec::gauge("heap_sys_bytes", "Number of heap bytes obtained from system"),
    MetricSpec::gauge("heap_idle_bytes", "Number of heap bytes waiting to be used"),
    MetricSpec::gauge("heap_inuse_bytes", "Number of heap bytes that are in use"),
    MetricSpec::gauge("heap_released_bytes", "Number of heap bytes released to OS"),
    MetricSpec::gauge("heap_objects", "Number of allocated objects"),
    MetricSpec::gauge("stack_inuse_bytes", "Number of bytes in use by the stack allocator"),
    MetricSpec::gauge("stack_sys_bytes", "Number of bytes obtained from system for stack allocator"),
    MetricSpec::gauge("mspan_inuse_bytes", "Number of bytes in use by mspan structures"),
    MetricSpec::gauge("mspan_sys_bytes", "Number of bytes used for mspan structures obtained from system"),
    MetricSpec::gauge("mcache_inuse_bytes", "Number of bytes in use by mcache structures"),
    MetricSpec::gauge("mcache_sys_bytes", "Number of bytes used for mcache structures obtained from system"),
    MetricSpec::gauge("buck_hash_sys_bytes", "Number of bytes used by the profiling bucket hash table"),
    MetricSpec::gauge("gc_sys_bytes", "Number of bytes used for garbage collection system metadata"),
    MetricSpec::gauge("other_sys_bytes", "Number of bytes used for other system allocations"),
    MetricSpec::gauge("next_gc_bytes", "Number of heap bytes when next garbage collection will take place"),
    MetricSpec::gauge("last_gc_time_seconds", "Number of seconds since 1970 of last garbage collection"),
    MetricSpec::gauge(
        "gc_cpu_fraction",
        "The fraction of this program's available CPU time used by the GC since the program started",
    ),
    // Tile38 server
    MetricSpec::gauge("tile38_pid", "The process ID of the server"),
    MetricSpec::gauge("tile38_max_heap_size", "Maximum heap size allowed"),
    MetricSpec::gauge("tile38_read_only", "Whether or not the server is read-only"),
    MetricSpec::gauge("tile38_pointer_size", "Size of pointer"),
    MetricSpec::counter("tile38_uptime_in_seconds", "Uptime of the Tile38 server in seconds"),
    MetricSpec::gauge("tile38_connected_clients", "Number of currently connected Tile38 clients"),
    MetricSpec::gauge("tile38_cluster_enabled", "Whether or not a cluster is enabled"),
    MetricSpec::gauge("tile38_aof_enabled", "Whether or not the Tile38 AOF is enabled"),
    MetricSpec::gauge("tile38_aof_rewrite_in_progress", "Whether or not an AOF shrink is currently in progress"),
    MetricSpec::gauge("tile38_aof_last_rewrite_time_sec", "Length of time the last AOF shrink took"),
    MetricSpec::gauge("tile38_aof_current_rewrite_time_sec", "Duration of the on-going AOF rewrite operation if any"),
    MetricSpec::gauge("tile38_aof_size", "Total size of the AOF in bytes"),
    MetricSpec::gauge("tile38_http_transport", "Whether or no the HTTP transport is being served"),
    MetricSpec::counter("tile38_total_connections_received", "Number of connections accepted by the server"),
    MetricSpec::counter("tile38_total_commands_processed", "Number of commands processed by the server"),
    MetricSpec::counter("tile38_expired_keys", "Number of key expiration events"),
    MetricSpec::gauge("tile38_connected_slaves", "Number of connected slaves"),
    MetricSpec::gauge("tile38_num_points", "Number of points in the database"),
    MetricSpec::gauge("tile38_num_objects", "Number of objects in the database"),
    MetricSpec::gauge("tile38_num_strings", "Number of string in the database"),
    MetricSpec::gauge("tile38_num_collections", "Number of collections in the database"),
    MetricSpec::gauge("tile38_num_hooks", "Number of hooks in the database"),
    MetricSpec::gauge("tile38_avg_point_size", "Average point size in bytes"),
    MetricSpec::gauge("tile38_in_memory_size", "Total in memory size of all collections"),
];

/// Look up a catalog entry by key.
pub fn find(key: &str) -> Option<&'static MetricSpec> {
    CATALOG.iter().find(|m| m.key == key)
}
