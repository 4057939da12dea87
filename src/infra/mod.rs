// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting I/O that doesn't belong to any business layer:
//
//   config_store.rs — Reads an AnalysisConfig from a JSON file
//                     with serde_json, falling back to defaults
//                     for any field the file leaves out.
//
//   table.rs        — Renders label / count tables and token
//                     tables as ASCII grids with tabled.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// JSON config file loading
pub mod config_store;

/// ASCII table rendering
pub mod table;
