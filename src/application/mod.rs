// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one goal per CLI command.
//
// Rules for this layer:
//   - No tokenisation or tagging rules here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Settings shared by every workflow
pub mod config;

// The POS / NER frequency report
pub mod report_use_case;

// Per-message token lists, raw or cleaned
pub mod tokens_use_case;

// Single-text annotation for checking the rules
pub mod annotate_use_case;
