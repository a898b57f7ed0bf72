/// Per-character state machine and parallel text rendering
pub mod orchestrator;
/// Source photographs and job assignment
pub mod source;
/// Brightness-threshold fallback
pub mod threshold;
