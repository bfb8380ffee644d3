//! Script detection and text cleanup for dictionary tokens.
//!
//! - [`script`]: classify token text as primary or secondary script
//! - [`normalize`]: strip punctuation, digits and decorative markers

pub mod normalize;
pub mod script;

pub use normalize::normalize;
pub use script::{Script, ScriptClassifier, ScriptRange};
