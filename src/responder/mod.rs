// Responder module
// Keyword-match-then-random-choice response selection

mod engine;
mod picker;
mod table;

pub use engine::{MatchKind, ResponderEngine};
pub use picker::{ResponsePicker, ThreadRngPicker};
pub use table::{Category, CrisisSection, ResponseTable};
