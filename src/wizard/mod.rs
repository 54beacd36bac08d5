//! The multi-step room design wizard: child state machines, the aggregating
//! controller, and the session that wires them together.

pub mod controller;
pub mod layout_editor;
pub mod session;
pub mod step;
pub mod style_picker;

pub use controller::{AdvanceOutcome, WizardController};
pub use layout_editor::{LayoutEditor, LayoutEvent};
pub use session::{SubmitError, WizardSession};
pub use step::WizardStep;
pub use style_picker::{StyleEvent, StylePicker};
