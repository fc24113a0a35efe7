//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod field_path;
pub mod input_event;
pub mod key_action;
pub mod page;
pub mod record;

// Re-export for convenience
pub use error::{AppError, DataViewError, InputError, ParseEnumError, ParseError};
pub use field_path::{FieldPath, FieldPathError};
pub use input_event::{Cancelable, InputEvent};
pub use key_action::KeyAction;
pub use page::{
    Layout, PageEvent, PageState, PaginatorPosition, SortOrder, SortSpec, WindowMode,
};
pub use record::{FieldValue, Record};
