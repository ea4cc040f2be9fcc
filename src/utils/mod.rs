// Utils compartidos

pub mod constants;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use storage::{
    load_from_storage, remove_from_storage, save_to_storage, BrowserStorage, KeyValueStorage,
    MemoryStorage,
};
pub use validation::{is_email_shape, trimmed_len, FieldErrors};
