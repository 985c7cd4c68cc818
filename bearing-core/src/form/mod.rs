mod field;
mod state;

pub use field::Field;
pub use state::{FormAction, FormState};
