pub mod numeric;

pub use numeric::{extract_quantity, Quantity, Topic, Unit};
