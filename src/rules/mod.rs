//! Rule implementations.
//!
//! Rules are pure functions over the used-key set and one catalog's
//! flattened keys.
//!
//! - `unused`: Nested catalog keys never referenced from source code

pub mod unused;
