//! # Snippets
//!
//! Small, independent utilities. None of the modules depend on each other.
//!
//! ## Modules
//!
//! 1. **text_case** - Upper/lower case conversion
//! 2. **rating** - Keep items rated 4 or higher
//! 3. **concat** - Concatenate any number of slices
//! 4. **vehicle** - `Vehicle` and a `Car` that embeds one
//! 5. **value_size** - Length of text, double of a number
//! 6. **product** - Most expensive product in a list
//! 7. **day** - Weekend / weekday classification
//! 8. **square** - Square a number after a fixed delay
//!
//! ## Running the demo
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin snippets-demo
//! ```

pub mod concat;
pub mod day;
pub mod error;
pub mod product;
pub mod rating;
pub mod square;
pub mod text_case;
pub mod value_size;
pub mod vehicle;

pub use day::{get_day_type, Day, DayType};
pub use error::{Result, SnippetError};
pub use product::{get_most_expensive_product, sample_products, Product, SAMPLE_PRODUCTS};
pub use rating::{filter_by_rating, Item, MIN_RATING};
pub use square::{square_async, SQUARE_DELAY};
pub use value_size::{process_value, Value};
pub use vehicle::{Car, Describe, Vehicle};
