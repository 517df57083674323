pub mod address;
pub mod number;
pub mod pattern;
pub mod url;

pub use address::{NameResolver, SystemResolver, resolve_address};
pub use pattern::{Extractor, compile_pattern};
pub use number::parse_leading_int;
pub use url::{select_port, split_url_prefix};
