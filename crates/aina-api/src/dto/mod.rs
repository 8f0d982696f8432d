mod request;
mod response;

pub use request::CoordinateQuery;
pub use response::*;
