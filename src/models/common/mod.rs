pub mod division;
pub mod pagination;
pub mod period;
pub mod response;

pub use division::Division;
pub use pagination::{PaginationInfo, normalize_page};
pub use period::Period;
pub use response::ApiResponse;
