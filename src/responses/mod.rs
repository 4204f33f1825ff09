pub mod csv;
pub mod html;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use self::csv::csv_response;
pub use html::html_response;
pub use redirect::redirect;
pub use xlsx::xlsx_response;
