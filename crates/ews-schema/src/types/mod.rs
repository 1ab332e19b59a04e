//! Complex and simple types of the `types` schema
//! (`http://schemas.microsoft.com/exchange/services/2006/types`).
pub mod delegate;
pub mod email;
pub mod ids;
pub mod oof;
pub mod phone;
pub mod response;
pub mod server;
pub mod upload;

pub use delegate::*;
pub use email::*;
pub use ids::*;
pub use oof::*;
pub use phone::*;
pub use response::*;
pub use server::*;
pub use upload::*;
