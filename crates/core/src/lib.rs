pub mod error;
pub mod settings;
pub mod store;
pub mod traits;

pub use error::*;
pub use settings::*;
pub use store::*;
pub use traits::*;
