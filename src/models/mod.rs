pub mod assessment;
pub mod enums;
pub mod imaging;
pub mod lab;

pub use assessment::*;
pub use enums::*;
pub use imaging::*;
pub use lab::*;
