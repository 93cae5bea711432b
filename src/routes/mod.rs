mod contact;
mod health_check;
mod home;

pub use contact::*;
pub use health_check::*;
pub use home::*;
