mod ids;
mod user;

pub use ids::UserId;
pub use user::{Age, User, Username};
