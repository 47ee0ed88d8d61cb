mod gender;
mod looking_for;

pub use gender::Gender;
pub use looking_for::LookingFor;
