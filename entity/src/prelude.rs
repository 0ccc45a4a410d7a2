pub use super::{
    character::Entity as Character, favorite::Entity as Favorite, planet::Entity as Planet,
    user::Entity as User, vehicle::Entity as Vehicle,
};
