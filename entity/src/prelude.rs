pub use super::order::Entity as Order;
pub use super::recipient::Entity as Recipient;
pub use super::school::Entity as School;
pub use super::user::Entity as User;
