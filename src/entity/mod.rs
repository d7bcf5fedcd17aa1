pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod coupons;
pub mod order_discounts;
pub mod orders;
pub mod payment_methods;
pub mod payments;
pub mod products;
pub mod refunds;
pub mod shipping_info;
pub mod user_cards;
pub mod users;

pub use cart_items::Entity as CartItems;
pub use carts::Entity as Carts;
pub use categories::Entity as Categories;
pub use coupons::Entity as Coupons;
pub use order_discounts::Entity as OrderDiscounts;
pub use orders::Entity as Orders;
pub use payment_methods::Entity as PaymentMethods;
pub use payments::Entity as Payments;
pub use products::Entity as Products;
pub use refunds::Entity as Refunds;
pub use shipping_info::Entity as ShippingInfo;
pub use user_cards::Entity as UserCards;
pub use users::Entity as Users;
