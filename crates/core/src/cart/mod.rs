//! Cart module - the cart shape rate providers read.

mod cart_model;

pub use cart_model::{Cart, CartItem, ShippingAddress, ShippingGroup};
