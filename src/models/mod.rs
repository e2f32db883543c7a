//! Data models for Vigifeu

pub mod client;
pub mod enums;
pub mod equipment;
pub mod material;
pub mod user;

// Re-export commonly used types
pub use client::{Client, ClientWithEquipments};
pub use enums::{MaterialType, RechargeType};
pub use equipment::{Equipment, EquipmentWithMaterial};
pub use material::Material;
pub use user::{User, UserClaims};
