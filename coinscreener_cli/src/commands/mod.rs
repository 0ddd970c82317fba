pub mod markets;
pub mod recommend;
