pub mod bearer;
pub mod context;
pub mod gate;
pub mod hasher;
pub mod login;
pub mod middleware;
pub mod resolver;
pub mod token_codec;
