pub mod gateway;

pub use self::gateway::Gateway;
