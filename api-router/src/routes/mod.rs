pub mod chat;
pub mod corpus;
pub mod liveness;
pub mod readiness;
