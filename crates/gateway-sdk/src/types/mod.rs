/*
[INPUT]:  Wire schema of the Gateway auth endpoints and wallet identities
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions shared by wallet, auth and http
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
