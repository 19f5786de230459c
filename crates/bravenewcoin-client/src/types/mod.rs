/*
[INPUT]:  Caller identity, request scalars and endpoint names
[OUTPUT]: Value types shared by every resource client
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When a new resource or parameter kind is added
*/

pub mod credentials;
pub mod params;
pub mod resource;

pub use credentials::*;
pub use params::*;
pub use resource::*;
