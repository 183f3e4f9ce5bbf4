mod api_ext;
mod rotation_request;
mod rotation_step;

pub use self::{rotation_request::RotationRequest, rotation_step::RotationStep};
